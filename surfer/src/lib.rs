//! Surfer renders an infinite, tiled field of cubes by sphere tracing a
//! signed distance function, once per pixel and once per eye.
//!
//! The kernel is a pure function of its inputs.  Each invocation takes a
//! per-frame [`Uniforms`](crate::uniforms::Uniforms) block (two camera
//! matrices and an animation scalar), a [`View`](crate::uniforms::View)
//! index, and a screen-space fragment position, and returns an opaque RGBA
//! color:
//!
//! ```
//! use nalgebra::{Matrix4, Point3};
//! use surfer::{shade::shade_fragment, uniforms::{Uniforms, View}};
//!
//! let uniforms = Uniforms::new([Matrix4::identity(); 2], 0.0);
//! let rgba = shade_fragment(&uniforms, View::Left, Point3::new(0.0, 0.0, 0.0));
//! assert_eq!(rgba.w, 1.0);
//! ```
//!
//! The data flow inside one invocation is
//! camera inverse → [`Ray`](crate::ray::Ray) →
//! [`march`](crate::march::march) over an [`Sdf`](crate::scene::Sdf) →
//! color.
//!
//! # Rendering images
//! [`RenderConfig`](crate::render::RenderConfig) runs the kernel over every
//! pixel of an image, in parallel via [`rayon`].  There's no shared mutable
//! state between pixels, so the dispatcher is a plain parallel-for over rows:
//!
//! ```
//! use nalgebra::Matrix4;
//! use surfer::render::{ImageSize, RenderConfig};
//! use surfer::uniforms::Uniforms;
//!
//! let cfg = RenderConfig {
//!     image_size: ImageSize::new(16, 8),
//!     ..Default::default()
//! };
//! let uniforms = Uniforms::new([Matrix4::identity(); 2], 0.0);
//! let stereo = cfg.render_stereo(&uniforms)?;
//! assert_eq!(stereo.side_by_side().width(), 32);
//! # Ok::<(), surfer::Error>(())
//! ```
//!
//! # Animation and cameras
//! The host side of a frame (advancing the animation clock, steering the
//! player, and building the two eye matrices) lives in [`motion`].
#![warn(missing_docs)]

mod error;
pub use error::Error;

pub mod march;
pub mod motion;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shade;
pub mod uniforms;
