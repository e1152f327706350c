//! Rendering the scene into images
//!
//! Every pixel is an independent invocation of the per-fragment kernel, so
//! rendering is a parallel-for over image rows.  Build a [`RenderConfig`] and
//! call [`RenderConfig::render_view`] or [`RenderConfig::render_stereo`].
use crate::{
    Error,
    scene::Sdf,
    shade::{fragment, to_rgba8},
    uniforms::{Uniforms, View},
};
use log::debug;
use nalgebra::{Matrix4, Point3};
use std::time::Instant;

mod config;
mod image;

pub use config::{ImageSize, RenderConfig, ThreadPool};
pub use image::{ColorImage, Image};

/// Pair of images, one per eye
#[derive(Clone, Debug)]
pub struct StereoImage {
    /// Image for [`View::Left`]
    pub left: ColorImage,
    /// Image for [`View::Right`]
    pub right: ColorImage,
}

impl StereoImage {
    /// Returns the image for a particular view
    pub fn view(&self, view: View) -> &ColorImage {
        match view {
            View::Left => &self.left,
            View::Right => &self.right,
        }
    }

    /// Places the two views next to each other, left then right
    ///
    /// # Panics
    /// If the images have different sizes
    pub fn side_by_side(&self) -> ColorImage {
        assert_eq!(self.left.size(), self.right.size());
        let w = self.left.width();
        let size = ImageSize::new(
            self.left.size().width() * 2,
            self.left.size().height(),
        );
        let mut out = ColorImage::new(size);
        out.apply_effect(
            |x, y| {
                if x < w {
                    self.left[(y, x)]
                } else {
                    self.right[(y, x - w)]
                }
            },
            None,
        );
        out
    }
}

impl RenderConfig<'_> {
    /// Renders an arbitrary distance field from the given eye-to-world
    /// transform
    pub fn render_sdf<S: Sdf + ?Sized>(
        &self,
        sdf: &S,
        inv: &Matrix4<f32>,
    ) -> Result<ColorImage, Error> {
        self.image_size.check()?;
        let size = self.image_size;
        let mut image = ColorImage::new(size);
        image.apply_effect(
            |x, y| {
                let s = size.pixel_to_screen(x, y);
                let frag_pos = Point3::new(s.x, s.y, 0.0);
                to_rgba8(fragment(sdf, inv, frag_pos, &self.march))
            },
            self.threads,
        );
        Ok(image)
    }

    /// Renders the tiled scene for a single view
    pub fn render_view(
        &self,
        uniforms: &Uniforms,
        view: View,
    ) -> Result<ColorImage, Error> {
        let start = Instant::now();
        let inv = uniforms.inverse(view)?;
        let image = self.render_sdf(&uniforms.scene(), &inv)?;
        debug!(
            "rendered {view} view ({}x{}) in {:?}",
            self.image_size.width(),
            self.image_size.height(),
            start.elapsed()
        );
        Ok(image)
    }

    /// Renders the tiled scene for both views
    pub fn render_stereo(
        &self,
        uniforms: &Uniforms,
    ) -> Result<StereoImage, Error> {
        Ok(StereoImage {
            left: self.render_view(uniforms, View::Left)?,
            right: self.render_view(uniforms, View::Right)?,
        })
    }
}
