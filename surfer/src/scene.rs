//! Distance field for the tiled cube scene
//!
//! Space is cut into unit cells on the horizontal `xz` plane.  Each cell holds
//! the same pair of cubes (one fixed, one bobbing with the animation scalar),
//! tinted by a color picked from a per-cell hash.
use nalgebra::{Point3, Vector2, Vector3};

/// Linear RGB color
///
/// Channels are not clamped until the final output stage, so intermediate
/// values may leave the `[0, 1]` range.
pub type Color = Vector3<f32>;

/// Half-extent of each cube
pub const CUBE_SIDE: f32 = 0.9;

/// Height of the fixed cube's center
const FIXED_HEIGHT: f32 = -2.0;

/// Resting height of the bobbing cube's center
const BOB_HEIGHT: f32 = 3.0;

/// Amount by which cube tints are pulled toward white (or negative white)
const TINT: f32 = 0.25;

const ORANGE: [f32; 3] = [1.0, 0.5, 0.0];

/// Distance and color at a point in space
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfSample {
    /// Distance to the nearest surface (never negative)
    pub dist: f32,
    /// Color of the nearest surface
    pub color: Color,
}

/// A distance field which can be sampled at any point
///
/// Implementations must be pure: the same position always produces the same
/// sample.
pub trait Sdf: Sync {
    /// Samples the field at the given position
    fn sample(&self, p: Point3<f32>) -> SdfSample;
}

/// GLSL-style fractional part, which is always positive
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Distance to an axis-aligned cube
///
/// This measures the distance from `p` to its projection onto the cube, so
/// every point inside the cube reports a distance of zero.
pub fn cube(
    p: Point3<f32>,
    origin: Point3<f32>,
    side: f32,
    color: Color,
) -> SdfSample {
    let local = p - origin;
    let clamped = local.map(|v| v.clamp(-side, side));
    SdfSample {
        dist: (local - clamped).norm(),
        color,
    }
}

/// Picks the closer of two samples, preferring `a` on ties
#[inline]
pub fn sdf_min(a: SdfSample, b: SdfSample) -> SdfSample {
    if a.dist <= b.dist { a } else { b }
}

/// Pseudo-random value in `[0, 1)` for a lattice cell
pub fn cell_hash(m: Vector2<f32>) -> f32 {
    fract((m.dot(&Vector2::new(12.9898, 78.233))).sin() * 43758.5453)
}

/// Blends between orange and its complement
pub fn cell_color(r: f32) -> Color {
    let orange = Color::from(ORANGE);
    let blue = Color::repeat(1.0) - orange;
    orange.lerp(&blue, r)
}

/// Infinite field of cubes, repeated once per unit cell in `x` and `z`
#[derive(Copy, Clone, Debug)]
pub struct TiledScene {
    /// Animation scalar, driving the bobbing cube
    pub anim: f32,
    /// Half-extent of both cubes
    pub side: f32,
}

impl TiledScene {
    /// Builds a scene at the given animation time
    pub fn new(anim: f32) -> Self {
        Self {
            anim,
            side: CUBE_SIDE,
        }
    }

    /// Returns the center of the bobbing cube, in cell-local coordinates
    pub fn bob_origin(&self) -> Point3<f32> {
        Point3::new(0.0, BOB_HEIGHT + self.anim.cos(), 0.0)
    }
}

impl Default for TiledScene {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Sdf for TiledScene {
    fn sample(&self, p: Point3<f32>) -> SdfSample {
        let m = Vector2::new(p.x.floor(), p.z.floor());
        let local = Point3::new(p.x - m.x, p.y, p.z - m.y);

        let base = cell_color(cell_hash(m));
        let white = Color::repeat(1.0);

        let fixed = cube(
            local,
            Point3::new(0.0, FIXED_HEIGHT, 0.0),
            self.side,
            base.lerp(&white, TINT),
        );
        let bob = cube(
            local,
            self.bob_origin(),
            self.side,
            base.lerp(&-white, TINT),
        );
        sdf_min(fixed, bob)
    }
}
