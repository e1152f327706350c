//! Ray construction from a camera transform
use nalgebra::{Matrix4, Point2, Point3, Unit, Vector3};

/// A ray with a unit-length direction
#[derive(Copy, Clone, Debug)]
pub struct Ray {
    /// Starting point, in world coordinates
    pub origin: Point3<f32>,
    /// Normalized direction
    pub dir: Unit<Vector3<f32>>,
}

impl Ray {
    /// Builds a ray, normalizing the given direction
    ///
    /// A zero-length direction produces a NaN direction rather than an error.
    pub fn new(origin: Point3<f32>, dir: Vector3<f32>) -> Self {
        Self {
            origin,
            dir: Unit::new_normalize(dir),
        }
    }

    /// Builds a ray through a point on the view plane
    ///
    /// `inv` is the inverse of the camera (world-to-eye) transform, i.e. it
    /// maps from eye to world coordinates.  The ray starts at the eye (the
    /// local origin) and passes through `(screen.x, screen.y, -1)` in eye
    /// coordinates.
    ///
    /// `inv` is expected to be affine, in which case the homogeneous `w`
    /// stays at 1 and the result matches a plain `(inv * vec4(p, 1)).xyz`.
    pub fn from_inverse(inv: &Matrix4<f32>, screen: Point2<f32>) -> Self {
        let origin = inv.transform_point(&Point3::origin());
        let target =
            inv.transform_point(&Point3::new(screen.x, screen.y, -1.0));
        Self::new(origin, target - origin)
    }

    /// Returns the point at distance `t` along the ray
    #[inline]
    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.dir.into_inner() * t
    }
}
