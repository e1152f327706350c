//! Per-frame inputs shared by every invocation
use crate::{Error, scene::TiledScene};
use nalgebra::Matrix4;
use strum::{Display, EnumIter};

/// Stereo view index
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum View {
    /// View index 0
    Left = 0,
    /// View index 1
    Right = 1,
}

impl View {
    /// Returns the numeric view index
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for View {
    type Error = Error;
    fn try_from(i: usize) -> Result<Self, Error> {
        match i {
            0 => Ok(View::Left),
            1 => Ok(View::Right),
            i => Err(Error::BadViewIndex(i)),
        }
    }
}

/// Read-only context for rendering a single frame
///
/// This is the equivalent of a uniform block: one world-to-eye camera matrix
/// per view, plus the animation scalar.
#[derive(Copy, Clone, Debug)]
pub struct Uniforms {
    /// World-to-eye transforms, indexed by [`View::index`]
    ///
    /// These must be affine (bottom row `0, 0, 0, 1`).  Projection matrices
    /// are not supported: rays are built by transforming points through the
    /// inverse, and a projective `w` would bend them.
    pub camera: [Matrix4<f32>; 2],
    /// Animation scalar, advancing monotonically from frame to frame
    pub anim: f32,
}

impl Default for Uniforms {
    fn default() -> Self {
        Self::new([Matrix4::identity(); 2], 0.0)
    }
}

impl Uniforms {
    /// Builds a new uniform block
    pub fn new(camera: [Matrix4<f32>; 2], anim: f32) -> Self {
        Self { camera, anim }
    }

    /// Returns the camera matrix for the given view
    pub fn camera(&self, view: View) -> &Matrix4<f32> {
        &self.camera[view.index()]
    }

    /// Returns the eye-to-world transform for the given view
    pub fn inverse(&self, view: View) -> Result<Matrix4<f32>, Error> {
        self.camera(view)
            .try_inverse()
            .ok_or(Error::SingularCamera(view))
    }

    /// Returns the scene at this frame's animation time
    pub fn scene(&self) -> TiledScene {
        TiledScene::new(self.anim)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::Vector3;
    use strum::IntoEnumIterator;

    #[test]
    fn test_view_index() {
        for v in View::iter() {
            assert_eq!(View::try_from(v.index()).unwrap(), v);
        }
        assert!(matches!(View::try_from(2), Err(Error::BadViewIndex(2))));
        assert_eq!(View::Left.to_string(), "left");
        assert_eq!(View::Right.to_string(), "right");
    }

    #[test]
    fn test_inverse() {
        let left = Matrix4::new_translation(&Vector3::new(1.0, 0.0, 0.0));
        let right = Matrix4::new_translation(&Vector3::new(-1.0, 0.0, 0.0));
        let u = Uniforms::new([left, right], 0.0);
        assert_eq!(u.inverse(View::Left).unwrap(), right);
        assert_eq!(u.inverse(View::Right).unwrap(), left);

        let u = Uniforms::new([Matrix4::zeros(), Matrix4::identity()], 0.0);
        assert!(matches!(
            u.inverse(View::Left),
            Err(Error::SingularCamera(View::Left))
        ));
        assert!(u.inverse(View::Right).is_ok());
    }
}
