//! Per-fragment entry points
use crate::{
    march::{MarchSettings, march},
    ray::Ray,
    scene::Sdf,
    uniforms::{Uniforms, View},
};
use nalgebra::{Matrix4, Point3, Vector4};

/// Shades a single fragment against an arbitrary distance field
///
/// `inv` is the eye-to-world transform, and only the `x` and `y` components
/// of `frag_pos` are used.  The output is always opaque.
pub fn fragment<S: Sdf + ?Sized>(
    sdf: &S,
    inv: &Matrix4<f32>,
    frag_pos: Point3<f32>,
    settings: &MarchSettings,
) -> Vector4<f32> {
    let ray = Ray::from_inverse(inv, frag_pos.xy());
    let c = march(sdf, &ray, settings).result.color();
    Vector4::new(c.x, c.y, c.z, 1.0)
}

/// Shades a single fragment of the tiled scene for one view
///
/// This inverts the view's camera matrix on every call.  A singular camera
/// doesn't produce an error here: the NaN-filled inverse flows through the
/// march and the fragment comes out as background.
pub fn shade_fragment(
    uniforms: &Uniforms,
    view: View,
    frag_pos: Point3<f32>,
) -> Vector4<f32> {
    let inv = uniforms
        .camera(view)
        .try_inverse()
        .unwrap_or_else(|| Matrix4::from_element(f32::NAN));
    fragment(&uniforms.scene(), &inv, frag_pos, &MarchSettings::default())
}

/// Converts a color into 8-bit RGBA, clamping each channel to `[0, 1]`
///
/// NaN channels become zero.
pub fn to_rgba8(c: Vector4<f32>) -> [u8; 4] {
    let c = c.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8);
    [c.x, c.y, c.z, c.w]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scene::{Sdf, TiledScene};
    use nalgebra::Vector3;

    /// Camera looking straight down from the middle of cell (0, 0)
    fn looking_down(height: f32) -> Matrix4<f32> {
        let eye = Matrix4::new_translation(&Vector3::new(0.45, height, 0.45))
            * Matrix4::from_euler_angles(
                -std::f32::consts::FRAC_PI_2,
                0.0,
                0.0,
            );
        eye.try_inverse().unwrap()
    }

    #[test]
    fn test_hit_fixed_cube() {
        let u = Uniforms::new([looking_down(0.0); 2], 0.0);
        let c = shade_fragment(&u, View::Left, Point3::origin());
        let expected = TiledScene::new(0.0)
            .sample(Point3::new(0.45, -1.5, 0.45))
            .color;
        assert_eq!(c, Vector4::new(expected.x, expected.y, expected.z, 1.0));
        assert_ne!(c.xyz(), Vector3::zeros());
    }

    #[test]
    fn test_escape() {
        // Far above the scene, every sample is past the far clip
        let u = Uniforms::new([looking_down(5000.0); 2], 0.0);
        let c = shade_fragment(&u, View::Right, Point3::new(0.5, 0.5, 0.0));
        assert_eq!(c, Vector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_exhausted_horizon() {
        // Looking horizontally from between the two cubes, the distance stays
        // above the hit threshold and the march runs out of steps
        let u = Uniforms::default();
        let c = shade_fragment(&u, View::Left, Point3::origin());
        assert_eq!(c, Vector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_singular_camera() {
        let u = Uniforms::new([Matrix4::zeros(); 2], 0.0);
        let c = shade_fragment(&u, View::Left, Point3::origin());
        assert_eq!(to_rgba8(c), [0, 0, 0, 255]);
    }

    #[test]
    fn test_to_rgba8() {
        assert_eq!(
            to_rgba8(Vector4::new(0.0, 0.5, 1.0, 1.0)),
            [0, 128, 255, 255]
        );
        assert_eq!(
            to_rgba8(Vector4::new(-0.3, 2.0, f32::NAN, 1.0)),
            [0, 255, 0, 255]
        );
    }
}
