//! Integration tests for stereo rendering of the tiled scene
use nalgebra::{Matrix4, Point2, Point3, Vector3};
use surfer::{
    march::{MarchSettings, march},
    motion::{FixedAxes, PlayerMovement, StereoRig},
    ray::Ray,
    render::{ImageSize, RenderConfig, ThreadPool},
    scene::{Sdf, TiledScene},
    shade::{shade_fragment, to_rgba8},
    uniforms::{Uniforms, View},
};

/// Camera tilted down toward the floor of cubes
fn tilted_uniforms(anim: f32) -> Uniforms {
    let base = Matrix4::new_translation(&Vector3::new(0.3, 0.0, 0.7))
        * Matrix4::from_euler_angles(-0.6, 0.2, 0.0);
    StereoRig { ipd: 0.2 }.uniforms(&base, anim).unwrap()
}

#[test]
fn render_matches_kernel() {
    let size = ImageSize::new(16, 12);
    let cfg = RenderConfig {
        image_size: size,
        ..Default::default()
    };
    let u = tilted_uniforms(0.25);
    let image = cfg.render_view(&u, View::Right).unwrap();

    for row in 0..size.height() as usize {
        for col in 0..size.width() as usize {
            let s = size.pixel_to_screen(col, row);
            let expected = to_rgba8(shade_fragment(
                &u,
                View::Right,
                Point3::new(s.x, s.y, 0.0),
            ));
            assert_eq!(
                image[(row, col)],
                expected,
                "mismatch at ({row}, {col})"
            );
        }
    }
}

#[test]
fn render_hits_floor() {
    let cfg = RenderConfig {
        image_size: ImageSize::new(24, 24),
        ..Default::default()
    };
    let stereo = cfg.render_stereo(&tilted_uniforms(0.0)).unwrap();
    for view in [View::Left, View::Right] {
        let img = stereo.view(view);
        assert!(img.iter().all(|p| p[3] == 255));
        assert!(
            img.iter().any(|p| p[..3] != [0, 0, 0]),
            "{view} view is entirely background"
        );
    }
}

#[test]
fn render_is_deterministic() {
    let u = tilted_uniforms(1.0);
    let single = RenderConfig {
        image_size: ImageSize::new(20, 10),
        threads: None,
        ..Default::default()
    };
    let pool = ThreadPool::Custom(
        rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap(),
    );
    let multi = RenderConfig {
        image_size: ImageSize::new(20, 10),
        threads: Some(&pool),
        ..Default::default()
    };
    let a = single.render_stereo(&u).unwrap();
    let b = multi.render_stereo(&u).unwrap();
    assert_eq!(a.left, b.left);
    assert_eq!(a.right, b.right);
    assert_eq!(a.side_by_side(), b.side_by_side());
}

#[test]
fn animation_moves_bobbing_cube() {
    // Looking straight up from the middle of a cell, the march ends on the
    // underside of the bobbing cube.  The tint is the same at every height,
    // so compare how far the ray travels instead.
    let up = Matrix4::new_translation(&Vector3::new(0.5, 0.0, 0.5))
        * Matrix4::from_euler_angles(std::f32::consts::FRAC_PI_2, 0.0, 0.0);
    let camera = up.try_inverse().unwrap();
    let settings = MarchSettings::default();

    let trace = |anim: f32| {
        let u = Uniforms::new([camera; 2], anim);
        let inv = u.inverse(View::Left).unwrap();
        let ray = Ray::from_inverse(&inv, Point2::origin());
        let m = march(&u.scene(), &ray, &settings);
        let c = shade_fragment(&u, View::Left, Point3::origin());
        assert_eq!(c.xyz(), m.result.color());
        (m, c)
    };

    // At rest, the cube's underside is at y = 3.1
    let (high, high_color) = trace(0.0);
    assert!(high.result.is_hit());
    assert_eq!(high.steps, 3);

    // Half a period later, it has dropped to y = 1.1
    let (low, low_color) = trace(std::f32::consts::PI);
    assert!(low.result.is_hit());
    assert_eq!(low.steps, 2);

    assert_eq!(high_color, low_color);
    assert_ne!(high_color.xyz(), Vector3::zeros());

    // In between the two, a point under the resting cube is inside the
    // lowered one
    let p = Point3::new(0.5, 1.5, 0.5);
    assert!(TiledScene::new(0.0).sample(p).dist > 1.0);
    assert_eq!(TiledScene::new(std::f32::consts::PI).sample(p).dist, 0.0);
}

#[test]
fn player_drives_cameras() {
    let mut player =
        PlayerMovement::new(Box::new(FixedAxes::new(0.2, 1.0).unwrap()));
    let rig = StereoRig::default();
    let mut prev = None;
    for _ in 0..3 {
        let base = player.update().unwrap();
        let u = rig.uniforms(&base, 0.0).unwrap();
        let eye = u.inverse(View::Left).unwrap();
        let pos = eye.transform_point(&Point3::origin());
        if let Some(p) = prev {
            assert_ne!(pos, p);
        }
        prev = Some(pos);
    }
}
