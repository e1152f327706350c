//! Host-side frame state: the animation clock, player steering, and the
//! stereo camera rig which turns a player transform into [`Uniforms`]
use crate::{
    Error,
    uniforms::{Uniforms, View},
};
use nalgebra::{Matrix4, Rotation3, Vector3};

/// Yaw change per unit of horizontal input
const SENSITIVITY_X: f32 = 0.01;

/// Speed change per unit of vertical input
const SENSITIVITY_Y: f32 = 0.02;

/// Distance travelled per frame at unit speed
const SPEED: f32 = 0.1;

/// Animation clock, advancing by a fixed step per frame
#[derive(Copy, Clone, Debug)]
pub struct Clock {
    time: f32,
    step: f32,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(0.01)
    }
}

impl Clock {
    /// Builds a clock starting at zero
    pub fn new(step: f32) -> Self {
        Self { time: 0.0, step }
    }

    /// Returns the current animation value without advancing
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Returns the current animation value, then advances to the next frame
    pub fn tick(&mut self) -> f32 {
        let t = self.time;
        self.time += self.step;
        t
    }
}

/// Source of two-axis steering input, in the range `±1`
///
/// `x` turns the player; `y` accelerates (or decelerates) along the heading.
pub trait TwoAxis {
    /// Reads the current axis values
    fn axes(&mut self) -> Result<(f32, f32), Error>;
}

/// Steering input which never changes
#[derive(Copy, Clone, Debug, Default)]
pub struct FixedAxes {
    /// Turning input
    pub x: f32,
    /// Throttle input
    pub y: f32,
}

impl FixedAxes {
    /// Builds a new constant input, rejecting values outside of `±1`
    pub fn new(x: f32, y: f32) -> Result<Self, Error> {
        for v in [x, y] {
            if !(-1.0..=1.0).contains(&v) {
                return Err(Error::Input(format!(
                    "axis value {v} is outside of [-1, 1]"
                )));
            }
        }
        Ok(Self { x, y })
    }
}

impl TwoAxis for FixedAxes {
    fn axes(&mut self) -> Result<(f32, f32), Error> {
        Ok((self.x, self.y))
    }
}

/// Player position and heading, steered by a [`TwoAxis`] input
pub struct PlayerMovement {
    position: Vector3<f32>,
    yaw: f32,
    speed: f32,
    input: Box<dyn TwoAxis + Send>,
}

impl PlayerMovement {
    /// Builds a player at the origin, facing along `-x`
    pub fn new(input: Box<dyn TwoAxis + Send>) -> Self {
        Self {
            position: Vector3::zeros(),
            yaw: std::f32::consts::FRAC_PI_2,
            speed: 0.0,
            input,
        }
    }

    /// Returns the current position
    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    /// Returns the current yaw, in radians
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Returns the current speed
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Returns the unit vector along which the player moves
    pub fn heading(&self) -> Vector3<f32> {
        Rotation3::from_euler_angles(0.0, self.yaw, 0.0)
            * Vector3::new(0.0, 0.0, -1.0)
    }

    /// Returns the player-to-world transform
    pub fn transform(&self) -> Matrix4<f32> {
        Matrix4::new_translation(&self.position)
            * Matrix4::from_euler_angles(0.0, self.yaw, 0.0)
    }

    /// Reads input, advances by one frame, and returns the new transform
    pub fn update(&mut self) -> Result<Matrix4<f32>, Error> {
        let (x, y) = self.input.axes()?;
        self.yaw += x * SENSITIVITY_X;
        self.speed += y * SENSITIVITY_Y;
        self.position += self.heading() * self.speed * SPEED;
        Ok(self.transform())
    }
}

/// Builds per-eye camera matrices from a player transform
#[derive(Copy, Clone, Debug)]
pub struct StereoRig {
    /// Distance between the two eyes, in world units
    pub ipd: f32,
}

impl Default for StereoRig {
    fn default() -> Self {
        Self { ipd: 0.064 }
    }
}

impl StereoRig {
    /// Returns the eye-to-world transform for one view
    pub fn eye(&self, base: &Matrix4<f32>, view: View) -> Matrix4<f32> {
        let offset = match view {
            View::Left => -self.ipd / 2.0,
            View::Right => self.ipd / 2.0,
        };
        base * Matrix4::new_translation(&Vector3::new(offset, 0.0, 0.0))
    }

    /// Builds the uniform block for a frame
    ///
    /// Each camera matrix is the inverse of that eye's transform; a singular
    /// `base` is reported as [`Error::SingularCamera`].
    pub fn uniforms(
        &self,
        base: &Matrix4<f32>,
        anim: f32,
    ) -> Result<Uniforms, Error> {
        let camera = |view| {
            self.eye(base, view)
                .try_inverse()
                .ok_or(Error::SingularCamera(view))
        };
        Ok(Uniforms::new(
            [camera(View::Left)?, camera(View::Right)?],
            anim,
        ))
    }
}
