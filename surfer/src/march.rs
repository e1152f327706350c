//! Sphere tracing
//!
//! Starting a short distance along the ray, the march repeatedly samples the
//! distance field and steps forward by the reported distance.  It stops on a
//! hit (distance below [`MarchSettings::hit`]), on an escape (distance above
//! [`MarchSettings::far`]), or after [`MarchSettings::max_steps`] samples.
use crate::{
    ray::Ray,
    scene::{Color, Sdf},
};

/// Tuning parameters for the march loop
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarchSettings {
    /// Distance along the ray at which marching begins
    pub near: f32,
    /// Maximum number of distance samples
    pub max_steps: usize,
    /// A sample closer than this is a hit
    pub hit: f32,
    /// A sample farther than this is an escape
    pub far: f32,
}

impl Default for MarchSettings {
    fn default() -> Self {
        Self {
            near: 0.1,
            max_steps: 50,
            hit: 0.01,
            far: 1000.0,
        }
    }
}

/// Color for rays which don't hit anything
pub fn background() -> Color {
    Color::zeros()
}

/// Terminal state of a march
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarchResult {
    /// The ray reached a surface with the given color
    Hit(Color),
    /// The distance field reported a distance beyond the far clip
    Escaped,
    /// The step budget ran out without a hit or escape
    ///
    /// This is drawn as background, even though the last sample had a color.
    Exhausted,
}

impl MarchResult {
    /// Returns the color to draw for this result
    pub fn color(&self) -> Color {
        match self {
            MarchResult::Hit(c) => *c,
            MarchResult::Escaped | MarchResult::Exhausted => background(),
        }
    }

    /// Checks whether this result is a hit
    pub fn is_hit(&self) -> bool {
        matches!(self, MarchResult::Hit(..))
    }
}

/// Result of a march, along with the number of samples taken
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct March {
    /// Terminal state
    pub result: MarchResult,
    /// Number of distance samples evaluated
    pub steps: usize,
}

/// Marches along a ray through the given distance field
pub fn march<S: Sdf + ?Sized>(
    sdf: &S,
    ray: &Ray,
    settings: &MarchSettings,
) -> March {
    let dir = ray.dir.into_inner();
    let mut pos = ray.at(settings.near);
    for i in 0..settings.max_steps {
        let s = sdf.sample(pos);
        if s.dist < settings.hit {
            return March {
                result: MarchResult::Hit(s.color),
                steps: i + 1,
            };
        } else if s.dist > settings.far {
            return March {
                result: MarchResult::Escaped,
                steps: i + 1,
            };
        }
        pos += dir * s.dist;
    }
    March {
        result: MarchResult::Exhausted,
        steps: settings.max_steps,
    }
}
