//! Motion of the state vector over the sphere surface.

use crate::constants::{ORBIT_TIME_SCALE, THETA_FREQUENCY};
use glam::Vec3;
use std::f64::consts::PI;

/// Polar (`theta`, measured from +Y) and azimuthal (`phi`) angle in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitAngles {
    pub theta: f64,
    pub phi: f64,
}

/// Angles for a wall-clock time in milliseconds.
///
/// `theta` swings between 0 and PI on a sine wave, `phi` grows linearly so
/// the vector keeps circling the vertical axis.
#[inline]
pub fn angles_at(time_ms: f64) -> OrbitAngles {
    let t = time_ms * ORBIT_TIME_SCALE;
    OrbitAngles {
        theta: ((t * THETA_FREQUENCY).sin() + 1.0) * PI / 2.0,
        phi: t,
    }
}

/// Y-up spherical to Cartesian conversion.
#[inline]
pub fn spherical_to_cartesian(radius: f64, angles: OrbitAngles) -> Vec3 {
    let (sin_t, cos_t) = angles.theta.sin_cos();
    let (sin_p, cos_p) = angles.phi.sin_cos();
    Vec3::new(
        (radius * sin_t * cos_p) as f32,
        (radius * cos_t) as f32,
        (radius * sin_t * sin_p) as f32,
    )
}

#[derive(Clone, Copy, Debug)]
pub struct StateVector {
    pub radius: f32,
}

impl StateVector {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Tip of the vector (head marker and line endpoint) at `time_ms`.
    #[inline]
    pub fn tip_at(&self, time_ms: f64) -> Vec3 {
        spherical_to_cartesian(self.radius as f64, angles_at(time_ms))
    }
}
