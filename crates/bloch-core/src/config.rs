//! Scene configuration gathered from the constants in [`crate::constants`].
//!
//! Front-ends start from `SceneConfig::default()`, apply whatever overrides
//! their platform offers (data attributes, environment variables) and call
//! [`SceneConfig::validate`] before building anything from it.

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub target_unix_ms: i64,
    pub countdown_interval_ms: i32,
    pub sphere_radius: f32,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub star_count: usize,
    pub cube_count: usize,
    /// Fixed seed for the star/cube layout; `None` picks a random one.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            target_unix_ms: FEST_START_UNIX_MS,
            countdown_interval_ms: COUNTDOWN_INTERVAL_MS,
            sphere_radius: SPHERE_RADIUS,
            damping_factor: CONTROLS_DAMPING,
            min_distance: CONTROLS_MIN_DISTANCE,
            max_distance: CONTROLS_MAX_DISTANCE,
            star_count: STAR_COUNT,
            cube_count: CUBE_COUNT,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sphere_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(self.sphere_radius));
        }
        if self.countdown_interval_ms <= 0 {
            return Err(ConfigError::NonPositiveInterval(self.countdown_interval_ms));
        }
        if !(self.damping_factor > 0.0 && self.damping_factor <= 1.0) {
            return Err(ConfigError::DampingOutOfRange(self.damping_factor));
        }
        if !(self.min_distance > 0.0 && self.min_distance <= self.max_distance) {
            return Err(ConfigError::DistanceRange {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        Ok(())
    }

    /// Distance the camera starts at, kept inside the zoom limits.
    #[inline]
    pub fn start_distance(&self) -> f32 {
        CAMERA_START_Z.clamp(self.min_distance, self.max_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SceneConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_inverted_distance_limits() {
        let cfg = SceneConfig {
            min_distance: 60.0,
            ..SceneConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::DistanceRange { .. })
        ));
    }

    #[test]
    fn rejects_nan_radius() {
        let cfg = SceneConfig {
            sphere_radius: f32::NAN,
            ..SceneConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::NonPositiveRadius(_))));
    }

    #[test]
    fn start_distance_respects_limits() {
        let cfg = SceneConfig {
            min_distance: 35.0,
            max_distance: 40.0,
            ..SceneConfig::default()
        };
        assert_eq!(cfg.start_distance(), 35.0);
    }
}
