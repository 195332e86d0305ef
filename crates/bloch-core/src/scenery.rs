use crate::config::SceneConfig;
use crate::constants::{CUBE_SPREAD, CUBE_Z_FAR, CUBE_Z_NEAR, STAR_SPREAD};
use glam::Vec3;
use rand::prelude::*;

/// Uniform sample in `[-range / 2, range / 2]`.
#[inline]
pub fn rand_float_spread<R: Rng + ?Sized>(rng: &mut R, range: f32) -> f32 {
    range * (0.5 - rng.gen::<f32>())
}

/// Background decoration: point stars around the scene and a few cubes
/// floating behind the sphere.
#[derive(Clone, Debug, Default)]
pub struct Scenery {
    pub stars: Vec<Vec3>,
    pub cubes: Vec<Vec3>,
}

impl Scenery {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &SceneConfig) -> Self {
        let stars = (0..config.star_count)
            .map(|_| {
                Vec3::new(
                    rand_float_spread(rng, STAR_SPREAD),
                    rand_float_spread(rng, STAR_SPREAD),
                    rand_float_spread(rng, STAR_SPREAD),
                )
            })
            .collect();
        let cubes = (0..config.cube_count)
            .map(|_| {
                Vec3::new(
                    rand_float_spread(rng, CUBE_SPREAD),
                    rand_float_spread(rng, CUBE_SPREAD),
                    rng.gen_range(CUBE_Z_FAR..=CUBE_Z_NEAR),
                )
            })
            .collect();
        Self { stars, cubes }
    }

    pub fn from_seed(seed: u64, config: &SceneConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(&mut rng, config)
    }

    /// Seeded when the config asks for it, otherwise from the thread RNG.
    pub fn for_config(config: &SceneConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| thread_rng().gen());
        log::debug!("[scenery] seed={seed}");
        Self::from_seed(seed, config)
    }
}
