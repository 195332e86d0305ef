// Star and cube placement.

use bloch_core::*;
use rand::prelude::*;

#[test]
fn seeded_layouts_are_reproducible() {
    let cfg = SceneConfig::default();
    let a = Scenery::from_seed(42, &cfg);
    let b = Scenery::from_seed(42, &cfg);
    let c = Scenery::from_seed(43, &cfg);
    assert_eq!(a.stars, b.stars);
    assert_eq!(a.cubes, b.cubes);
    assert_ne!(a.stars, c.stars);
}

#[test]
fn counts_follow_config() {
    let cfg = SceneConfig::default();
    let s = Scenery::from_seed(1, &cfg);
    assert_eq!(s.stars.len(), STAR_COUNT);
    assert_eq!(s.cubes.len(), CUBE_COUNT);

    let sparse = SceneConfig {
        star_count: 3,
        cube_count: 0,
        seed: Some(9),
        ..SceneConfig::default()
    };
    let s = Scenery::for_config(&sparse);
    assert_eq!(s.stars.len(), 3);
    assert!(s.cubes.is_empty());
    assert_eq!(s.stars, Scenery::from_seed(9, &sparse).stars);
}

#[test]
fn positions_stay_inside_their_volumes() {
    let s = Scenery::from_seed(5, &SceneConfig::default());
    let half = STAR_SPREAD / 2.0;
    for p in &s.stars {
        assert!(p.x.abs() <= half && p.y.abs() <= half && p.z.abs() <= half);
    }
    for p in &s.cubes {
        assert!(p.x.abs() <= CUBE_SPREAD / 2.0);
        assert!(p.y.abs() <= CUBE_SPREAD / 2.0);
        assert!(p.z >= CUBE_Z_FAR && p.z <= CUBE_Z_NEAR);
    }
}

#[test]
fn spread_is_symmetric_around_zero() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for _ in 0..10_000 {
        let v = rand_float_spread(&mut rng, 10.0);
        assert!((-5.0..=5.0).contains(&v));
        min = min.min(v);
        max = max.max(v);
    }
    assert!(min < -4.5 && max > 4.5);
}
