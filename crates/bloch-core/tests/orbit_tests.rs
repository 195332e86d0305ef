// State vector motion: sphere-surface invariant and angle ranges.

use bloch_core::*;
use std::f64::consts::PI;

#[test]
fn tip_stays_on_sphere_surface() {
    let sv = StateVector::new(SPHERE_RADIUS);
    // include wall-clock sized timestamps, where f32 time would lose precision
    let mut t = 0.0_f64;
    while t < 200_000.0 {
        let tip = sv.tip_at(t);
        assert!((tip.length() - SPHERE_RADIUS).abs() < 1e-4, "t={t} len={}", tip.length());
        t += 37.3;
    }
    for t in [1.7e12, 1_761_609_600_000.0, 2.5e12 + 0.5] {
        let tip = sv.tip_at(t);
        assert!((tip.length() - SPHERE_RADIUS).abs() < 1e-4);
    }
}

#[test]
fn polar_angle_stays_within_half_turn() {
    let mut t = 0.0_f64;
    while t < 100_000.0 {
        let a = angles_at(t);
        assert!(a.theta >= 0.0 && a.theta <= PI + 1e-12);
        t += 11.0;
    }
}

#[test]
fn azimuth_grows_linearly() {
    assert_eq!(angles_at(0.0).phi, 0.0);
    assert!((angles_at(2000.0).phi - 1.0).abs() < 1e-12);
    assert!((angles_at(4000.0).phi - 2.0).abs() < 1e-12);
}

#[test]
fn starts_on_equator_along_x() {
    let tip = StateVector::new(10.0).tip_at(0.0);
    assert!((tip.x - 10.0).abs() < 1e-5);
    assert!(tip.y.abs() < 1e-5);
    assert!(tip.z.abs() < 1e-5);
}

#[test]
fn reaches_south_pole_at_peak_of_sine() {
    // t * 0.5 == PI / 2  =>  t == PI  =>  time_ms == PI / 0.0005
    let time_ms = PI / ORBIT_TIME_SCALE;
    let a = angles_at(time_ms);
    assert!((a.theta - PI).abs() < 1e-9);
    let tip = StateVector::new(10.0).tip_at(time_ms);
    assert!((tip.y + 10.0).abs() < 1e-4);
}

#[test]
fn spherical_conversion_uses_y_up() {
    let north = spherical_to_cartesian(2.0, OrbitAngles { theta: 0.0, phi: 1.3 });
    assert!((north.y - 2.0).abs() < 1e-6);
    let z_axis = spherical_to_cartesian(2.0, OrbitAngles { theta: PI / 2.0, phi: PI / 2.0 });
    assert!((z_axis.z - 2.0).abs() < 1e-6);
    assert!(z_axis.x.abs() < 1e-6);
}
