// Relationships between scene constants.

use bloch_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_starts_inside_zoom_limits() {
    assert!(CONTROLS_MIN_DISTANCE <= CAMERA_START_Z && CAMERA_START_Z <= CONTROLS_MAX_DISTANCE);
    // the closest zoom still keeps the whole sphere in front of the camera
    assert!(CONTROLS_MIN_DISTANCE > SPHERE_RADIUS + LABEL_OFFSET);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZFAR > CONTROLS_MAX_DISTANCE + STAR_SPREAD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_is_a_fraction() {
    assert!(CONTROLS_DAMPING > 0.0 && CONTROLS_DAMPING <= 1.0);
    assert!(CONTROLS_ZOOM_STEP > 0.0 && CONTROLS_ZOOM_STEP < 1.0);
}

#[test]
fn time_units_chain() {
    assert_eq!(MS_PER_MINUTE, 60_000);
    assert_eq!(MS_PER_HOUR, 3_600_000);
    assert_eq!(MS_PER_DAY, 86_400_000);
    assert_eq!(COUNTDOWN_INTERVAL_MS, 1000);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cubes_float_behind_the_sphere() {
    assert!(CUBE_Z_FAR < CUBE_Z_NEAR);
    assert!(CUBE_Z_NEAR < -SPHERE_RADIUS);
    assert!(AXIS_EXTENT > 1.0);
    assert!(VECTOR_HEAD_RADIUS < SPHERE_RADIUS);
}

#[test]
fn palette_alphas_are_in_range() {
    for c in [
        SPHERE_COLOR,
        WIREFRAME_COLOR,
        AXIS_COLOR,
        EQUATOR_COLOR,
        VECTOR_LINE_COLOR,
        VECTOR_HEAD_COLOR,
        STAR_COLOR,
        CUBE_COLOR,
    ] {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
