//! Perspective camera and damped orbit controls.
//!
//! These types avoid referencing platform-specific APIs; the web and native
//! front-ends feed pointer deltas into [`OrbitControls`] and read matrices
//! from [`Camera`].

use crate::config::SceneConfig;
use crate::constants::{CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, CONTROLS_ZOOM_STEP};
use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera on the +Z axis at `distance`, looking at the origin.
    pub fn looking_at_origin(distance: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Track a viewport size; zero-sized viewports keep the previous aspect.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }
}

// keeps the polar angle off the poles so `look_at` stays well defined
const POLAR_EPS: f32 = 1e-3;

/// Orbit the camera eye around a target with optional damping.
///
/// Rotation and zoom requests accumulate into pending deltas; [`update`]
/// applies them. With damping enabled only `damping_factor` of the pending
/// rotation is applied per update and the rest decays, which gives the
/// camera its inertia.
///
/// [`update`]: OrbitControls::update
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    theta: f32,
    phi: f32,
    radius: f32,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
}

impl OrbitControls {
    pub fn new(camera: &Camera, config: &SceneConfig) -> Self {
        let offset = camera.eye - camera.target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            target: camera.target,
            enable_damping: true,
            damping_factor: config.damping_factor,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            rotate_speed: 1.0,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            radius,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
        }
    }

    /// Queue a rotation from a pointer drag of `dx`, `dy` pixels.
    ///
    /// Dragging across the full viewport height turns the camera once around.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.delta_theta -= TAU * dx / h * self.rotate_speed;
        self.delta_phi -= TAU * dy / h * self.rotate_speed;
    }

    /// Queue a multiplicative change of the eye distance (`< 1` moves closer).
    pub fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.scale *= factor;
        }
    }

    /// Zoom by wheel notches; positive values move away from the target.
    pub fn zoom_wheel(&mut self, notches: f32) {
        self.zoom(CONTROLS_ZOOM_STEP.powf(-notches));
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.radius
    }

    /// Apply pending deltas to `camera`. Returns true when the eye moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let step = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        self.theta += self.delta_theta * step;
        self.phi = (self.phi + self.delta_phi * step).clamp(POLAR_EPS, PI - POLAR_EPS);
        self.radius = (self.radius * self.scale).clamp(self.min_distance, self.max_distance);

        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let offset = Vec3::new(
            self.radius * sin_phi * sin_theta,
            self.radius * cos_phi,
            self.radius * sin_phi * cos_theta,
        );
        let eye = self.target + offset;

        if self.enable_damping {
            self.delta_theta *= 1.0 - self.damping_factor;
            self.delta_phi *= 1.0 - self.damping_factor;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
        self.scale = 1.0;

        let moved = eye.distance_squared(camera.eye) > 1e-10;
        camera.eye = eye;
        camera.target = self.target;
        moved
    }
}
