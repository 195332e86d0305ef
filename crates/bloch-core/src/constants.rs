// Shared scene and timing constants used by both web and native frontends.

// Countdown
pub const FEST_START_UNIX_MS: i64 = 1_761_609_600_000; // 2025-10-28T00:00:00Z
pub const COUNTDOWN_INTERVAL_MS: i32 = 1000;

pub const MS_PER_SECOND: u64 = 1000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

// Bloch sphere layout
pub const SPHERE_RADIUS: f32 = 10.0;
pub const LABEL_OFFSET: f32 = 1.5; // labels sit just outside the sphere
pub const AXIS_EXTENT: f32 = 1.2; // axes reach 1.2 * radius
pub const SPHERE_SEGMENTS: u32 = 32;
pub const EQUATOR_TUBE: f32 = 0.05;
pub const VECTOR_HEAD_RADIUS: f32 = 0.3;

// State vector motion
pub const ORBIT_TIME_SCALE: f64 = 0.0005; // wall-clock ms -> animation time
pub const THETA_FREQUENCY: f64 = 0.5;
pub const GROUP_SPIN_PER_FRAME: f32 = 0.0005; // radians about +Y

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_START_Z: f32 = 30.0;

// Orbit controls
pub const CONTROLS_DAMPING: f32 = 0.05;
pub const CONTROLS_MIN_DISTANCE: f32 = 15.0;
pub const CONTROLS_MAX_DISTANCE: f32 = 50.0;
pub const CONTROLS_ZOOM_STEP: f32 = 0.95; // per wheel notch

// Background
pub const STAR_COUNT: usize = 300;
pub const STAR_SPREAD: f32 = 200.0;
pub const STAR_RADIUS: f32 = 0.1;
pub const CUBE_COUNT: usize = 5;
pub const CUBE_SIZE: f32 = 3.0;
pub const CUBE_SPREAD: f32 = 100.0;
pub const CUBE_Z_NEAR: f32 = -50.0;
pub const CUBE_Z_FAR: f32 = -150.0;

// Palette (linear RGBA)
pub const SPHERE_COLOR: [f32; 4] = [0.667, 0.667, 0.667, 0.1];
pub const WIREFRAME_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.2];
pub const AXIS_COLOR: [f32; 4] = [0.667, 0.667, 0.667, 0.5];
pub const EQUATOR_COLOR: [f32; 4] = [0.667, 0.667, 0.667, 0.5];
pub const VECTOR_LINE_COLOR: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
pub const VECTOR_HEAD_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
pub const STAR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const CUBE_COLOR: [f32; 4] = [0.62, 0.45, 0.26, 1.0];

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const POINT_LIGHT_POSITION: [f32; 3] = [5.0, 15.0, 15.0];
