pub mod camera;
pub mod config;
pub mod constants;
pub mod countdown;
pub mod error;
pub mod geometry;
pub mod labels;
pub mod orbit;
pub mod scenery;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use countdown::*;
pub use error::*;
pub use labels::*;
pub use orbit::*;
pub use scenery::*;
