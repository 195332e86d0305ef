//! GPU side of the Bloch sphere scene.
//!
//! [`Renderer`] is generic over the surface lifetime so the web front-end can
//! hand it a canvas surface and the native preview a winit window surface.

mod render;

pub use render::scene::FrameScene;
pub use render::Renderer;
