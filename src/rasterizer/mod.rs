//! Orthographic software rasterizer
//!
//! Features:
//! - Heading/pitch camera rotation, no perspective divide
//! - Barycentric triangle fill with a larger-wins z-buffer
//! - Ambient, diffuse and specular face lighting with double gamma encoding
//! - Fixed 2x supersampling with a box-filter resolve

mod math;
mod types;
mod camera;
mod lighting;
mod view;
mod render;

pub use math::*;
pub use types::*;
pub use camera::*;
pub use lighting::*;
pub use view::*;
pub use render::*;

/// Working canvas scale relative to the output resolution
pub const SUPERSAMPLING_FACTOR: usize = 2;
