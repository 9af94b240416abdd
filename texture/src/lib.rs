pub mod cubemap;
mod image;

pub use cubemap::{CubeFace, CubeMap, CubeMapError};
pub use image::ImageMap;

use radiometry::color::Color;
use thiserror::Error;

/// A color-valued map over the parametrization space [0, 1] x [0, 1].
///
/// Samplers are shared read-only across render threads once a scene is loaded.
pub trait TextureMap: Send + Sync {
    fn sample(&self, uv: (f32, f32)) -> Color;
}

/// A texture map that has the same color everywhere.
#[derive(Debug, Clone, Copy)]
pub struct Solid {
    value: Color,
}

impl Solid {
    pub fn new(value: Color) -> Solid {
        Solid { value }
    }
}

impl TextureMap for Solid {
    fn sample(&self, _: (f32, f32)) -> Color {
        self.value
    }
}

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("can't open texture file: {0}")]
    Io(#[from] std::io::Error),
    #[error("can't decode png: {0}")]
    Decode(#[from] png::DecodingError),
    #[error("unsupported image format: {0}")]
    Unsupported(String),
    #[error("image of {width}x{height} needs {expected} texels, got {found}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        found: usize,
    },
}
