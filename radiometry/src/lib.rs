/// RGB color triples: vertex colors, material terms and texture samples.
pub mod color;

pub use color::Color;
