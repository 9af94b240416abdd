use std::fs::File;
use std::path::Path;

use radiometry::color::Color;

use crate::{TextureError, TextureMap};

/// A texture map backed by a row-major grid of texels. Row 0 is the top of the image, i.e.,
/// `v = 0`.
pub struct ImageMap {
    data: Vec<Color>,
    width: u32,
    height: u32,
}

impl ImageMap {
    pub fn from_texels(width: u32, height: u32, data: Vec<Color>) -> Result<ImageMap, TextureError> {
        let expected = width as usize * height as usize;
        if expected == 0 || data.len() != expected {
            return Err(TextureError::SizeMismatch {
                width,
                height,
                expected,
                found: data.len(),
            });
        }
        Ok(ImageMap {
            data,
            width,
            height,
        })
    }

    /// Decodes an 8-bit grayscale, RGB or RGBA png file. Alpha is dropped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ImageMap, TextureError> {
        let decoder = png::Decoder::new(File::open(path.as_ref())?);
        let (info, mut reader) = decoder.read_info()?;
        // Allocate the output buffer.
        let mut buf = vec![0; info.buffer_size()];
        // Read the next frame. An APNG might contain multiple frames.
        reader.next_frame(&mut buf)?;

        if info.bit_depth != png::BitDepth::Eight {
            return Err(TextureError::Unsupported(format!(
                "{:?} bit depth",
                info.bit_depth
            )));
        }

        let num_channels = match info.color_type {
            png::ColorType::Grayscale => 1,
            png::ColorType::RGB => 3,
            png::ColorType::RGBA => 4,
            other => return Err(TextureError::Unsupported(format!("{:?}", other))),
        };

        let color_data: Vec<Color> = match num_channels {
            1 => buf
                .iter()
                .map(|gray_u8| Color::gray(*gray_u8 as f32 / 255.0))
                .collect(),
            _ => buf
                .chunks_exact(num_channels)
                .map(|rgba| Color::rgb(rgba[0], rgba[1], rgba[2]))
                .collect(),
        };
        log::debug!(
            "decoded {} ({}x{}, {} channels)",
            path.as_ref().display(),
            info.width,
            info.height,
            num_channels
        );
        Self::from_texels(info.width, info.height, color_data)
    }
}

impl TextureMap for ImageMap {
    /// Nearest-texel lookup; `uv` is clamped to [0, 1].
    fn sample(&self, uv: (f32, f32)) -> Color {
        let (u, v) = uv;
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let col = ((u * self.width as f32) as usize).min(self.width as usize - 1);
        let row = ((v * self.height as f32) as usize).min(self.height as usize - 1);

        self.data[row * self.width as usize + col]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn quadrants() -> ImageMap {
        // red | green
        // ----+------
        // blue| white
        let texels = vec![
            Color::rgb(255, 0, 0),
            Color::rgb(0, 255, 0),
            Color::rgb(0, 0, 255),
            Color::white(),
        ];
        ImageMap::from_texels(2, 2, texels).unwrap()
    }

    #[test]
    fn nearest_texel_lookup() {
        let image = quadrants();
        assert_eq!(image.sample((0.25, 0.25)), Color::rgb(255, 0, 0));
        assert_eq!(image.sample((0.75, 0.25)), Color::rgb(0, 255, 0));
        assert_eq!(image.sample((0.25, 0.75)), Color::rgb(0, 0, 255));
        assert_eq!(image.sample((1.0, 1.0)), Color::white());
    }

    #[test]
    fn out_of_range_uv_is_clamped() {
        let image = quadrants();
        assert_eq!(image.sample((-3.0, -0.1)), Color::rgb(255, 0, 0));
        assert_eq!(image.sample((7.0, 2.0)), Color::white());
    }

    #[test]
    fn texel_count_must_match() {
        let err = ImageMap::from_texels(2, 3, vec![Color::black(); 5]);
        assert!(matches!(
            err,
            Err(TextureError::SizeMismatch {
                expected: 6,
                found: 5,
                ..
            })
        ));
        assert!(ImageMap::from_texels(0, 0, vec![]).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ImageMap::from_file("/nonexistent/skybox/px.png");
        assert!(matches!(err, Err(TextureError::Io(_))));
    }
}
