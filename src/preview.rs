use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use geometry::camera::Camera;
use geometry::options::TraceOptions;
use geometry::ray::Ray;
use indicatif::ProgressBar;
use radiometry::color::Color;
use rayon::prelude::*;
use shape::Shape;
use texture::{CubeMap, CubeMapError};

const BACKGROUND: Color = Color::new(0.133, 0.133, 0.133);

/// Color seen along a primary ray: the diffuse term of the surface hit, or the environment.
fn trace(
    r: &Ray, shape: &dyn Shape, environment: Option<&CubeMap>, opts: &TraceOptions,
) -> Result<Color, CubeMapError> {
    match shape.intersect(r, opts) {
        Some(hit) => Ok(hit.material.diffuse_at(hit.uv)),
        None => environment.map_or(Ok(BACKGROUND), |env| env.sample(r)),
    }
}

fn render_row(
    camera: &Camera, row: u32, shape: &dyn Shape, environment: Option<&CubeMap>,
    opts: &TraceOptions,
) -> Result<Vec<Color>, CubeMapError> {
    let (width, _) = camera.resolution();
    (0..width)
        .filter_map(|col| camera.shoot_ray(row, col))
        .map(|r| trace(&r, shape, environment, opts))
        .collect()
}

/// Casts one ray per pixel and returns the row-major pixel colors.
pub fn render(
    camera: &Camera, shape: &dyn Shape, environment: Option<&CubeMap>, opts: &TraceOptions,
    use_multi_thread: bool,
) -> Result<Vec<Color>, CubeMapError> {
    let (width, height) = camera.resolution();
    log::info!(
        "Rendering {}x{} ({}) of {}",
        width,
        height,
        if use_multi_thread {
            "multi-threaded"
        } else {
            "single-threaded"
        },
        shape.summary()
    );
    let bar = ProgressBar::new(height as u64);
    let rows: Vec<Vec<Color>> = if use_multi_thread {
        (0..height)
            .into_par_iter()
            .map(|row| {
                let colors = render_row(camera, row, shape, environment, opts);
                bar.inc(1);
                colors
            })
            .collect::<Result<_, _>>()?
    } else {
        (0..height)
            .map(|row| {
                let colors = render_row(camera, row, shape, environment, opts);
                bar.inc(1);
                colors
            })
            .collect::<Result<_, _>>()?
    };
    bar.finish();
    Ok(rows.into_iter().flatten().collect())
}

pub fn write_png<P: AsRef<Path>>(
    path: P, resolution: (u32, u32), pixels: &[Color],
) -> Result<(), png::EncodingError> {
    let (width, height) = resolution;
    let file = File::create(path)?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::RGB);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;

    let data = pixels.iter().flat_map(|c| c.to_u8()).collect::<Vec<u8>>();
    writer.write_image_data(&data)
}
