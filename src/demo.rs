use std::f32::consts::PI;
use std::sync::Arc;

use material::Material;
use math::hcm::{point3, Point3};
use radiometry::color::Color;
use shape::{MeshError, TriMesh};
use texture::{ImageMap, TextureError};
use thiserror::Error;

use crate::cli_options::DemoShading;

const CHECKER_SIZE: u32 = 8;

/// Builds a unit octahedron centered at the origin carrying the attributes that `shading` asks
/// for, validated and with generated vertex normals.
pub fn build_mesh(shading: DemoShading) -> Result<TriMesh, DemoError> {
    let corners = [
        point3(1.0, 0.0, 0.0),
        point3(-1.0, 0.0, 0.0),
        point3(0.0, 1.0, 0.0),
        point3(0.0, -1.0, 0.0),
        point3(0.0, 0.0, 1.0),
        point3(0.0, 0.0, -1.0),
    ];

    let material = match shading {
        DemoShading::Uv => Material::default().with_diffuse_map(Arc::new(checker()?)),
        _ => Material::diffuse(Color::rgb(230, 140, 40)),
    };
    let mut mesh = TriMesh::new(material);
    for p in corners.iter().copied() {
        mesh.add_vertex(p);
        match shading {
            DemoShading::Flat => {}
            DemoShading::Colors => mesh.add_color(Color::new(p.x.abs(), p.y.abs(), p.z.abs())),
            DemoShading::Uv => mesh.add_uv(spherical_uv(p)),
        }
    }

    // One face per octant, wound so that the normal points away from the center.
    for &x in [0, 1].iter() {
        for &y in [2, 3].iter() {
            for &z in [4, 5].iter() {
                let negatives = (x == 1) as u8 + (y == 3) as u8 + (z == 5) as u8;
                if negatives % 2 == 0 {
                    mesh.add_face(x, y, z)?;
                } else {
                    mesh.add_face(x, z, y)?;
                }
            }
        }
    }

    mesh.validate()?;
    mesh.generate_normals();
    Ok(mesh)
}

/// Latitude-longitude parametrization of a point on the unit sphere.
fn spherical_uv(p: Point3) -> (f32, f32) {
    let u = 0.5 + p.z.atan2(p.x) / (2.0 * PI);
    let v = 0.5 - p.y.clamp(-1.0, 1.0).asin() / PI;
    (u, v)
}

fn checker() -> Result<ImageMap, TextureError> {
    let (dark, light) = (Color::gray(0.15), Color::gray(0.9));
    let texels = (0..CHECKER_SIZE * CHECKER_SIZE)
        .map(|i| {
            let (row, col) = (i / CHECKER_SIZE, i % CHECKER_SIZE);
            if (row + col) % 2 == 0 {
                dark
            } else {
                light
            }
        })
        .collect();
    ImageMap::from_texels(CHECKER_SIZE, CHECKER_SIZE, texels)
}

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("demo mesh: {0}")]
    Mesh(#[from] MeshError),
    #[error("demo texture: {0}")]
    Texture(#[from] TextureError),
}
