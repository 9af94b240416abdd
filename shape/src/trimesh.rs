use std::fmt;

use geometry::options::TraceOptions;
use geometry::ray::Ray;
use material::Material;
use math::hcm::{Point3, Vec3};
use radiometry::color::Color;
use thiserror::Error;

use crate::face::{Face, FaceRef};
use crate::{Interaction, Shape};

/// Distance reported for a miss by callers that need a number rather than an `Option`.
/// Never used to detect a miss inside this crate.
pub const NO_HIT_T: f32 = 1000.0;

#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    #[error("face ({a}, {b}, {c}) references a vertex beyond the {num_vertices} vertices loaded")]
    FaceIndexOutOfRange {
        a: usize,
        b: usize,
        c: usize,
        num_vertices: usize,
    },
    #[error("Bad Trimesh: Wrong number of vertex colors ({found} for {expected} vertices)")]
    WrongColorCount { expected: usize, found: usize },
    #[error("Bad Trimesh: Wrong number of UV coordinates ({found} for {expected} vertices)")]
    WrongUvCount { expected: usize, found: usize },
    #[error("Bad Trimesh: Wrong number of normals ({found} for {expected} vertices)")]
    WrongNormalCount { expected: usize, found: usize },
}

/// An indexed triangle mesh. Vertex positions are shared by the faces; normals, colors and
/// texture coordinates are optional per-vertex buffers parallel to the positions.
///
/// Loading order: vertices and their attributes (in matching order), then faces, then
/// `validate()` once. After that the mesh is only read.
#[derive(Default)]
pub struct TriMesh {
    vertices: Vec<Point3>,
    normals: Vec<Vec3>,
    vert_colors: Vec<Color>,
    uv_coords: Vec<(f32, f32)>,
    faces: Vec<Face>,
    material: Material,
    has_vertex_normals: bool,
}

impl TriMesh {
    pub fn new(material: Material) -> Self {
        Self {
            material,
            ..Self::default()
        }
    }

    pub fn add_vertex(&mut self, v: Point3) {
        self.vertices.push(v);
    }
    pub fn add_normal(&mut self, n: Vec3) {
        self.normals.push(n);
    }
    pub fn add_color(&mut self, c: Color) {
        self.vert_colors.push(c);
    }
    pub fn add_uv(&mut self, uv: (f32, f32)) {
        self.uv_coords.push(uv);
    }

    /// Adds the triangle (a, b, c). Fails if any index is not a loaded vertex.
    ///
    /// A triangle that repeats an index is dropped without error.
    pub fn add_face(&mut self, a: usize, b: usize, c: usize) -> Result<(), MeshError> {
        let num_vertices = self.vertices.len();
        if a >= num_vertices || b >= num_vertices || c >= num_vertices {
            return Err(MeshError::FaceIndexOutOfRange {
                a,
                b,
                c,
                num_vertices,
            });
        }
        let face = Face::new(a, b, c);
        if face.is_degenerate() {
            log::debug!("Dropping degenerate face ({}, {}, {})", a, b, c);
        } else {
            self.faces.push(face);
        }
        Ok(())
    }

    /// Checks that each per-vertex buffer is either empty or has one entry per vertex.
    /// Reports the first mismatch, checking colors, then texture coordinates, then normals.
    pub fn validate(&self) -> Result<(), MeshError> {
        let expected = self.vertices.len();
        let mismatch = |found: usize| found != 0 && found != expected;
        if mismatch(self.vert_colors.len()) {
            return Err(MeshError::WrongColorCount {
                expected,
                found: self.vert_colors.len(),
            });
        }
        if mismatch(self.uv_coords.len()) {
            return Err(MeshError::WrongUvCount {
                expected,
                found: self.uv_coords.len(),
            });
        }
        if mismatch(self.normals.len()) {
            return Err(MeshError::WrongNormalCount {
                expected,
                found: self.normals.len(),
            });
        }
        Ok(())
    }

    /// Replaces the per-vertex normals with the average of the face normals around each vertex.
    ///
    /// Face normals aren't normalized before averaging, so larger faces weigh more. Vertices not
    /// used by any face get a zero normal.
    pub fn generate_normals(&mut self) {
        let num_vertices = self.vertices.len();
        let mut normals = vec![Vec3::ZERO; num_vertices];
        let mut num_faces = vec![0u32; num_vertices];

        for face in self.faces() {
            let face_normal = face.normal();
            for &i in face.ids().iter() {
                normals[i] += face_normal;
                num_faces[i] += 1;
            }
        }
        for (normal, count) in normals.iter_mut().zip(num_faces) {
            if count > 0 {
                *normal = *normal / count as f32;
            }
        }

        if !self.normals.is_empty() {
            log::warn!("Overwriting {} existing vertex normals", self.normals.len());
        }
        self.normals = normals;
        self.has_vertex_normals = true;
        log::info!("Generated vertex normals for {}", self.summary());
    }

    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }
    pub fn vert_colors(&self) -> &[Color] {
        &self.vert_colors
    }
    pub fn uv_coords(&self) -> &[(f32, f32)] {
        &self.uv_coords
    }
    pub fn material(&self) -> &Material {
        &self.material
    }
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }
    /// True once `generate_normals()` has run.
    pub fn has_vertex_normals(&self) -> bool {
        self.has_vertex_normals
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }
    pub fn face(&self, i: usize) -> Option<FaceRef<'_>> {
        self.faces.get(i).map(|f| FaceRef::new(self, f))
    }
    pub fn faces(&self) -> impl Iterator<Item = FaceRef<'_>> + '_ {
        self.faces.iter().map(move |f| FaceRef::new(self, f))
    }
}

impl Shape for TriMesh {
    fn summary(&self) -> String {
        format!(
            "TriMesh{{{} faces, {} vertices, {} normals, {} colors, {} uvs}}",
            self.faces.len(),
            self.vertices.len(),
            self.normals.len(),
            self.vert_colors.len(),
            self.uv_coords.len()
        )
    }

    /// Tests every face; the nearest hit wins, and of equally near hits the first face wins.
    fn intersect(&self, r: &Ray, opts: &TraceOptions) -> Option<Interaction<'_>> {
        let mut ray = *r;
        let mut nearest = None;
        for face in self.faces() {
            if let Some(hit) = face.hit(&ray, opts) {
                // Only strictly nearer hits can pass from now on.
                ray.t_max = hit.t;
                nearest = Some((face, hit));
            }
        }
        nearest.map(|(face, hit)| face.shade(hit, opts))
    }

    fn occludes(&self, r: &Ray, opts: &TraceOptions) -> bool {
        self.faces().any(|face| face.hit(r, opts).is_some())
    }
}

impl fmt::Display for TriMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
