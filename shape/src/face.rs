use std::borrow::Cow;
use std::ops::Index;

use geometry::options::TraceOptions;
use geometry::ray::Ray;
use math::float::{barycentric_lerp, barycentric_lerp_pair};
use math::hcm::{Point3, Vec3};

use crate::{Interaction, TriMesh};

/// A triangle of a `TriMesh`, stored as three indices into the mesh vertex buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    ids: [usize; 3],
    degen: bool,
}

impl Face {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Face {
            ids: [a, b, c],
            degen: a == b || b == c || a == c,
        }
    }
    pub fn ids(&self) -> [usize; 3] {
        self.ids
    }
    /// True if two corners share a vertex index. Such faces never make it into a mesh.
    pub fn is_degenerate(&self) -> bool {
        self.degen
    }
}

impl Index<usize> for Face {
    type Output = usize;
    fn index(&self, corner: usize) -> &usize {
        &self.ids[corner]
    }
}

/// Geometric part of a ray-triangle hit, before any attribute lookup.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TriangleHit {
    pub t: f32,
    pub pos: Point3,
    /// Unnormalized, (b - a) x (c - a).
    pub normal: Vec3,
    pub bc: (f32, f32, f32),
}

/// A face viewed together with the mesh it belongs to. Borrowing the mesh is what gives the face
/// access to the shared vertex buffers; the view can't outlive the mesh.
#[derive(Clone, Copy)]
pub struct FaceRef<'a> {
    mesh: &'a TriMesh,
    face: &'a Face,
}

impl<'a> FaceRef<'a> {
    pub(crate) fn new(mesh: &'a TriMesh, face: &'a Face) -> Self {
        FaceRef { mesh, face }
    }

    pub fn ids(&self) -> [usize; 3] {
        self.face.ids
    }

    pub fn positions(&self) -> (Point3, Point3, Point3) {
        let [i, j, k] = self.face.ids;
        let p = self.mesh.vertices();
        (p[i], p[j], p[k])
    }

    /// Face normal with length twice the triangle area; zero for collinear corners.
    pub fn normal(&self) -> Vec3 {
        let (a, b, c) = self.positions();
        (b - a).cross(c - a)
    }

    /// Intersects `r` with this triangle and resolves the surface attributes at the hit point.
    pub fn intersect(&self, r: &Ray, opts: &TraceOptions) -> Option<Interaction<'a>> {
        self.hit(r, opts).map(|hit| self.shade(hit, opts))
    }

    pub(crate) fn hit(&self, r: &Ray, opts: &TraceOptions) -> Option<TriangleHit> {
        let eps = opts.ray_epsilon;
        let (a, b, c) = self.positions();
        let normal = (b - a).cross(c - a);

        // A ray parallel to the plane never meets it (and N.D is about to be a divisor).
        let normal_dir = normal.dot(r.dir);
        if normal_dir.abs() < eps {
            return None;
        }

        // Let q be the point on the plane, then (q - a) dot N = 0.
        // With q = o + t * d: t = (a - o) dot N / (d dot N).
        let t = normal.dot(a - r.origin) / normal_dir;
        if t < eps || t >= r.t_max {
            return None;
        }
        let q = r.position_at(t);

        let area = 0.5 * normal.norm();
        if area < eps {
            return None;
        }

        // Each weight is the area of the sub-triangle facing its corner.
        let alpha = 0.5 * (c - b).cross(q - b).norm() / area;
        let beta = 0.5 * (a - c).cross(q - c).norm() / area;
        let gamma = 0.5 * (b - a).cross(q - a).norm() / area;

        // Sub-areas are unsigned, so a point outside the triangle shows up as an excess sum.
        if alpha < -eps || beta < -eps || gamma < -eps {
            return None;
        }
        if (alpha + beta + gamma - 1.0).abs() > eps {
            return None;
        }

        Some(TriangleHit {
            t,
            pos: q,
            normal,
            bc: (alpha, beta, gamma),
        })
    }

    /// Resolves shading attributes of a hit, in order of priority:
    /// 1. texture coordinates, with the mesh material as is;
    /// 2. vertex colors, applied as the diffuse term of a copy of the mesh material;
    /// 3. the mesh material.
    pub(crate) fn shade(&self, hit: TriangleHit, opts: &TraceOptions) -> Interaction<'a> {
        let mesh = self.mesh;
        let flat_normal = hit.normal.hat();
        let normal = if opts.smooth_shading {
            corners(mesh.normals(), self.face.ids)
                .and_then(|ns| barycentric_lerp(ns, hit.bc).try_hat())
                .unwrap_or(flat_normal)
        } else {
            flat_normal
        };

        let (uv, material) = if let Some(uvs) = corners(mesh.uv_coords(), self.face.ids) {
            (
                Some(barycentric_lerp_pair(uvs, hit.bc)),
                Cow::Borrowed(mesh.material()),
            )
        } else if let Some(colors) = corners(mesh.vert_colors(), self.face.ids) {
            let mut material = mesh.material().clone();
            material.set_diffuse(barycentric_lerp(colors, hit.bc));
            (None, Cow::Owned(material))
        } else {
            (None, Cow::Borrowed(mesh.material()))
        };

        Interaction {
            pos: hit.pos,
            ray_t: hit.t,
            normal,
            barycentric: hit.bc,
            uv,
            material,
            object: mesh,
        }
    }
}

/// Fetches the per-vertex attribute of the three corners. Returns `None` if the mesh doesn't
/// carry the attribute (or carries too few of them, on a mesh that failed validation).
fn corners<T: Copy>(buffer: &[T], ids: [usize; 3]) -> Option<(T, T, T)> {
    let [i, j, k] = ids;
    Some((*buffer.get(i)?, *buffer.get(j)?, *buffer.get(k)?))
}
