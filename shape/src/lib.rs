mod face;
mod interaction;
mod trimesh;

use geometry::options::TraceOptions;
use geometry::ray::Ray;

pub use face::{Face, FaceRef};
pub use interaction::Interaction;
pub use trimesh::{MeshError, TriMesh, NO_HIT_T};

/// Represents the characteristics of a shape: can interact with a ray.
/// - See `trimesh.rs` for the indexed triangle mesh `TriMesh`.
pub trait Shape: Send + Sync {
    fn summary(&self) -> String;
    /// Finds the nearest intersection in front of the ray origin and within the ray extent.
    fn intersect(&self, r: &Ray, opts: &TraceOptions) -> Option<Interaction<'_>>;
    /// Returns true if anything blocks the ray within its extent.
    fn occludes(&self, r: &Ray, opts: &TraceOptions) -> bool;
}
