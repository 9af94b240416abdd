use crate::Shape;
use material::Material;
use math::hcm::{Point3, Vec3};
use std::borrow::Cow;
use std::fmt::{Display, Formatter, Result};

/// Contains geometric and shading information on a ray-surface intersection:
///  - `pos`: position of intersection
///  - `ray_t`: t-value of the ray at the intersection.
///  - `normal`: unit normal vector of the surface.
///  - `barycentric`: weights of the three face corners at `pos`, in face-vertex order.
///  - `uv`: texture coordinate, present only if the surface carries one.
///  - `material`: the surface material, borrowed from the shape, or owned if it had to be
///    synthesized for this intersection (e.g., from vertex colors).
///  - `object`: the shape that was hit.
#[derive(Clone)]
pub struct Interaction<'a> {
    pub pos: Point3,
    pub ray_t: f32,
    pub normal: Vec3,
    pub barycentric: (f32, f32, f32),
    pub uv: Option<(f32, f32)>,
    pub material: Cow<'a, Material>,
    pub object: &'a dyn Shape,
}

impl<'a> Interaction<'a> {
    /// True if the material was built for this intersection instead of borrowed from the shape.
    pub fn has_synthesized_material(&self) -> bool {
        matches!(self.material, Cow::Owned(_))
    }
}

impl Display for Interaction<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let (b0, b1, b2) = self.barycentric;
        write!(
            f,
            "pos = {}, t = {:.2}, normal = {}, bc = ({:.2}, {:.2}, {:.2})",
            self.pos, self.ray_t, self.normal, b0, b1, b2
        )?;
        if let Some((u, v)) = self.uv {
            write!(f, ", uv = ({:.2}, {:.2})", u, v)?;
        }
        write!(f, ", object = {}", self.object.summary())
    }
}
