/// Default tolerance shared by the parallel-plane test, the near-origin test, the
/// degenerate-area test and the barycentric containment test.
///
/// All geometry is computed in `f32`, so this sits a couple of orders of magnitude above the
/// round-off of a unit-sized triangle.
pub const RAY_EPSILON: f32 = 1e-5;

/// Per-render tracing switches. Passed by reference into intersection queries; there is no
/// process-wide tracing state.
#[derive(Debug, Clone, Copy)]
pub struct TraceOptions {
    pub ray_epsilon: f32,
    /// Interpolates per-vertex normals across faces instead of using the flat face normal.
    /// Only takes effect on meshes that carry per-vertex normals.
    pub smooth_shading: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            ray_epsilon: RAY_EPSILON,
            smooth_shading: false,
        }
    }
}

impl TraceOptions {
    pub fn with_epsilon(self, ray_epsilon: f32) -> Self {
        assert!(ray_epsilon > 0.0 && ray_epsilon.is_finite());
        Self {
            ray_epsilon,
            ..self
        }
    }
    pub fn with_smooth_shading(self, smooth_shading: bool) -> Self {
        Self {
            smooth_shading,
            ..self
        }
    }
}
