pub mod camera;
/// Defines `TraceOptions`, the explicit configuration passed to every intersection query.
pub mod options;
pub mod ray;

pub use options::TraceOptions;
pub use ray::Ray;
