mod macros;

pub mod camera;
pub mod film;
pub mod light;
pub mod material;
pub mod math;
pub mod mesh;
pub mod primitive;
pub mod renderer;
pub mod result;
pub mod scene;

/// Shared cutoff for per-ray numerics: hit distances below this are treated
/// as self-intersections and denominators below it as parallel.
pub const EPSILON: f64 = 1e-7;
