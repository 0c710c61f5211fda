mod common;
mod matrix;
mod normal;
mod point;
mod ray;
mod spectrum;
mod transform;
pub mod transforms;
mod vector;

pub use common::{FloatValueType, ValueType};
pub use matrix::Matrix4x4;
pub use normal::Normal;
pub use point::{point2, point3, Point2, Point3};
pub use ray::Ray;
pub use spectrum::Spectrum;
pub use transform::Transform;
pub use vector::{vec2, vec3, vec4, Vec2, Vec3, Vec4};
