use super::{common::FloatValueType, point::Point3, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Rays.html

/// An origin and a direction, expressed in the coordinate space of whichever
/// node is currently processing it.
#[derive(Copy, PartialEq, Clone, Debug)]
pub struct Ray<T>
where
    T: FloatValueType,
{
    pub o: Point3<T>,
    pub d: Vec3<T>,
}

impl<T> Ray<T>
where
    T: FloatValueType,
{
    /// Creates a new `Ray`.
    pub fn new(o: Point3<T>, d: Vec3<T>) -> Self {
        let ret = Self { o, d };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Checks if any of the members in this `Ray` contain NaNs.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans()
    }

    /// Finds the [Point3] on this `Ray` at distance `t`.
    pub fn point(&self, t: T) -> Point3<T> {
        self.o + self.d * t
    }
}
