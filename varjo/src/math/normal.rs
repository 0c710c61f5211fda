use std::ops::{Mul, MulAssign, Neg};

use super::{
    common::{impl_approx_eq, FloatValueType, ValueType},
    vector::Vec3,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Normals.html

/// A surface normal. Distinct from [Vec3] because normals transform by the
/// inverse transpose, not the matrix itself.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Normal<T>
where
    T: ValueType,
{
    /// The x component of the normal.
    pub x: T,
    /// The y component of the normal.
    pub y: T,
    /// The z component of the normal.
    pub z: T,
}

impl<T> Normal<T>
where
    T: FloatValueType,
{
    /// Constructs a new normal.
    ///
    /// Has a debug assert that checks for NaNs.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let n = Self { x, y, z };
        debug_assert!(!n.has_nans());
        n
    }

    /// Returns `true` if any component is NaN.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns the normal's squared length.
    #[inline]
    pub fn len_sqr(&self) -> T {
        debug_assert!(!self.has_nans());

        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the normal's length.
    #[inline]
    pub fn len(&self) -> T {
        debug_assert!(!self.has_nans());

        self.len_sqr().sqrt()
    }

    /// Returns the normalized normal.
    #[inline]
    pub fn normalized(&self) -> Self {
        debug_assert!(!self.has_nans());

        let inv_len = T::one() / self.len();
        Self {
            x: self.x * inv_len,
            y: self.y * inv_len,
            z: self.z * inv_len,
        }
    }

    /// Calculates the dot product of this `Normal` and a [Vec3].
    #[inline]
    pub fn dot_v(&self, v: Vec3<T>) -> T {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Calculates the dot product of this `Normal` and another `Normal`.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl<T> From<Vec3<T>> for Normal<T>
where
    T: FloatValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T> Neg for Normal<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T> Mul<T> for Normal<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl<T> MulAssign<T> for Normal<T>
where
    T: FloatValueType,
{
    fn mul_assign(&mut self, s: T) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }
}

impl_approx_eq!(Normal [x y z]);
