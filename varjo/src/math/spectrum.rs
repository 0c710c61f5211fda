use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub};

use super::common::{impl_approx_eq, FloatValueType, ValueType};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Color_and_Radiometry/Spectral_Representation

/// A spectral power distribution stored as RGB.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spectrum<T>
where
    T: ValueType,
{
    /// The r component of the spd
    pub r: T,
    /// The g component of the spd
    pub g: T,
    /// The b component of the spd
    pub b: T,
}

impl<T> Spectrum<T>
where
    T: ValueType,
{
    /// Constructs a new `Spectrum`.
    #[inline]
    pub fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b }
    }

    /// Constructs a new black `Spectrum`.
    #[inline]
    pub fn zeros() -> Self {
        Self {
            r: T::zero(),
            g: T::zero(),
            b: T::zero(),
        }
    }

    /// Constructs a new white `Spectrum`.
    #[inline]
    pub fn ones() -> Self {
        Self {
            r: T::one(),
            g: T::one(),
            b: T::one(),
        }
    }

    /// Checks if this `Spectrum` is black.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.r == T::zero() && self.g == T::zero() && self.b == T::zero()
    }
}

impl<T> Spectrum<T>
where
    T: FloatValueType,
{
    /// Linearly interpolates toward `other` by `t` in `[0, 1]`.
    #[inline]
    pub fn lerp(&self, other: Self, t: T) -> Self {
        *self * (T::one() - t) + other * t
    }
}

impl<T> Add for Spectrum<T>
where
    T: ValueType,
{
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }
}

impl<T> Sub for Spectrum<T>
where
    T: ValueType,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            r: self.r - other.r,
            g: self.g - other.g,
            b: self.b - other.b,
        }
    }
}

impl<T> AddAssign for Spectrum<T>
where
    T: ValueType,
{
    fn add_assign(&mut self, other: Self) {
        self.r += other.r;
        self.g += other.g;
        self.b += other.b;
    }
}

// Component-wise product, e.g. material reflectance times incoming light
impl<T> Mul for Spectrum<T>
where
    T: ValueType,
{
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
        }
    }
}

impl<T> Mul<T> for Spectrum<T>
where
    T: ValueType,
{
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self {
            r: self.r * s,
            g: self.g * s,
            b: self.b * s,
        }
    }
}

impl<T> MulAssign<T> for Spectrum<T>
where
    T: ValueType,
{
    fn mul_assign(&mut self, s: T) {
        self.r *= s;
        self.g *= s;
        self.b *= s;
    }
}

impl<T> Div<T> for Spectrum<T>
where
    T: ValueType,
{
    type Output = Self;

    fn div(self, s: T) -> Self {
        Self {
            r: self.r / s,
            g: self.g / s,
            b: self.b / s,
        }
    }
}

impl<T> DivAssign<T> for Spectrum<T>
where
    T: ValueType,
{
    fn div_assign(&mut self, s: T) {
        self.r /= s;
        self.g /= s;
        self.b /= s;
    }
}

impl_approx_eq!(Spectrum [r g b]);
