use num::traits::Signed;
use serde::{Deserialize, Serialize};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::{
    common::{impl_approx_eq, FloatValueType, ValueType},
    normal::Normal,
    point::Point3,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

/// A two-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
}

/// A three-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec3<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
}

/// A four-dimensional vector. Homogeneous vectors carry `w == 0`, homogeneous
/// points `w == 1`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec4<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
    /// The w component of the vector.
    pub w: T,
}

macro_rules! impl_vec {
    ( $( $vec_type:ident
         [ $( $component:ident )+ ]
         $shorthand:ident
       ),+
    ) => {
        $(
            impl<T> $vec_type<T>
            where
                T: ValueType,
            {
                /// Constructs a new vector.
                ///
                /// Has a debug assert that checks for NaNs.
                #[inline]
                pub fn new($($component: T),*) -> Self {
                    let v = Self{ $($component),* };
                    debug_assert!(!v.has_nans());
                    v
                }

                /// Constructs a new vector of 0s.
                #[inline]
                pub fn zeros() -> Self {
                    Self {
                        $($component: T::zero(),)*
                    }
                }

                /// Constructs a new vector of 1s.
                #[inline]
                pub fn ones() -> Self {
                    Self {
                        $($component: T::one(),)*
                    }
                }

                /// Returns `true` if any component is NaN.
                #[inline]
                pub fn has_nans(&self) -> bool {
                    // Not all T have is_nan()
                    $(self.$component != self.$component)||*
                }

                /// Returns the vector's squared length.
                #[inline]
                pub fn len_sqr(&self) -> T {
                    debug_assert!(!self.has_nans());

                    self.dot(*self)
                }

                /// Returns the vector's length.
                #[inline]
                pub fn len(&self) -> T {
                    debug_assert!(!self.has_nans());

                    T::from_f64(self.len_sqr().to_f64().unwrap().sqrt()).unwrap()
                }

                /// Returns the normalized vector.
                #[inline]
                pub fn normalized(&self) -> Self {
                    debug_assert!(!self.has_nans());

                    *self / self.len()
                }

                /// Returns the component-wise minimum of the two vectors.
                #[inline]
                pub fn min(&self, other: Self) -> Self {
                    debug_assert!(!self.has_nans());
                    debug_assert!(!other.has_nans());

                    Self {
                        $($component: self.$component.mini(other.$component),)*
                    }
                }

                /// Returns the component-wise maximum of the two vectors.
                #[inline]
                pub fn max(&self, other: Self) -> Self {
                    debug_assert!(!self.has_nans());
                    debug_assert!(!other.has_nans());

                    Self {
                        $($component: self.$component.maxi(other.$component),)*
                    }
                }
            }

            /// Shorthand constructor
            #[inline]
            pub fn $shorthand<T>($($component: T),*) -> $vec_type<T>
            where
                T: ValueType
            {
                // Use new() to catch NaNs
                $vec_type::new($($component),*)
            }

            impl<T> From<T> for $vec_type<T>
            where
                T: ValueType,
            {
                fn from(v: T) -> Self {
                    Self {
                        $($component: v,)*
                    }
                }
            }

            impl<T> Neg for $vec_type<T>
            where
                T: Signed + ValueType,
            {
                type Output = Self;

                fn neg(self) -> Self {
                    debug_assert!(!self.has_nans());

                    Self {
                        $($component: -self.$component,)*
                    }
                }
            }

            impl<T> Add for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn add(self, other: Self) -> Self {
                    Self {
                        $($component: self.$component + other.$component,)*
                    }
                }
            }

            impl<T> Sub for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn sub(self, other: Self) -> Self {
                    Self {
                        $($component: self.$component - other.$component,)*
                    }
                }
            }

            impl<T> AddAssign for $vec_type<T>
            where
                T: ValueType,
            {
                fn add_assign(&mut self, other: Self) {
                    $(self.$component += other.$component;)*
                }
            }

            impl<T> SubAssign for $vec_type<T>
            where
                T: ValueType,
            {
                fn sub_assign(&mut self, other: Self) {
                    $(self.$component -= other.$component;)*
                }
            }

            impl<T> Mul<T> for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn mul(self, s: T) -> Self {
                    Self {
                        $($component: self.$component * s,)*
                    }
                }
            }

            impl<T> Div<T> for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn div(self, s: T) -> Self {
                    Self {
                        $($component: self.$component / s,)*
                    }
                }
            }

            impl<T> MulAssign<T> for $vec_type<T>
            where
                T: ValueType,
            {
                fn mul_assign(&mut self, s: T) {
                    $(self.$component *= s;)*
                }
            }

            impl<T> DivAssign<T> for $vec_type<T>
            where
                T: ValueType,
            {
                fn div_assign(&mut self, s: T) {
                    $(self.$component /= s;)*
                }
            }
        )*
    };
}
impl_vec!(
    Vec2 [x y] vec2,
    Vec3 [x y z] vec3,
    Vec4 [x y z w] vec4
);

macro_rules! impl_vec_dot {
    // Need to do this separately since we can't separate expansion with '+'
    ($( $vec_type:ident [ $component0:ident $( $component:ident )+ ] ),+ ) => {
        $(
            impl<T> $vec_type<T>
            where
                T: ValueType,
            {
                /// Returns the dot product of the two vectors.
                #[inline]
                pub fn dot(&self, other: Self) -> T {
                    debug_assert!(!self.has_nans());
                    debug_assert!(!other.has_nans());

                    self.$component0 * other.$component0 $(+ self.$component * other.$component)*
                }
            }
       )*
    };
}
impl_vec_dot!(
    Vec2 [x y],
    Vec3 [x y z],
    Vec4 [x y z w]
);

macro_rules! impl_vec_index {
    ($( $vec_type:ident [ $( $index:expr => $component:ident )+ ] ),+ ) => {
        $(
            impl<T> Index<usize> for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = T;

                fn index(&self, i: usize) -> &T {
                    match i {
                        $( $index => &self.$component, )*
                        _ => panic!("Index {} out of bounds", i),
                    }
                }
            }

            impl<T> IndexMut<usize> for $vec_type<T>
            where
                T: ValueType,
            {
                fn index_mut(&mut self, i: usize) -> &mut T {
                    match i {
                        $( $index => &mut self.$component, )*
                        _ => panic!("Index {} out of bounds", i),
                    }
                }
            }
        )*
    };
}
impl_vec_index!(
    Vec2 [0 => x 1 => y],
    Vec3 [0 => x 1 => y 2 => z],
    Vec4 [0 => x 1 => y 2 => z 3 => w]
);

impl_approx_eq!(
    Vec2 [x y],
    Vec3 [x y z],
    Vec4 [x y z w]
);

impl<T> From<Normal<T>> for Vec3<T>
where
    T: FloatValueType,
{
    fn from(n: Normal<T>) -> Self {
        Self::new(n.x, n.y, n.z)
    }
}

impl<T> From<Point3<T>> for Vec3<T>
where
    T: ValueType,
{
    fn from(p: Point3<T>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl<T> Vec3<T>
where
    T: FloatValueType,
{
    /// Calculates the dot product of this `Vec3` and a [Normal].
    #[inline]
    pub fn dot_n(&self, n: Normal<T>) -> T {
        self.x * n.x + self.y * n.y + self.z * n.z
    }

    /// Calculates the cross product of this `Vec3` and another `Vec3`.
    //
    // Always uses `f64` internally to avoid errors on "catastrophic cancellation".
    // http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html#DotandCrossProduct
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        debug_assert!(!self.has_nans());
        debug_assert!(!other.has_nans());

        let v1x = self.x.to_f64().unwrap_or(f64::NAN);
        let v1y = self.y.to_f64().unwrap_or(f64::NAN);
        let v1z = self.z.to_f64().unwrap_or(f64::NAN);
        let v2x = other.x.to_f64().unwrap_or(f64::NAN);
        let v2y = other.y.to_f64().unwrap_or(f64::NAN);
        let v2z = other.z.to_f64().unwrap_or(f64::NAN);
        Self {
            x: T::from((v1y * v2z) - (v1z * v2y)).unwrap(),
            y: T::from((v1z * v2x) - (v1x * v2z)).unwrap(),
            z: T::from((v1x * v2y) - (v1y * v2x)).unwrap(),
        }
    }
}
