use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use super::{
    common::{impl_approx_eq, ValueType},
    vector::{Vec2, Vec3},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

// Note about Point ops:
// Some don't really make mathematical sense but are useful in weighted sums
// point + point = point
// point * scalar = point

/// A two-dimensional point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point2<T>
where
    T: ValueType,
{
    /// The x component of the point.
    pub x: T,
    /// The y component of the point.
    pub y: T,
}

/// A three-dimensional point.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point3<T>
where
    T: ValueType,
{
    /// The x component of the point.
    pub x: T,
    /// The y component of the point.
    pub y: T,
    /// The z component of the point.
    pub z: T,
}

macro_rules! impl_point {
    ( $( $point_type:ident
         [ $( $component:ident )+ ]
         $vec_type:ident
         $shorthand:ident
       ),+
    ) => {
        $(
            impl<T> $point_type<T>
            where
                T: ValueType,
            {
                /// Constructs a new point.
                ///
                /// Has a debug assert that checks for NaNs.
                #[inline]
                pub fn new($($component: T),*) -> Self {
                    let p = Self{ $($component),* };
                    debug_assert!(!p.has_nans());
                    p
                }

                /// Constructs a new point at the origin.
                #[inline]
                pub fn zeros() -> Self {
                    Self {
                        $($component: T::zero(),)*
                    }
                }

                /// Returns `true` if any component is NaN.
                #[inline]
                pub fn has_nans(&self) -> bool {
                    // Not all T have is_nan()
                    $(self.$component != self.$component)||*
                }

                /// Returns the squared distance to the other point.
                #[inline]
                pub fn dist_sqr(&self, other: Self) -> T {
                    debug_assert!(!self.has_nans());
                    debug_assert!(!other.has_nans());

                    (*self - other).len_sqr()
                }

                /// Returns the distance to the other point.
                #[inline]
                pub fn dist(&self, other: Self) -> T {
                    debug_assert!(!self.has_nans());
                    debug_assert!(!other.has_nans());

                    (*self - other).len()
                }

                /// Returns the component-wise minimum of the two points.
                #[inline]
                pub fn min(&self, other: Self) -> Self {
                    Self {
                        $($component: self.$component.mini(other.$component),)*
                    }
                }

                /// Returns the component-wise maximum of the two points.
                #[inline]
                pub fn max(&self, other: Self) -> Self {
                    Self {
                        $($component: self.$component.maxi(other.$component),)*
                    }
                }
            }

            /// Shorthand constructor
            #[inline]
            pub fn $shorthand<T>($($component: T),*) -> $point_type<T>
            where
                T: ValueType
            {
                // Use new() to catch NaNs
                $point_type::new($($component),*)
            }

            impl<T> From<T> for $point_type<T>
            where
                T: ValueType,
            {
                fn from(v: T) -> Self {
                    Self {
                        $($component: v,)*
                    }
                }
            }

            impl<T> Add<$vec_type<T>> for $point_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn add(self, other: $vec_type<T>) -> Self {
                    Self {
                        $($component: self.$component + other.$component,)*
                    }
                }
            }

            impl<T> Add for $point_type<T>
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

            impl<T> Sub for $point_type<T>
            where
                T: ValueType,
            {
                type Output = $vec_type<T>;

                fn sub(self, other: Self) -> $vec_type<T> {
                    $vec_type {
                        $($component: self.$component - other.$component,)*
                    }
                }
            }

            impl<T> Sub<$vec_type<T>> for $point_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn sub(self, other: $vec_type<T>) -> Self {
                    Self {
                        $($component: self.$component - other.$component,)*
                    }
                }
            }

            impl<T> AddAssign<$vec_type<T>> for $point_type<T>
            where
                T: ValueType,
            {
                fn add_assign(&mut self, other: $vec_type<T>) {
                    $(self.$component += other.$component;)*
                }
            }

            impl<T> SubAssign<$vec_type<T>> for $point_type<T>
            where
                T: ValueType,
            {
                fn sub_assign(&mut self, other: $vec_type<T>) {
                    $(self.$component -= other.$component;)*
                }
            }

            impl<T> Mul<T> for $point_type<T>
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

            impl<T> Div<T> for $point_type<T>
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

            impl<T> MulAssign<T> for $point_type<T>
            where
                T: ValueType,
            {
                fn mul_assign(&mut self, s: T) {
                    $(self.$component *= s;)*
                }
            }

            impl<T> DivAssign<T> for $point_type<T>
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
impl_point!(
    Point2 [x y] Vec2 point2,
    Point3 [x y z] Vec3 point3
);

macro_rules! impl_point_index {
    ($( $point_type:ident [ $( $index:expr => $component:ident )+ ] ),+ ) => {
        $(
            impl<T> Index<usize> for $point_type<T>
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

            impl<T> IndexMut<usize> for $point_type<T>
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
impl_point_index!(
    Point2 [0 => x 1 => y],
    Point3 [0 => x 1 => y 2 => z]
);

impl_approx_eq!(
    Point2 [x y],
    Point3 [x y z]
);
