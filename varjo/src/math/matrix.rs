use approx::{AbsDiffEq, RelativeEq};
use std::ops::Mul;

use super::{common::FloatValueType, vector::Vec4};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Utilities/Mathematical_Routines.html#Matrix4x4

/// A row-major 4x4 matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Raw values in row-major order.
    pub m: [[T; 4]; 4],
}

impl<T> Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Creates a new `Matrix4x4`.
    pub fn new(m: [[T; 4]; 4]) -> Self {
        let ret = Self { m };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new identity `Matrix4x4`.
    pub fn identity() -> Self {
        Self {
            m: [
                [T::one(), T::zero(), T::zero(), T::zero()],
                [T::zero(), T::one(), T::zero(), T::zero()],
                [T::zero(), T::zero(), T::one(), T::zero()],
                [T::zero(), T::zero(), T::zero(), T::one()],
            ],
        }
    }

    /// Creates a new `Matrix4x4` filled with zeroes.
    pub fn zeros() -> Self {
        Self {
            m: [[T::zero(); 4]; 4],
        }
    }

    /// Checks if this `Matrix4x4` contains NaNs.
    pub fn has_nans(&self) -> bool {
        // NaNs are the rare special case so no need to early out
        self.m
            .iter()
            .flat_map(|row| row.iter().map(|t| t.is_nan()))
            .any(|p| p)
    }

    /// Returns the `i`th row of this `Matrix4x4`.
    pub fn row(&self, i: usize) -> [T; 4] {
        self.m[i]
    }

    /// Returns the `i`th column of this `Matrix4x4`.
    pub fn col(&self, i: usize) -> [T; 4] {
        [self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i]]
    }

    /// Returns the transpose of this `Matrix4x4`.
    pub fn transposed(&self) -> Self {
        Self {
            m: [
                [self.m[0][0], self.m[1][0], self.m[2][0], self.m[3][0]],
                [self.m[0][1], self.m[1][1], self.m[2][1], self.m[3][1]],
                [self.m[0][2], self.m[1][2], self.m[2][2], self.m[3][2]],
                [self.m[0][3], self.m[1][3], self.m[2][3], self.m[3][3]],
            ],
        }
    }

    /// Returns the determinant of this `Matrix4x4`.
    pub fn determinant(&self) -> T {
        let m = &self.m;

        // Cofactor expansion along the first row, sharing the 2x2 minors of
        // the bottom two rows
        let s0 = m[2][2] * m[3][3] - m[2][3] * m[3][2];
        let s1 = m[2][1] * m[3][3] - m[2][3] * m[3][1];
        let s2 = m[2][1] * m[3][2] - m[2][2] * m[3][1];
        let s3 = m[2][0] * m[3][3] - m[2][3] * m[3][0];
        let s4 = m[2][0] * m[3][2] - m[2][2] * m[3][0];
        let s5 = m[2][0] * m[3][1] - m[2][1] * m[3][0];

        m[0][0] * (m[1][1] * s0 - m[1][2] * s1 + m[1][3] * s2)
            - m[0][1] * (m[1][0] * s0 - m[1][2] * s3 + m[1][3] * s4)
            + m[0][2] * (m[1][0] * s1 - m[1][1] * s3 + m[1][3] * s5)
            - m[0][3] * (m[1][0] * s2 - m[1][1] * s4 + m[1][2] * s5)
    }

    /// Returns the inverse of this `Matrix4x4`.
    ///
    /// Inversion of a singular or near-singular matrix is outside the
    /// contract. Scene transforms are expected non-degenerate and callers
    /// must not rely on the result for them.
    pub fn inverted(&self) -> Self {
        // Cofactor method on 2x2 minors, see e.g.
        // https://www.geometrictools.com/Documentation/LaplaceExpansionTheorem.pdf
        let m = &self.m;

        let a0 = m[0][0] * m[1][1] - m[0][1] * m[1][0];
        let a1 = m[0][0] * m[1][2] - m[0][2] * m[1][0];
        let a2 = m[0][0] * m[1][3] - m[0][3] * m[1][0];
        let a3 = m[0][1] * m[1][2] - m[0][2] * m[1][1];
        let a4 = m[0][1] * m[1][3] - m[0][3] * m[1][1];
        let a5 = m[0][2] * m[1][3] - m[0][3] * m[1][2];
        let b0 = m[2][0] * m[3][1] - m[2][1] * m[3][0];
        let b1 = m[2][0] * m[3][2] - m[2][2] * m[3][0];
        let b2 = m[2][0] * m[3][3] - m[2][3] * m[3][0];
        let b3 = m[2][1] * m[3][2] - m[2][2] * m[3][1];
        let b4 = m[2][1] * m[3][3] - m[2][3] * m[3][1];
        let b5 = m[2][2] * m[3][3] - m[2][3] * m[3][2];

        let det = a0 * b5 - a1 * b4 + a2 * b3 + a3 * b2 - a4 * b1 + a5 * b0;
        debug_assert!(
            det.abs() > T::epsilon(),
            "Can't invert, singular matrix"
        );
        let inv_det = T::one() / det;

        Matrix4x4::new([
            [
                (m[1][1] * b5 - m[1][2] * b4 + m[1][3] * b3) * inv_det,
                (-m[0][1] * b5 + m[0][2] * b4 - m[0][3] * b3) * inv_det,
                (m[3][1] * a5 - m[3][2] * a4 + m[3][3] * a3) * inv_det,
                (-m[2][1] * a5 + m[2][2] * a4 - m[2][3] * a3) * inv_det,
            ],
            [
                (-m[1][0] * b5 + m[1][2] * b2 - m[1][3] * b1) * inv_det,
                (m[0][0] * b5 - m[0][2] * b2 + m[0][3] * b1) * inv_det,
                (-m[3][0] * a5 + m[3][2] * a2 - m[3][3] * a1) * inv_det,
                (m[2][0] * a5 - m[2][2] * a2 + m[2][3] * a1) * inv_det,
            ],
            [
                (m[1][0] * b4 - m[1][1] * b2 + m[1][3] * b0) * inv_det,
                (-m[0][0] * b4 + m[0][1] * b2 - m[0][3] * b0) * inv_det,
                (m[3][0] * a4 - m[3][1] * a2 + m[3][3] * a0) * inv_det,
                (-m[2][0] * a4 + m[2][1] * a2 - m[2][3] * a0) * inv_det,
            ],
            [
                (-m[1][0] * b3 + m[1][1] * b1 - m[1][2] * b0) * inv_det,
                (m[0][0] * b3 - m[0][1] * b1 + m[0][2] * b0) * inv_det,
                (-m[3][0] * a3 + m[3][1] * a1 - m[3][2] * a0) * inv_det,
                (m[2][0] * a3 - m[2][1] * a1 + m[2][2] * a0) * inv_det,
            ],
        ])
    }
}

// By ref is about twice as fast as by value so let's just endure the syntax
impl<'a, 'b, T> Mul<&'b Matrix4x4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Matrix4x4<T>;

    fn mul(self, other: &'b Matrix4x4<T>) -> Matrix4x4<T> {
        let mut ret = Matrix4x4::zeros();
        for row in 0..4 {
            for col in 0..4 {
                ret.m[row][col] = self.m[row][0] * other.m[0][col]
                    + self.m[row][1] * other.m[1][col]
                    + self.m[row][2] * other.m[2][col]
                    + self.m[row][3] * other.m[3][col];
            }
        }
        debug_assert!(!ret.has_nans());
        ret
    }
}

impl<'a, T> Mul<Vec4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Vec4<T>;

    fn mul(self, v: Vec4<T>) -> Vec4<T> {
        let m = &self.m;
        Vec4::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z + m[0][3] * v.w,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z + m[1][3] * v.w,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z + m[2][3] * v.w,
            m[3][0] * v.x + m[3][1] * v.y + m[3][2] * v.z + m[3][3] * v.w,
        )
    }
}

impl<T> AbsDiffEq for Matrix4x4<T>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        for row in 0..4 {
            for col in 0..4 {
                if !self.m[row][col].abs_diff_eq(&other.m[row][col], epsilon) {
                    return false;
                }
            }
        }
        true
    }
}

impl<T> RelativeEq for Matrix4x4<T>
where
    T: FloatValueType + RelativeEq + AbsDiffEq<Epsilon = T>,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        for row in 0..4 {
            for col in 0..4 {
                if !self.m[row][col].relative_eq(&other.m[row][col], epsilon, max_relative) {
                    return false;
                }
            }
        }
        true
    }
}
