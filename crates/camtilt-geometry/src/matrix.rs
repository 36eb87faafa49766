//! Small fixed-size matrices.
//!
//! The perspective pipeline only ever multiplies a handful of 3x3, 3x4, 4x3
//! and 4x4 matrices, so the storage lives on the stack and the dimensions are
//! checked at compile time through const generics.

use std::ops::{Index, IndexMut, Mul};

use crate::error::PerspectiveError;

/// A row-major matrix with `R` rows and `C` columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<const R: usize, const C: usize>(pub [[f64; C]; R]);

/// 3x3 matrix, the planar projective transform.
pub type Mat3 = Matrix<3, 3>;

/// 3x4 matrix, the camera projection.
pub type Mat3x4 = Matrix<3, 4>;

/// 4x3 matrix, the plane embedding.
pub type Mat4x3 = Matrix<4, 3>;

/// 4x4 matrix, a homogeneous 3d transform.
pub type Mat4 = Matrix<4, 4>;

impl<const R: usize, const C: usize> Matrix<R, C> {
    /// Matrix filled with zeros.
    pub const ZEROS: Self = Self([[0.0; C]; R]);

    /// Create a matrix from its rows.
    #[inline]
    pub fn from_rows(rows: [[f64; C]; R]) -> Self {
        Self(rows)
    }

    /// Borrow the rows of the matrix.
    #[inline]
    pub fn rows(&self) -> &[[f64; C]; R] {
        &self.0
    }

    /// Returns true if no element is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().flatten().all(|v| v.is_finite())
    }
}

impl<const N: usize> Matrix<N, N> {
    /// Identity matrix.
    pub fn identity() -> Self {
        let mut m = Self::ZEROS;
        for i in 0..N {
            m.0[i][i] = 1.0;
        }
        m
    }
}

impl<const R: usize, const C: usize> Index<(usize, usize)> for Matrix<R, C> {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// Matrix-matrix multiplication with the inner dimension checked by the type system.
impl<const R: usize, const C: usize, const K: usize> Mul<Matrix<C, K>> for Matrix<R, C> {
    type Output = Matrix<R, K>;

    fn mul(self, rhs: Matrix<C, K>) -> Self::Output {
        let mut out = Matrix::<R, K>::ZEROS;
        for i in 0..R {
            for j in 0..K {
                out.0[i][j] = (0..C).map(|k| self.0[i][k] * rhs.0[k][j]).sum();
            }
        }
        out
    }
}

impl Mat3 {
    /// Determinant of the matrix.
    #[rustfmt::skip]
    pub fn determinant(&self) -> f64 {
        let m = &self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1]) -
        m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0]) +
        m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    #[rustfmt::skip]
    fn adjugate(&self) -> Self {
        let m = &self.0;
        Self([
            [
                m[1][1] * m[2][2] - m[1][2] * m[2][1],
                m[0][2] * m[2][1] - m[0][1] * m[2][2],
                m[0][1] * m[1][2] - m[0][2] * m[1][1],
            ],
            [
                m[1][2] * m[2][0] - m[1][0] * m[2][2],
                m[0][0] * m[2][2] - m[0][2] * m[2][0],
                m[0][2] * m[1][0] - m[0][0] * m[1][2],
            ],
            [
                m[1][0] * m[2][1] - m[1][1] * m[2][0],
                m[0][1] * m[2][0] - m[0][0] * m[2][1],
                m[0][0] * m[1][1] - m[0][1] * m[1][0],
            ],
        ])
    }

    /// Inverse of the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`PerspectiveError::SingularMatrix`] if the determinant is zero
    /// or not finite.
    pub fn inverse(&self) -> Result<Self, PerspectiveError> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(PerspectiveError::SingularMatrix);
        }

        let inv_det = 1.0 / det;
        let mut inv = self.adjugate();
        inv.0.iter_mut().flatten().for_each(|v| *v *= inv_det);

        Ok(inv)
    }

    /// Map a 2d point through the matrix with the homogeneous divide.
    ///
    /// Returns `None` when the point lands on the line at infinity.
    pub fn transform_point(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let m = &self.0;
        let w = m[2][0] * x + m[2][1] * y + m[2][2];
        if w == 0.0 {
            return None;
        }
        let u = (m[0][0] * x + m[0][1] * y + m[0][2]) / w;
        let v = (m[1][0] * x + m[1][1] * y + m[1][2]) / w;
        Some((u, v))
    }

    /// Flatten to a row-major array.
    pub fn to_array(&self) -> [f64; 9] {
        let m = &self.0;
        [
            m[0][0], m[0][1], m[0][2], m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_mul() {
        let m = Mat4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!(Mat4::identity() * m, m);
        assert_eq!(m * Mat4::identity(), m);
    }

    #[test]
    fn mul_rectangular() {
        let a = Mat3x4::from_rows([
            [1.0, 0.0, 0.0, 1.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ]);
        let b = Mat4x3::from_rows([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        let c: Mat3 = a * b;
        assert_eq!(
            c.0,
            [[1.0, 0.0, 1.0], [0.0, 2.0, 0.0], [0.0, 0.0, 0.0]]
        );
    }

    #[test]
    fn inverse() -> Result<(), PerspectiveError> {
        let m = Mat3::from_rows([[1.0, 0.0, -1.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0]]);
        let expected = Mat3::from_rows([[1.0, 0.0, 1.0], [0.0, 1.0, -1.0], [0.0, 0.0, 1.0]]);
        assert_eq!(m.inverse()?, expected);

        let m = Mat3::from_rows([[2.0, 1.0, 0.5], [-1.0, 3.0, 2.0], [0.25, 0.0, 1.0]]);
        let prod = m * m.inverse()?;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(prod[(i, j)], expected, epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn inverse_singular() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]]);
        assert!(matches!(m.inverse(), Err(PerspectiveError::SingularMatrix)));
    }

    #[test]
    fn transform_point() {
        let m = Mat3::from_rows([[1.0, 0.0, -1.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0]]);
        assert_eq!(m.transform_point(1.0, 1.0), Some((0.0, 2.0)));

        let m = Mat3::from_rows([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]);
        assert_eq!(m.transform_point(3.0, -4.0), Some((3.0, -4.0)));

        let m = Mat3::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]);
        assert_eq!(m.transform_point(0.0, 5.0), None);
    }

    #[test]
    fn flatten() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn finite() {
        let mut m = Mat3::identity();
        assert!(m.is_finite());
        m[(1, 2)] = f64::NAN;
        assert!(!m.is_finite());
    }
}
