/// 4x4 homogeneous matrices and their algebra
///
/// Matrices are row-major and act on row vectors: a point is transformed as
/// `v' = v · M`, so translation lives in row 3 and a chain `A · B` applies
/// `A` first.
use std::ops::Mul;

use crate::error::{MathError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4x4 {
    pub m: [[f32; 4]; 4],
}

impl Matrix4x4 {
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    /// 1 on the diagonal, 0 elsewhere.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub fn transpose(&self) -> Self {
        let mut result = Self::ZERO;
        for (i, row) in self.m.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                result.m[j][i] = *value;
            }
        }
        result
    }

    /// Row-major product `self · rhs`. Associative, not commutative.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = (0..4).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        result
    }

    /// Determinant by cofactor expansion along row 0.
    pub fn determinant(&self) -> f32 {
        (0..4).map(|col| self.m[0][col] * self.cofactor(0, col)).sum()
    }

    /// Inverse via the adjugate scaled by `1 / det`.
    ///
    /// A singular matrix (determinant exactly zero) yields [`Matrix4x4::ZERO`]
    /// with no further indication; use [`Matrix4x4::try_inverse`] when the
    /// caller needs to know.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(|_| {
            tracing::debug!("inverse of singular matrix, returning zero matrix");
            Self::ZERO
        })
    }

    /// Inverse, or [`MathError::Singular`] when the determinant is exactly zero.
    pub fn try_inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        if determinant == 0.0 {
            return Err(MathError::Singular { determinant });
        }

        let inv_det = 1.0 / determinant;
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                // adjugate = transposed cofactor matrix
                result.m[i][j] = self.cofactor(j, i) * inv_det;
            }
        }
        Ok(result)
    }

    /// Signed 3x3 minor obtained by deleting `row` and `col`.
    fn cofactor(&self, row: usize, col: usize) -> f32 {
        let rows = remaining(row);
        let cols = remaining(col);
        let a = |r: usize, c: usize| self.m[rows[r]][cols[c]];

        let minor = a(0, 0) * (a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1))
            - a(0, 1) * (a(1, 0) * a(2, 2) - a(1, 2) * a(2, 0))
            + a(0, 2) * (a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0));

        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Element-wise comparison within an absolute tolerance.
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

/// The three indices of 0..4 other than `skip`.
fn remaining(skip: usize) -> [usize; 3] {
    match skip {
        0 => [1, 2, 3],
        1 => [0, 2, 3],
        2 => [0, 1, 3],
        _ => [0, 1, 2],
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul for &Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, rhs: Self) -> Matrix4x4 {
        self.multiply(rhs)
    }
}

/// nalgebra works with column vectors, so the same map is the transpose.
impl From<Matrix4x4> for nalgebra::Matrix4<f32> {
    fn from(matrix: Matrix4x4) -> Self {
        nalgebra::Matrix4::from_fn(|i, j| matrix.m[j][i])
    }
}

impl From<nalgebra::Matrix4<f32>> for Matrix4x4 {
    fn from(matrix: nalgebra::Matrix4<f32>) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = matrix[(j, i)];
            }
        }
        result
    }
}
