//! Square matrices.

use std::{fmt, ops::Index};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Error, Result};

use super::{check_finite, Matrix};

/// A [`Matrix`] with as many rows as columns.
///
/// [`SquareMatrix`] owns a [`Matrix`] and guarantees `height == width` for its whole lifetime.
/// Transposing, scaling, taking a minor of, or multiplying square matrices always results in
/// another [`SquareMatrix`].
///
/// On top of the general matrix operations, square matrices have a
/// [determinant][SquareMatrix::determinant] and, if it is non-zero, an
/// [inverse][SquareMatrix::invert].
///
/// # Examples
///
/// ```
/// # use zaru_num::*;
/// let mat = SquareMatrix::from_rows([
///     [1.0, 2.0],
///     [3.0, 4.0],
/// ])?;
/// assert_eq!(mat.determinant()?, -2.0);
/// assert_eq!(mat.invert()?, SquareMatrix::from_rows([
///     [-2.0, 1.0],
///     [1.5, -0.5],
/// ])?);
/// assert_eq!(mat.times(&mat.invert()?)?, SquareMatrix::identity(2));
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct SquareMatrix(Matrix);

impl SquareMatrix {
    /// Creates a [`SquareMatrix`] from a grid of rows.
    ///
    /// See [`SquareMatrix::from_rows`].
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }

    /// Creates a [`SquareMatrix`] from an iterator of rows.
    ///
    /// The number of rows determines the size of the matrix. Rows that are shorter are padded with
    /// zeroes, rows that are longer are truncated. Returns [`Error::Domain`] if any element that
    /// ends up in the matrix is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_num::*;
    /// let mat = SquareMatrix::from_rows([
    ///     &[1.0][..],
    ///     &[2.0, 3.0, 4.0][..],
    /// ])?;
    /// assert_eq!(mat.to_rows(), [[1.0, 0.0], [2.0, 3.0]]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let rows = rows.into_iter().collect::<Vec<_>>();
        let size = rows.len();

        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                log::debug!(
                    "resizing row {} from {} to {} elements to make it square",
                    i,
                    row.len(),
                    size
                );
            }

            let row = &row[..row.len().min(size)];
            check_finite(row)?;
            cells.extend_from_slice(row);
            cells.resize(cells.len() + size - row.len(), 0.0);
        }

        Ok(Self(Matrix {
            height: size,
            width: size,
            cells,
        }))
    }

    /// Creates the `size`x`size` identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_num::*;
    /// assert_eq!(SquareMatrix::identity(3).to_rows(), [
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(SquareMatrix::identity(0), SquareMatrix::default());
    /// ```
    pub fn identity(size: usize) -> Self {
        Self(Matrix::from_fn(size, size, |row, col| {
            if row == col {
                1.0
            } else {
                0.0
            }
        }))
    }

    /// Returns the number of rows (and columns) of this matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.0.height()
    }

    /// Borrows the underlying [`Matrix`].
    #[inline]
    pub fn as_matrix(&self) -> &Matrix {
        &self.0
    }

    /// Unwraps the underlying [`Matrix`].
    #[inline]
    pub fn into_matrix(self) -> Matrix {
        self.0
    }

    /// Returns the element at `(row, col)`, or [`None`] if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.0.get(row, col)
    }

    /// Returns the element at `(row, col)`, or [`Error::IndexOutOfRange`] if out of bounds.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Result<f64> {
        self.0.at(row, col)
    }

    /// Copies the elements into a grid of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.0.to_rows()
    }

    /// Swaps the rows and columns of this matrix.
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Returns the square submatrix obtained by deleting row `row` and column `col`.
    ///
    /// See [`Matrix::minor`] for the error conditions.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        self.0.minor(row, col).map(Self)
    }

    /// Multiplies every element with `scalar`.
    ///
    /// See [`Matrix::scale`] for the error conditions.
    pub fn scale(&self, scalar: f64) -> Result<Self> {
        self.0.scale(scalar).map(Self)
    }

    /// Computes the matrix product `self * other`.
    ///
    /// Both matrices must have the same size, otherwise [`Error::DimensionMismatch`] is returned.
    pub fn times(&self, other: &Self) -> Result<Self> {
        if self.size() != other.size() {
            return Err(Error::DimensionMismatch {
                operation: "square matrix product",
                expected: self.size(),
                found: other.size(),
            });
        }
        self.0.times(&other.0).map(Self)
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// The determinant is computed by recursive cofactor expansion along the first row. It is
    /// undefined for the empty matrix, which returns [`Error::Undefined`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_num::*;
    /// let mat = SquareMatrix::from_rows([
    ///     [-2.0, -1.0,  2.0],
    ///     [ 2.0,  1.0,  4.0],
    ///     [-3.0,  3.0, -1.0],
    /// ])?;
    /// assert_eq!(mat.determinant()?, 54.0);
    /// assert!(SquareMatrix::default().determinant().is_err());
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> Result<f64> {
        match self.size() {
            0 => Err(Error::Undefined("the determinant of an empty matrix")),
            1 => Ok(self[(0, 0)]),
            size => (0..size).try_fold(0.0, |acc, col| {
                let minor = self.minor(0, col)?;
                Ok(acc + sign(col) * self[(0, col)] * minor.determinant()?)
            }),
        }
    }

    /// Computes the inverse of this matrix, ie. the matrix `M` for which `self * M` is the identity.
    ///
    /// The inverse is the adjugate divided by the [determinant]. The cofactors are computed from
    /// the minors of the transposed matrix, and the resulting matrix is scaled by `1 / det` once.
    ///
    /// The empty matrix is its own inverse. Returns [`Error::Undefined`] if the determinant is
    /// zero (the matrix is singular), and [`Error::Domain`] if the determinant or an element of the
    /// inverse is not finite.
    ///
    /// [determinant]: SquareMatrix::determinant
    pub fn invert(&self) -> Result<Self> {
        let size = self.size();
        if size == 0 {
            return Ok(Self::default());
        }

        let det = self.determinant()?;
        if det == 0.0 {
            return Err(Error::Undefined("the inverse of a singular matrix"));
        }
        if !det.is_finite() {
            return Err(Error::Domain {
                value: det,
                expected: "invertible determinants",
            });
        }
        log::trace!("inverting {size}x{size} matrix with determinant {det}");

        if size == 1 {
            let inverse = Matrix {
                height: 1,
                width: 1,
                cells: vec![1.0 / det],
            };
            return inverse.into_finite().map(Self);
        }

        let transposed = self.transpose();
        let mut cofactors = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let minor = transposed.minor(row, col)?;
                cofactors.push(sign(row + col) * minor.determinant()?);
            }
        }

        let adjugate = Self(Matrix {
            height: size,
            width: size,
            cells: cofactors,
        });
        adjugate.scale(1.0 / det)
    }
}

/// `(-1)^i`
fn sign(i: usize) -> f64 {
    if i % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

impl Index<(usize, usize)> for SquareMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.0[index]
    }
}

impl TryFrom<Matrix> for SquareMatrix {
    type Error = Error;

    fn try_from(matrix: Matrix) -> Result<Self> {
        if matrix.height() != matrix.width() {
            return Err(Error::DimensionMismatch {
                operation: "square matrix conversion",
                expected: matrix.height(),
                found: matrix.width(),
            });
        }
        Ok(Self(matrix))
    }
}

impl TryFrom<Vec<Vec<f64>>> for SquareMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<SquareMatrix> for Matrix {
    #[inline]
    fn from(square: SquareMatrix) -> Self {
        square.0
    }
}

impl AsRef<Matrix> for SquareMatrix {
    #[inline]
    fn as_ref(&self) -> &Matrix {
        &self.0
    }
}

impl PartialEq<Matrix> for SquareMatrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.0 == *other
    }
}

impl PartialEq<SquareMatrix> for Matrix {
    fn eq(&self, other: &SquareMatrix) -> bool {
        *self == other.0
    }
}

impl AbsDiffEq for SquareMatrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        Matrix::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for SquareMatrix {
    fn default_max_relative() -> f64 {
        Matrix::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl UlpsEq for SquareMatrix {
    fn default_max_ulps() -> u32 {
        Matrix::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.0.ulps_eq(&other.0, epsilon, max_ulps)
    }
}

impl fmt::Debug for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
