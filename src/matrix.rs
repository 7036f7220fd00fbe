use std::fmt;

use itertools::Itertools;

use crate::{Error, Result};

mod ops;
mod square;

pub use square::SquareMatrix;

/// An immutable matrix of finite [`f64`] elements with `height` rows and `width` columns.
///
/// # Construction
///
/// - [`Matrix::new`] and [`Matrix::from_rows`] build a matrix from its rows. Rows can be anything
///   that implements `AsRef<[f64]>`: arrays, slices, [`Vec`]s and [`Vector`][crate::Vector]s. All rows
///   must have the same length, and every element must be finite.
/// - [`SquareMatrix::identity`] creates square identity matrices.
///
/// Operations whose result would contain an infinite or NaN element return [`Error::Domain`], so
/// every [`Matrix`] holds finite elements only.
///
/// Matrices may be empty (have zero rows or zero columns). A matrix built from rows has a width of
/// 0 when there are no rows, but [`Matrix::transpose`] and [`Matrix::minor`] can produce matrices
/// with zero rows and a non-zero width. [`Matrix::to_rows`] cannot carry that width, so such a
/// matrix does not survive a round trip through its rows.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] for tuples of `(usize, usize)`. The first element of the tuple
/// is the *row*, the second is the *column*, matching common mathematical notation. Indices are
/// 0-based. Indexing out of bounds panics; [`Matrix::get`] and [`Matrix::at`] perform checked
/// access instead.
///
/// ```
/// # use zaru_num::*;
/// let mat = Matrix::from_rows([
///     [0.0, 1.0],
/// ])?;
/// assert_eq!(mat[(0, 1)], 1.0);
/// assert_eq!(mat.get(0, 2), None);
/// assert!(mat.at(1, 0).is_err());
/// # Ok::<(), Error>(())
/// ```
///
/// # Operations
///
/// Every operation returns a new matrix and leaves `self` untouched.
///
/// [`Index`]: std::ops::Index
#[derive(Clone, Default, PartialEq)]
pub struct Matrix {
    height: usize,
    width: usize,
    // Row-major, `height * width` elements.
    cells: Vec<f64>,
}

impl Matrix {
    /// Creates a [`Matrix`] from a grid of rows.
    ///
    /// Returns [`Error::DimensionMismatch`] if the rows have different lengths, and
    /// [`Error::Domain`] if any element is not finite.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }

    /// Creates a [`Matrix`] from an iterator of rows.
    ///
    /// The width of the matrix is the length of the first row. A matrix without rows has a width of
    /// 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_num::*;
    /// let mat = Matrix::from_rows([
    ///     vec2(1.0, 2.0),
    ///     vec2(3.0, 4.0),
    ///     vec2(5.0, 6.0),
    /// ])?;
    /// assert_eq!(mat.shape(), (3, 2));
    ///
    /// assert!(Matrix::from_rows([&[1.0, 2.0][..], &[3.0][..]]).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let mut cells = Vec::new();
        let mut height = 0;
        let mut width = None;
        for row in rows {
            let row = row.as_ref();
            match width {
                None => width = Some(row.len()),
                Some(width) if width != row.len() => {
                    return Err(Error::DimensionMismatch {
                        operation: "matrix construction",
                        expected: width,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            check_finite(row)?;
            cells.extend_from_slice(row);
            height += 1;
        }

        Ok(Self {
            height,
            width: width.unwrap_or(0),
            cells,
        })
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    fn from_fn<F>(height: usize, width: usize, mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let cells = (0..height)
            .cartesian_product(0..width)
            .map(|(row, col)| cb(row, col))
            .collect();
        Self {
            height,
            width,
            cells,
        }
    }

    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns `(height, width)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Returns the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Returns the element at `(row, col)`, or [`Error::IndexOutOfRange`] if out of bounds.
    pub fn at(&self, row: usize, col: usize) -> Result<f64> {
        self.get(row, col).ok_or(Error::IndexOutOfRange {
            row,
            col,
            height: self.height,
            width: self.width,
        })
    }

    /// Returns the elements of row `row`, or [`None`] if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        (row < self.height).then(|| &self.cells[row * self.width..(row + 1) * self.width])
    }

    /// Returns an iterator over the rows of this matrix.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        (0..self.height).map(move |row| &self.cells[row * self.width..(row + 1) * self.width])
    }

    /// Copies the elements into a grid of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_num::*;
    /// let mat = Matrix::from_rows([
    ///     [0.0, 1.0, 2.0],
    ///     [3.0, 4.0, 5.0],
    /// ])?;
    /// assert_eq!(mat.transpose(), Matrix::from_rows([
    ///     [0.0, 3.0],
    ///     [1.0, 4.0],
    ///     [2.0, 5.0],
    /// ])?);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.width, self.height, |row, col| self[(col, row)])
    }

    /// Returns the submatrix obtained by deleting row `row` and column `col`.
    ///
    /// Returns [`Error::Undefined`] for matrices without rows or columns, and
    /// [`Error::IndexOutOfRange`] if `(row, col)` is not an element of the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_num::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [4.0, 5.0, 6.0],
    /// ])?;
    /// assert_eq!(mat.minor(0, 1)?, Matrix::from_rows([[4.0, 6.0]])?);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        if self.height == 0 || self.width == 0 {
            return Err(Error::Undefined("the minor of a degenerate matrix"));
        }
        self.at(row, col)?;

        let skip = |i: usize, removed: usize| if i < removed { i } else { i + 1 };
        Ok(Self::from_fn(self.height - 1, self.width - 1, |r, c| {
            self[(skip(r, row), skip(c, col))]
        }))
    }

    /// Multiplies every element with `scalar`.
    ///
    /// Returns [`Error::Domain`] if a resulting element is not finite, eg. when `scalar` is NaN or
    /// the product overflows.
    pub fn scale(&self, scalar: f64) -> Result<Self> {
        self.map(|elem| elem * scalar).into_finite()
    }

    /// Computes the matrix product `self * other`.
    ///
    /// The width of `self` has to match the height of `other`, otherwise
    /// [`Error::DimensionMismatch`] is returned. The result has as many rows as `self` and as many
    /// columns as `other`. A sum that overflows results in [`Error::Domain`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_num::*;
    /// let a = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    ///     [5.0, 6.0],
    /// ])?;
    /// let b = Matrix::from_rows([
    ///     [1.0, 0.0, 2.0],
    ///     [0.0, 1.0, 0.0],
    /// ])?;
    /// let c = a.times(&b)?;
    /// assert_eq!(c.shape(), (3, 3));
    /// assert_eq!(c.row(2), Some(&[5.0, 6.0, 10.0][..]));
    ///
    /// assert!(a.times(&a).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn times(&self, other: &Self) -> Result<Self> {
        if self.width != other.height {
            return Err(Error::DimensionMismatch {
                operation: "matrix product",
                expected: self.width,
                found: other.height,
            });
        }

        log::trace!(
            "{}x{} * {}x{} matrix product",
            self.height,
            self.width,
            other.height,
            other.width
        );
        Self::from_fn(self.height, other.width, |i, j| {
            (0..self.width).fold(0.0, |acc, k| acc + self[(i, k)] * other[(k, j)])
        })
        .into_finite()
    }

    fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self {
            height: self.height,
            width: self.width,
            cells: self.cells.iter().copied().map(f).collect(),
        }
    }

    fn into_finite(self) -> Result<Self> {
        check_finite(&self.cells)?;
        Ok(self)
    }
}

fn check_finite(cells: &[f64]) -> Result<()> {
    match cells.iter().find(|elem| !elem.is_finite()) {
        Some(&value) => Err(Error::Domain {
            value,
            expected: "matrix elements",
        }),
        None => Ok(()),
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a>(&'a [f64]);
        impl fmt::Debug for FormatRow<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[{:?}]", self.0.iter().format(", "))
            }
        }

        f.debug_list().entries(self.rows().map(FormatRow)).finish()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows().map(|row| row.iter().format(", "));
        write!(f, "[{}]", rows.format("; "))
    }
}
