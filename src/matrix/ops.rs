use std::ops::Index;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::Error;

use super::Matrix;

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        // The row-major layout would silently wrap an out-of-range column into the next row.
        assert!(
            row < self.height && col < self.width,
            "index ({row}, {col}) out of bounds for a {}x{} matrix",
            self.height,
            self.width,
        );
        &self.cells[row * self.width + col]
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self
                .cells
                .as_slice()
                .abs_diff_eq(other.cells.as_slice(), epsilon)
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.shape() == other.shape()
            && self
                .cells
                .as_slice()
                .relative_eq(other.cells.as_slice(), epsilon, max_relative)
    }
}

impl UlpsEq for Matrix {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.shape() == other.shape()
            && self
                .cells
                .as_slice()
                .ulps_eq(other.cells.as_slice(), epsilon, max_ulps)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}
