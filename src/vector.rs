use std::{fmt, iter::Copied, slice};

use tinyvec::TinyVec;

use crate::{Error, Result};

mod ops;

/// A column vector of [`f64`] components whose dimension is fixed when it is created.
///
/// Vectors with up to 4 components are stored inline and never allocate.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions create vectors from their
///   components.
/// - [`Vector::new`] collects any iterator of components, and [`Vector::from_fn`] invokes a
///   closure with the index of each component.
/// - Vectors can be created from arrays and slices using their [`From`] implementations.
///
/// # Operations
///
/// Operations that combine two vectors require matching dimensions and return
/// [`Error::DimensionMismatch`] otherwise:
///
/// ```
/// # use zaru_num::*;
/// let a = vec3(1.0, 3.0, -5.0);
/// let b = vec3(4.0, -2.0, -1.0);
/// assert_eq!(a.dot(&b)?, 3.0);
/// assert!(a.dot(&vec2(1.0, 1.0)).is_err());
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Default)]
pub struct Vector(TinyVec<[f64; 4]>);

impl Vector {
    /// Creates a [`Vector`] from an iterator of components.
    pub fn new<I: IntoIterator<Item = f64>>(components: I) -> Self {
        Self(components.into_iter().collect())
    }

    /// Creates a `dim`-dimensional vector by invoking a closure with the index of each component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_num::*;
    /// let v = Vector::from_fn(3, |i| i as f64 + 100.0);
    /// assert_eq!(v, vec3(100.0, 101.0, 102.0));
    /// ```
    pub fn from_fn<F>(dim: usize, cb: F) -> Self
    where
        F: FnMut(usize) -> f64,
    {
        Self((0..dim).map(cb).collect())
    }

    /// Returns the number of components.
    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Returns the component at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns an iterator over the components.
    #[inline]
    pub fn iter(&self) -> Copied<slice::Iter<'_, f64>> {
        self.0.iter().copied()
    }

    /// Applies a closure to each component, returning a new vector.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self(self.iter().map(f).collect())
    }

    /// Returns the squared Euclidean length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_num::*;
    /// assert_eq!(vec2(4.0, 0.0).magnitude2(), 16.0);
    /// ```
    pub fn magnitude2(&self) -> f64 {
        self.iter().fold(0.0, |acc, c| acc + c * c)
    }

    /// Returns the Euclidean length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_num::*;
    /// assert_eq!(vec2(3.0, 4.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.magnitude2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector has no direction; normalizing it yields `NaN` components.
    pub fn normalize(&self) -> Self {
        let len = self.magnitude();
        self.map(|c| c / len)
    }

    /// Multiplies every component with `scalar`.
    pub fn scale(&self, scalar: f64) -> Self {
        self.map(|c| c * scalar)
    }

    /// Component-wise sum of `self` and `other`.
    pub fn plus(&self, other: &Self) -> Result<Self> {
        self.check_dim(other, "vector sum")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Component-wise difference of `self` and `other`.
    pub fn minus(&self, other: &Self) -> Result<Self> {
        self.check_dim(other, "vector difference")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Both vectors must have the same dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_num::*;
    /// assert_eq!(vec2(0.0, 1.0).dot(&vec2(1.0, 0.0))?, 0.0);
    /// assert_eq!(vec2(0.0, 1.0).dot(&vec2(0.0, -1.0))?, -1.0);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.check_dim(other, "dot product")?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(0.0, |acc, (a, b)| acc + a * b))
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// Only defined for 3-dimensional vectors. The result is perpendicular to both operands;
    /// swapping them inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_num::*;
    /// let x = vec3(1.0, 0.0, 0.0);
    /// let y = vec3(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(&y)?, vec3(0.0, 0.0, 1.0));
    /// assert_eq!(y.cross(&x)?, vec3(0.0, 0.0, -1.0));
    /// assert!(vec2(1.0, 0.0).cross(&vec2(0.0, 1.0)).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self> {
        let ([a1, a2, a3], [b1, b2, b3]) = (as_vec3(self)?, as_vec3(other)?);

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        Ok(cross)
    }

    fn zip_with<F>(&self, other: &Self, mut f: F) -> Self
    where
        F: FnMut(f64, f64) -> f64,
    {
        Self(self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect())
    }

    fn check_dim(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(Error::DimensionMismatch {
                operation,
                expected: self.dim(),
                found: other.dim(),
            });
        }
        Ok(())
    }
}

fn as_vec3(v: &Vector) -> Result<[f64; 3]> {
    match *v.as_slice() {
        [x, y, z] => Ok([x, y, z]),
        _ => Err(Error::DimensionMismatch {
            operation: "cross product",
            expected: 3,
            found: v.dim(),
        }),
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in self.0.iter() {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay(f64);
        impl fmt::Debug for DebugViaDisplay {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in self.iter() {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

/// Constructs a 2-dimensional [`Vector`].
#[inline]
pub fn vec2(x: f64, y: f64) -> Vector {
    Vector::from([x, y])
}

/// Constructs a 3-dimensional [`Vector`].
#[inline]
pub fn vec3(x: f64, y: f64, z: f64) -> Vector {
    Vector::from([x, y, z])
}

/// Constructs a 4-dimensional [`Vector`].
#[inline]
pub fn vec4(x: f64, y: f64, z: f64, w: f64) -> Vector {
    Vector::from([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn construction() {
        assert_eq!(vec2(1.0, 2.0).dim(), 2);
        assert_eq!(Vector::new([1.0, 2.0, 3.0, 4.0, 5.0]).dim(), 5);
        assert_eq!(Vector::default().dim(), 0);
        assert_eq!(Vector::from(&[1.0, 2.0][..]), vec2(1.0, 2.0));
        assert_eq!([0.5, 1.5].into_iter().collect::<Vector>(), vec2(0.5, 1.5));
        assert_eq!(vec4(1.0, 2.0, 3.0, 4.0).get(3), Some(4.0));
        assert_eq!(vec4(1.0, 2.0, 3.0, 4.0).get(4), None);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec4(0.0, 0.0, 0.0, 1.0)), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", vec4(0.0, 0.0, 0.0, 1.0)), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(&vec3(4.0, -2.0, -1.0)), Ok(3.0));
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(&vec3(1.0, 3.0, -5.0)), Ok(35.0));
        assert_eq!(
            vec3(1.0, 3.0, -5.0).dot(&vec2(1.0, 3.0)),
            Err(Error::DimensionMismatch {
                operation: "dot product",
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn cross() {
        let x = vec3(1.0, 0.0, 0.0);
        let y = vec3(0.0, 1.0, 0.0);
        let z = vec3(0.0, 0.0, 1.0);
        assert_eq!(x.cross(&y).unwrap(), z);
        assert_eq!(y.cross(&z).unwrap(), x);
        assert_eq!(z.cross(&x).unwrap(), y);
        assert_eq!(y.cross(&x).unwrap(), -z.clone());

        let a = vec3(2.0, -1.0, 0.5);
        let b = vec3(-3.0, 4.0, 1.0);
        let c = a.cross(&b).unwrap();
        assert_relative_eq!(c.dot(&a).unwrap(), 0.0);
        assert_relative_eq!(c.dot(&b).unwrap(), 0.0);

        assert_eq!(
            vec4(1.0, 0.0, 0.0, 0.0).cross(&z),
            Err(Error::DimensionMismatch {
                operation: "cross product",
                expected: 3,
                found: 4,
            })
        );
        assert!(z.cross(&vec2(1.0, 0.0)).is_err());
    }

    #[test]
    fn magnitude() {
        assert_eq!(vec3(0.0, 0.0, 1.0).magnitude(), 1.0);
        assert_eq!(vec4(1.0, 1.0, 1.0, 1.0).magnitude(), 2.0);
        assert_eq!(Vector::default().magnitude(), 0.0);
        assert_relative_eq!(vec2(3.0, -4.0).normalize(), vec2(0.6, -0.8));
    }

    #[test]
    fn arithmetic() {
        let a = vec2(1.0, 2.0);
        let b = vec2(0.5, -1.0);
        assert_eq!(a.plus(&b).unwrap(), vec2(1.5, 1.0));
        assert_eq!(a.minus(&b).unwrap(), vec2(0.5, 3.0));
        assert_eq!(a.scale(2.0), vec2(2.0, 4.0));
        assert_eq!(&a * 3.0, vec2(3.0, 6.0));
        assert_eq!(-a.clone(), vec2(-1.0, -2.0));
        assert!(a.plus(&vec3(0.0, 0.0, 0.0)).is_err());
        assert!(a.minus(&Vector::default()).is_err());
    }
}
