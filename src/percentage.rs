//! Bounded fractional percentages.

use std::{cmp::Ordering, fmt, ops::Mul, str::FromStr};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Error, Result};

mod text;

/// A non-negative fraction, where `1.0` represents 100%.
///
/// The wrapped value is `>= 0` and finite at construction (values above 1 such as 150% are
/// allowed). Arithmetic follows IEEE-754 and is not checked afterwards, so a [`Percentage`] can
/// become positive infinity: [`Percentage::invert`] of [`Percentage::ZERO`] or of a subnormal value,
/// and [`Percentage::times`] of two large values, both overflow. It is never NaN or negative.
///
/// Percentages form a multiplicative monoid with [`Percentage::ONE`] as the identity and
/// [`Percentage::ZERO`] as the absorbing element, and are totally ordered by their value.
///
/// # Examples
///
/// ```
/// # use zaru_num::*;
/// let half = Percentage::new(0.5)?;
/// assert_eq!(half * half, Percentage::new(0.25)?);
/// assert_eq!(half.of(300.0), 150.0);
/// assert_eq!(half.to_string(), "50%");
/// assert_eq!("150%".parse::<Percentage>()?.value(), 1.5);
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// 0%, the multiplicative absorber.
    pub const ZERO: Self = Self(0.0);
    /// 100%, the multiplicative identity.
    pub const ONE: Self = Self(1.0);

    /// Smallest radix accepted by [`Percentage::to_string_radix`].
    pub const MIN_RADIX: u32 = 2;
    /// Largest radix accepted by [`Percentage::to_string_radix`].
    pub const MAX_RADIX: u32 = 36;

    /// Creates a [`Percentage`] from a plain number or from another [`Percentage`].
    ///
    /// Returns [`Error::Domain`] if the value is negative or not finite.
    pub fn new(value: impl Into<f64>) -> Result<Self> {
        let value = value.into();
        if !value.is_finite() || value < 0.0 {
            return Err(Error::Domain {
                value,
                expected: "percentages",
            });
        }
        // Adding zero turns `-0.0` into `+0.0`.
        Ok(Self(value + 0.0))
    }

    /// Returns the underlying fraction (`1.0` is 100%).
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the complement `1 - self`.
    ///
    /// Only defined for percentages between 0% and 100%, others return [`Error::OutOfRange`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_num::*;
    /// assert_eq!(Percentage::new(0.25)?.conjugate()?, Percentage::new(0.75)?);
    /// assert!(Percentage::new(1.5)?.conjugate().is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn conjugate(self) -> Result<Self> {
        if !(0.0..=1.0).contains(&self.0) {
            return Err(Error::OutOfRange {
                value: self.0,
                min: 0.0,
                max: 1.0,
            });
        }
        Ok(Self(Self::ONE.0 - self.0))
    }

    /// Returns the multiplicative inverse `1 / self`.
    ///
    /// Inverting [`Percentage::ZERO`] is not an error; it yields positive infinity, as does inverting
    /// a subnormal value.
    pub fn invert(self) -> Self {
        Self(Self::ONE.0 / self.0)
    }

    /// Multiplies two percentages.
    ///
    /// This is also available via the `*` operator. A product that overflows is positive infinity.
    pub fn times(self, multiplier: Self) -> Self {
        Self(self.0 * multiplier.0)
    }

    /// Scales an arbitrary number by this percentage.
    #[inline]
    pub fn of(self, x: f64) -> f64 {
        self.0 * x
    }

    /// Restricts `self` to the range `[min, max]`.
    ///
    /// Unlike [`Ord::clamp`], this never panics: if `min > max` the bounds are swapped first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_num::*;
    /// let lo = Percentage::new(0.2)?;
    /// let hi = Percentage::new(0.8)?;
    /// assert_eq!(Percentage::ONE.clamp(lo, hi), hi);
    /// assert_eq!(Percentage::ZERO.clamp(hi, lo), lo);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }

    /// Returns the largest of at least two percentages.
    ///
    /// Returns [`Error::OutOfRange`] when fewer than two values are passed.
    pub fn max_of(values: &[Self]) -> Result<Self> {
        Self::extremum(values, Ordering::Greater)
    }

    /// Returns the smallest of at least two percentages.
    ///
    /// Returns [`Error::OutOfRange`] when fewer than two values are passed.
    pub fn min_of(values: &[Self]) -> Result<Self> {
        Self::extremum(values, Ordering::Less)
    }

    fn extremum(values: &[Self], wanted: Ordering) -> Result<Self> {
        match values {
            [first, rest @ ..] if !rest.is_empty() => Ok(rest.iter().fold(*first, |acc, &p| {
                if p.cmp(&acc) == wanted {
                    p
                } else {
                    acc
                }
            })),
            _ => Err(Error::OutOfRange {
                value: values.len() as f64,
                min: 2.0,
                max: f64::INFINITY,
            }),
        }
    }

    /// Formats this percentage in the given radix, followed by `%`.
    ///
    /// The value is multiplied by `radix²` before formatting, so that `1.0` becomes `100%` in base
    /// 10 and `100%` (= 256) in base 16. Fractional digits are written after a `.` when present.
    /// Values too large to be scaled have their digits shifted instead.
    /// Returns [`Error::OutOfRange`] if `radix` is not between [`Percentage::MIN_RADIX`] and
    /// [`Percentage::MAX_RADIX`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_num::*;
    /// let half = Percentage::new(0.5)?;
    /// assert_eq!(half.to_string_radix(10)?, "50%");
    /// assert_eq!(half.to_string_radix(16)?, "80%");
    /// assert_eq!(Percentage::new(0.125)?.to_string_radix(2)?, "0.1%");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn to_string_radix(self, radix: u32) -> Result<String> {
        if !(Self::MIN_RADIX..=Self::MAX_RADIX).contains(&radix) {
            return Err(Error::OutOfRange {
                value: radix.into(),
                min: Self::MIN_RADIX.into(),
                max: Self::MAX_RADIX.into(),
            });
        }
        Ok(self.format_percent(radix))
    }

    fn format_percent(self, radix: u32) -> String {
        let scaled = self.0 * f64::from(radix * radix);
        if scaled.is_finite() || !self.0.is_finite() {
            format!("{}%", text::format_radix(scaled, radix))
        } else {
            // Values this close to `f64::MAX` are integers, so scaling appends two zero digits.
            format!("{}00%", text::format_radix(self.0, radix))
        }
    }
}

impl PartialEq for Percentage {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Percentage {}

impl PartialOrd for Percentage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percentage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Mul for Percentage {
    type Output = Percentage;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times(rhs)
    }
}

impl From<Percentage> for f64 {
    #[inline]
    fn from(value: Percentage) -> Self {
        value.0
    }
}

impl TryFrom<f64> for Percentage {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Percentage {
    type Err = Error;

    /// Parses a decimal percent number such as `50%`, `12.5%` or `1e2%`.
    fn from_str(s: &str) -> Result<Self> {
        let fraction = text::parse_percent(s).ok_or_else(|| Error::Format {
            input: s.to_string(),
        })?;
        Self::new(fraction)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_percent(10))
    }
}

impl fmt::Debug for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl AbsDiffEq for Percentage {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Percentage {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl UlpsEq for Percentage {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.0.ulps_eq(&other.0, epsilon, max_ulps)
    }
}
