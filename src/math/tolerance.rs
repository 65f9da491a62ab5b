use super::{Point2, Vector2};
use crate::error::{GeometryError, Result};

/// Precision used when no other is configured.
pub const DEFAULT_PRECISION: f64 = 1e-3;

/// Numeric slack for the tolerant predicates in this crate.
///
/// A single value is meant to govern every comparison of one computation, so
/// it is passed explicitly to each predicate instead of being read from a
/// global.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    precision: f64,
    precision_squared: f64,
}

impl Tolerance {
    /// Creates a tolerance with the given precision.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NegativePrecision` if `precision` is negative or NaN.
    pub fn new(precision: f64) -> Result<Self> {
        let mut tol = Self::default();
        tol.set_precision(precision)?;
        Ok(tol)
    }

    /// Replaces the precision, keeping the squared value in sync.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NegativePrecision` if `precision` is negative or NaN.
    pub fn set_precision(&mut self, precision: f64) -> Result<()> {
        if precision.is_nan() || precision < 0.0 {
            return Err(GeometryError::NegativePrecision(precision).into());
        }
        self.precision = precision;
        self.precision_squared = precision * precision;
        Ok(())
    }

    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    #[must_use]
    pub fn precision_squared(&self) -> f64 {
        self.precision_squared
    }

    /// Approximate point equality: both coordinates differ by at most the precision.
    #[must_use]
    pub fn eq_points(&self, a: &Point2, b: &Point2) -> bool {
        (a - b).amax() <= self.precision
    }

    /// Whether a vector is shorter than the precision.
    #[must_use]
    pub fn is_zero(&self, v: &Vector2) -> bool {
        v.norm_squared() <= self.precision_squared
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            precision_squared: DEFAULT_PRECISION * DEFAULT_PRECISION,
        }
    }
}
