//! Flat discounting of monthly cashflows.
//!
//! A single annual discount rate applies to every maturity. Monthly
//! discounting is derived from the annual rate via a fractional-year
//! exponent: `factor(t) = (1 + r)^(t/12)`.

use serde::{Deserialize, Serialize};

use crate::error::{check_non_negative, ValidationError};

/// Flat discount curve with a constant annual rate.
///
/// # Examples
///
/// ```rust
/// use payback_core::discount::DiscountCurve;
///
/// let curve = DiscountCurve::new(0.10).unwrap();
///
/// // One year out: factor is exactly 1 + r
/// assert!((curve.factor(12) - 1.10).abs() < 1e-12);
///
/// // Present value of a future cashflow
/// let pv = curve.present_value(1_100.0, 12);
/// assert!((pv - 1_000.0).abs() < 1e-9);
///
/// // A zero rate leaves cashflows untouched
/// let flat = DiscountCurve::new(0.0).unwrap();
/// assert_eq!(flat.present_value(500.0, 7), 500.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountCurve {
    annual_rate: f64,
}

impl DiscountCurve {
    /// Constructs a curve from an annual discount rate (>= 0, finite).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Negative`] or
    /// [`ValidationError::NonFinite`] for an out-of-domain rate.
    pub fn new(annual_rate: f64) -> Result<Self, ValidationError> {
        check_non_negative("annual_discount_rate", annual_rate)?;
        Ok(Self { annual_rate })
    }

    /// Returns the constant annual rate.
    #[inline]
    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    /// Compounding factor for a cashflow `month` months out.
    #[inline]
    pub fn factor(&self, month: u32) -> f64 {
        (1.0 + self.annual_rate).powf(month as f64 / 12.0)
    }

    /// Discounts `cashflow` occurring at `month` back to present value.
    #[inline]
    pub fn present_value(&self, cashflow: f64, month: u32) -> f64 {
        cashflow / self.factor(month)
    }
}
