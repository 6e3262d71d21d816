//! Fixed-precision age representation
//!
//! Ages are carried as an exact count of hundredths of a year rather than as
//! floating-point years, so results are identical across platforms. All
//! rounding is half-up.

use crate::error::ScreeningError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Days in a year, accounting for leap years, as the exact fraction 1461/4.
const DAYS_PER_YEAR_NUM: i64 = 1461;
const DAYS_PER_YEAR_DEN: i64 = 4;

/// Completed weeks in a year used for prematurity corrections.
const WEEKS_PER_YEAR: i64 = 52;

/// An age in decimal years with two-digit precision
///
/// The value is stored as an integer count of hundredths of a year
/// (e.g. `3.32` years is stored as `332`), which keeps comparisons against
/// percentile thresholds exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgeYears(i64);

impl AgeYears {
    /// Zero years
    pub const ZERO: Self = Self(0);

    /// Create an age from a count of hundredths of a year
    #[must_use]
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Create an age from a whole number of years
    #[must_use]
    pub const fn from_years(years: i64) -> Self {
        Self(years * 100)
    }

    /// Convert a day count to decimal years
    ///
    /// Divides by 365.25 and rounds to two decimal places, computed exactly
    /// as `days * 400 / 1461` with half-up rounding.
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        Self(div_round_half(
            days * 100 * DAYS_PER_YEAR_DEN,
            DAYS_PER_YEAR_NUM,
        ))
    }

    /// Convert a week count to decimal years
    ///
    /// Divides by 52 and rounds to two decimal places.
    #[must_use]
    pub const fn from_weeks(weeks: i64) -> Self {
        Self(div_round_half(weeks * 100, WEEKS_PER_YEAR))
    }

    /// Get the underlying count of hundredths of a year
    #[must_use]
    pub const fn hundredths(self) -> i64 {
        self.0
    }

    /// Get the age as floating-point years
    ///
    /// Only intended for display and interoperability; comparisons should use
    /// the exact representation.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whether this age is negative
    ///
    /// Negative ages cannot arise from a validated [`crate::models::ChildProfile`],
    /// but the representation allows them for intermediate arithmetic.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

/// Integer division rounding half away from zero
///
/// The denominator must be positive. For the non-negative numerators produced
/// by age arithmetic this is plain half-up rounding.
const fn div_round_half(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if 2 * remainder.abs() >= denominator {
        quotient + numerator.signum()
    } else {
        quotient
    }
}

impl Add for AgeYears {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for AgeYears {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for AgeYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.abs();
        write!(f, "{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }
}

impl FromStr for AgeYears {
    type Err = ScreeningError;

    /// Parse a decimal age such as `"1.47"`, `"0.5"` or `"2"`
    ///
    /// At most two fractional digits are accepted; anything finer would be
    /// silently lossy and is rejected instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ScreeningError::InvalidAge(s.to_string());

        let (sign, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, trimmed),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() || fraction.len() > 2 {
            return Err(invalid());
        }

        let years: i64 = whole.parse().map_err(|_| invalid())?;
        let hundredths: i64 = if fraction.is_empty() {
            0
        } else if fraction.chars().all(|c| c.is_ascii_digit()) {
            // Pad so "0.5" reads as 50 hundredths rather than 5.
            let padded = format!("{fraction:0<2}");
            padded.parse().map_err(|_| invalid())?
        } else {
            return Err(invalid());
        };

        let magnitude = years
            .checked_mul(100)
            .and_then(|scaled| scaled.checked_add(hundredths))
            .ok_or_else(invalid)?;
        Ok(Self(sign * magnitude))
    }
}

impl Serialize for AgeYears {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AgeYears {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}
