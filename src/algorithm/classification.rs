//! Percentile-band classification
//!
//! Classifies an age against a milestone's P75 and P90 thresholds. The three
//! categories are mutually exclusive given `p75 <= p90`, and classification
//! is a pure function.

use crate::models::types::AgeYears;
use serde::Serialize;
use std::fmt;

/// Classification of an age against a milestone's percentile bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MilestoneCategory {
    /// Below P75: the milestone is expected later
    Normal,
    /// Between P75 and P90, both ends inclusive (category B)
    AboveAverage,
    /// Above P90 (category A)
    Advanced,
}

impl MilestoneCategory {
    /// Descriptive name for this category
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::AboveAverage => "Between P75 and P90 (above-average development)",
            Self::Advanced => "Above P90 (advanced development)",
        }
    }
}

impl fmt::Display for MilestoneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Classify an age against a (P75, P90) threshold pair
///
/// Returns [`MilestoneCategory::Advanced`] when `age > p90`,
/// [`MilestoneCategory::AboveAverage`] when `p75 <= age <= p90`, and
/// [`MilestoneCategory::Normal`] otherwise.
#[must_use]
pub const fn classify(age: AgeYears, p75: AgeYears, p90: AgeYears) -> MilestoneCategory {
    if age.hundredths() > p90.hundredths() {
        MilestoneCategory::Advanced
    } else if age.hundredths() >= p75.hundredths() {
        MilestoneCategory::AboveAverage
    } else {
        MilestoneCategory::Normal
    }
}
