//! Child profile model
//!
//! This module contains the `ChildProfile` model, which carries the dates and
//! gestational age needed to compute chronological and corrected ages for a
//! developmental screening.

use crate::algorithm::age;
use crate::config::{self, ScreeningConfig};
use crate::error::{Result, ScreeningError};
use crate::models::types::AgeYears;
use crate::utils::logging::log_atypical_gestation;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A child undergoing developmental screening
///
/// Immutable once constructed; construction validates that the assessment
/// date does not precede the birth date, so age calculations can never
/// produce a negative result. Deserialization goes through the same
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawChildProfile")]
pub struct ChildProfile {
    /// The child's date of birth
    birth_date: NaiveDate,
    /// Date of the screening assessment
    assessment_date: NaiveDate,
    /// Gestational age at birth in completed weeks
    gestational_age_weeks: u32,
}

/// Unvalidated mirror of [`ChildProfile`] used during deserialization
#[derive(Deserialize)]
struct RawChildProfile {
    birth_date: NaiveDate,
    assessment_date: NaiveDate,
    gestational_age_weeks: u32,
}

impl TryFrom<RawChildProfile> for ChildProfile {
    type Error = ScreeningError;

    fn try_from(raw: RawChildProfile) -> Result<Self> {
        Self::new(
            raw.birth_date,
            Some(raw.assessment_date),
            Some(raw.gestational_age_weeks),
        )
    }
}

impl ChildProfile {
    /// Create a new profile
    ///
    /// The assessment date defaults to today and the gestational age to a
    /// full-term 40 weeks when unspecified. Returns
    /// [`ScreeningError::InvalidDateOrder`] if the assessment date precedes
    /// the birth date.
    pub fn new(
        birth_date: NaiveDate,
        assessment_date: Option<NaiveDate>,
        gestational_age_weeks: Option<u32>,
    ) -> Result<Self> {
        let assessment_date = assessment_date.unwrap_or_else(|| Local::now().date_naive());
        if assessment_date < birth_date {
            return Err(ScreeningError::InvalidDateOrder {
                birth: birth_date,
                assessment: assessment_date,
            });
        }

        let gestational_age_weeks = gestational_age_weeks.unwrap_or(config::REFERENCE_TERM_WEEKS);
        if !config::TYPICAL_GESTATIONAL_RANGE.contains(&gestational_age_weeks) {
            log_atypical_gestation(gestational_age_weeks);
        }

        Ok(Self {
            birth_date,
            assessment_date,
            gestational_age_weeks,
        })
    }

    /// The child's date of birth
    #[must_use]
    pub const fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Date of the screening assessment
    #[must_use]
    pub const fn assessment_date(&self) -> NaiveDate {
        self.assessment_date
    }

    /// Gestational age at birth in completed weeks
    #[must_use]
    pub const fn gestational_age_weeks(&self) -> u32 {
        self.gestational_age_weeks
    }

    /// Whether the child was born preterm (before 37 completed weeks)
    #[must_use]
    pub const fn is_preterm(&self) -> bool {
        self.gestational_age_weeks < config::FULL_TERM_THRESHOLD_WEEKS
    }

    /// Chronological age at the assessment date in decimal years
    #[must_use]
    pub fn chronological_age(&self) -> AgeYears {
        age::chronological_age(self)
    }

    /// Age corrected for prematurity, under the default configuration
    ///
    /// Equals the chronological age unless the child is under two years old
    /// and was born before 37 weeks.
    #[must_use]
    pub fn corrected_age(&self) -> AgeYears {
        age::corrected_age(self, &ScreeningConfig::default())
    }
}

impl fmt::Display for ChildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chronological = self.chronological_age();
        let corrected = self.corrected_age();
        write!(f, "Age: {chronological} years")?;
        if corrected != chronological {
            write!(f, ", corrected age: {corrected} years")?;
        }
        Ok(())
    }
}
