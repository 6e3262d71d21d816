//! Configuration for milestone screening.

use crate::models::types::AgeYears;
use std::fmt;
use std::ops::RangeInclusive;

/// Gestational age below which a birth counts as preterm, in completed weeks
pub const FULL_TERM_THRESHOLD_WEEKS: u32 = 37;

/// Reference gestational age of a term birth, in completed weeks
pub const REFERENCE_TERM_WEEKS: u32 = 40;

/// Typical range of gestational ages seen in practice
///
/// Values outside this range are accepted but logged as warnings.
pub const TYPICAL_GESTATIONAL_RANGE: RangeInclusive<u32> = 20..=42;

/// Configuration for the screening workflow
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    /// Gestational age below which prematurity correction applies (weeks)
    pub full_term_threshold_weeks: u32,
    /// Gestational age prematurity is measured against (weeks)
    pub reference_term_weeks: u32,
    /// Chronological age at or above which no correction is applied
    pub correction_cutoff: AgeYears,
    /// How far ahead of the child's age a milestone band may start and still
    /// be selected for evaluation
    pub applicability_lead: AgeYears,
    /// How far behind the child's age a milestone band may end and still be
    /// selected for evaluation
    pub applicability_lag: AgeYears,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            full_term_threshold_weeks: FULL_TERM_THRESHOLD_WEEKS,
            reference_term_weeks: REFERENCE_TERM_WEEKS,
            correction_cutoff: AgeYears::from_years(2),
            applicability_lead: AgeYears::from_hundredths(25),
            applicability_lag: AgeYears::from_hundredths(25),
        }
    }
}

impl fmt::Display for ScreeningConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Screening Configuration:")?;
        writeln!(
            f,
            "  Full Term Threshold: {} weeks",
            self.full_term_threshold_weeks
        )?;
        writeln!(f, "  Reference Term: {} weeks", self.reference_term_weeks)?;
        writeln!(f, "  Correction Cutoff: {} years", self.correction_cutoff)?;
        writeln!(
            f,
            "  Applicability Window: -{} / +{} years",
            self.applicability_lag, self.applicability_lead
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScreeningConfig::default();
        assert_eq!(config.full_term_threshold_weeks, 37);
        assert_eq!(config.reference_term_weeks, 40);
        assert_eq!(config.correction_cutoff, AgeYears::from_years(2));
        assert_eq!(config.applicability_lead, AgeYears::from_hundredths(25));
        assert_eq!(config.applicability_lag, AgeYears::from_hundredths(25));
    }

    #[test]
    fn test_display() {
        let rendered = ScreeningConfig::default().to_string();
        assert!(rendered.contains("37 weeks"));
        assert!(rendered.contains("2.00 years"));
    }
}
