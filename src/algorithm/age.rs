//! Age calculation with prematurity correction
//!
//! Chronological age is the day delta between assessment and birth divided by
//! 365.25; corrected age subtracts a prematurity correction for children
//! under two years who were born before 37 completed weeks. All arithmetic is
//! exact fixed-point, see [`AgeYears`].

use crate::config::ScreeningConfig;
use crate::models::child::ChildProfile;
use crate::models::types::AgeYears;

/// Chronological age of the child at the assessment date, in decimal years
///
/// The profile guarantees a non-negative day delta.
#[must_use]
pub fn chronological_age(profile: &ChildProfile) -> AgeYears {
    let days = (profile.assessment_date() - profile.birth_date()).num_days();
    AgeYears::from_days(days)
}

/// Age corrected for prematurity, in decimal years
///
/// The correction applies only while the chronological age is below the
/// configured cutoff (two years) and the gestational age is below the
/// full-term threshold (37 weeks). It subtracts the weeks of prematurity
/// relative to a 40-week term, converted to years.
#[must_use]
pub fn corrected_age(profile: &ChildProfile, config: &ScreeningConfig) -> AgeYears {
    let chronological = chronological_age(profile);

    if chronological >= config.correction_cutoff
        || profile.gestational_age_weeks() >= config.full_term_threshold_weeks
    {
        return chronological;
    }

    let weeks_premature = config
        .reference_term_weeks
        .saturating_sub(profile.gestational_age_weeks());
    chronological - prematurity_correction(weeks_premature)
}

/// Correction in years for a given number of weeks of prematurity
#[must_use]
pub fn prematurity_correction(weeks_premature: u32) -> AgeYears {
    AgeYears::from_weeks(i64::from(weeks_premature))
}
