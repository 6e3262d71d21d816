//! Logging utilities
//!
//! This module provides standardized logging functions for screening
//! operations.

use crate::models::child::ChildProfile;

/// Log the start of an assessment with consistent format
pub fn log_assessment_start(profile: &ChildProfile) {
    log::info!(
        "Assessing child born {} (gestational age {} weeks) as of {}",
        profile.birth_date(),
        profile.gestational_age_weeks(),
        profile.assessment_date()
    );
}

/// Log the completion of an assessment with consistent format
///
/// # Arguments
/// * `evaluated` - Number of milestones evaluated
/// * `elapsed` - Optional elapsed time
pub fn log_assessment_complete(evaluated: usize, elapsed: Option<std::time::Duration>) {
    if let Some(duration) = elapsed {
        log::info!("Evaluated {evaluated} milestones in {duration:?}");
    } else {
        log::info!("Evaluated {evaluated} milestones");
    }
}

/// Log a gestational age outside the typical range
pub fn log_atypical_gestation(weeks: u32) {
    log::warn!("Gestational age of {weeks} weeks is outside the typical 20-42 week range");
}
