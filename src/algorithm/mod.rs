//! Algorithm implementations for milestone screening
//!
//! This module contains the age calculator with prematurity correction, the
//! percentile-band classifier, and the assessment workflow that ties them
//! together with the milestone catalog.

pub mod age;
pub mod assessment;
pub mod classification;

pub use age::{chronological_age, corrected_age};
pub use assessment::{Assessment, AssessmentSummary, MilestoneResult, run_assessment};
pub use classification::{MilestoneCategory, classify};
