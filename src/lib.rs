//! A Rust library for child developmental milestone screening, with
//! corrected-age calculation for premature birth and percentile-based
//! classification against a static milestone catalog.

pub mod algorithm;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::ScreeningConfig;
pub use error::{Result, ScreeningError};
pub use models::{AgeYears, Area, ChildProfile, Milestone, MilestoneKind};

// Catalog
pub use catalog::MilestoneCatalog;

// Age calculation and classification
pub use algorithm::{MilestoneCategory, chronological_age, classify, corrected_age};

// Assessment workflow
pub use algorithm::{Assessment, AssessmentSummary, MilestoneResult, run_assessment};
