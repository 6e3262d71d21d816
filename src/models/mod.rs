//! Data models for milestone screening
//!
//! This module contains the child profile, the milestone model with its
//! developmental areas and kinds, and the fixed-precision age type shared by
//! all of them.

pub mod child;
pub mod milestone;
pub mod types;

pub use child::ChildProfile;
pub use milestone::{Area, Milestone, MilestoneKind};
pub use types::AgeYears;
