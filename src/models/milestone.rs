//! Developmental milestone model
//!
//! This module contains the `Milestone` model, the developmental areas and
//! milestone kinds of the reference instrument, and the per-milestone
//! percentile checks used during classification.

use crate::algorithm::classification::{self, MilestoneCategory};
use crate::models::types::AgeYears;
use serde::Serialize;
use std::fmt;

/// Developmental area a milestone belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Area {
    /// Personal-social development
    PersonalSocial,
    /// Fine motor development
    FineMotor,
    /// Language development
    Language,
    /// Gross motor development
    GrossMotor,
}

impl Area {
    /// All areas of the reference instrument, in catalog order
    pub const ALL: [Self; 4] = [
        Self::PersonalSocial,
        Self::FineMotor,
        Self::Language,
        Self::GrossMotor,
    ];

    /// Numeric id of this area in the reference table
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            Self::PersonalSocial => 1,
            Self::FineMotor => 2,
            Self::Language => 3,
            Self::GrossMotor => 4,
        }
    }

    /// Convert a numeric area id to an `Area`
    #[must_use]
    pub const fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Self::PersonalSocial),
            2 => Some(Self::FineMotor),
            3 => Some(Self::Language),
            4 => Some(Self::GrossMotor),
            _ => None,
        }
    }

    /// Label of this area in the reference material
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PersonalSocial => "Personal Social",
            Self::FineMotor => "Motor Fino",
            Self::Language => "Lenguaje",
            Self::GrossMotor => "Motor Grueso",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How a milestone is administered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MilestoneKind {
    /// Observed directly during the assessment
    Test,
    /// Asked of the caregiver
    Question,
    /// Demonstrated to the child, then observed
    DemonstratedTest,
}

impl MilestoneKind {
    /// Label of this kind in the reference material
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Test => "Prueba",
            Self::Question => "Pregunta",
            Self::DemonstratedTest => "Prueba Demostrada",
        }
    }
}

impl fmt::Display for MilestoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A developmental milestone with percentile-based age thresholds
///
/// P75 and P90 are the ages by which 75% and 90% of the reference population
/// achieve the milestone. The reference data guarantees `p75 <= p90`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    /// Numeric id in the reference table
    pub id: u32,
    /// Name of the milestone, in the original Spanish of the reference table
    pub name: &'static str,
    /// Developmental area
    pub area: Area,
    /// Age by which 75% of the reference population achieves the milestone
    pub p75: AgeYears,
    /// Age by which 90% of the reference population achieves the milestone
    pub p90: AgeYears,
    /// How the milestone is administered
    pub kind: MilestoneKind,
    /// Approval-range note carried from the reference table, if any
    pub approval_range: Option<&'static str>,
}

impl Milestone {
    /// Whether an age falls above the P90 threshold (category A)
    #[must_use]
    pub fn is_advanced_at(&self, age: AgeYears) -> bool {
        age > self.p90
    }

    /// Whether an age falls between P75 and P90, both ends inclusive
    /// (category B)
    #[must_use]
    pub fn is_above_average_at(&self, age: AgeYears) -> bool {
        self.p75 <= age && age <= self.p90
    }

    /// Classify an age against this milestone's thresholds
    #[must_use]
    pub const fn classify_at(&self, age: AgeYears) -> MilestoneCategory {
        classification::classify(age, self.p75, self.p90)
    }

    /// Whether this milestone is worth administering at the given age
    ///
    /// True when the acquisition band `[p75, p90]` intersects the window
    /// `[age - lag, age + lead]`.
    #[must_use]
    pub fn in_window(&self, age: AgeYears, lead: AgeYears, lag: AgeYears) -> bool {
        self.p75 <= age + lead && self.p90 >= age - lag
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}] P75: {} P90: {} ({})",
            self.id, self.name, self.area, self.p75, self.p90, self.kind
        )?;
        if let Some(range) = self.approval_range {
            write!(f, " R.Ap: {range}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// "Sonrisa social": P75 0.12, P90 0.16
    fn social_smile() -> Milestone {
        Milestone {
            id: 2,
            name: "Sonrisa social",
            area: Area::PersonalSocial,
            p75: AgeYears::from_hundredths(12),
            p90: AgeYears::from_hundredths(16),
            kind: MilestoneKind::Test,
            approval_range: None,
        }
    }

    #[test]
    fn test_area_ids_round_trip() {
        for area in Area::ALL {
            assert_eq!(Area::from_id(area.id()), Some(area));
        }
        assert_eq!(Area::from_id(0), None);
        assert_eq!(Area::from_id(5), None);
    }

    #[test]
    fn test_percentile_checks() {
        let milestone = social_smile();
        assert!(milestone.is_advanced_at(AgeYears::from_hundredths(17)));
        assert!(!milestone.is_advanced_at(AgeYears::from_hundredths(16)));
        assert!(milestone.is_above_average_at(AgeYears::from_hundredths(12)));
        assert!(milestone.is_above_average_at(AgeYears::from_hundredths(16)));
        assert!(!milestone.is_above_average_at(AgeYears::from_hundredths(11)));
        assert!(!milestone.is_above_average_at(AgeYears::from_hundredths(17)));
    }

    #[test]
    fn test_window_selection() {
        let milestone = social_smile();
        let lead = AgeYears::from_hundredths(25);
        let lag = AgeYears::from_hundredths(25);

        // Newborn: band starts within the lead window.
        assert!(milestone.in_window(AgeYears::ZERO, lead, lag));
        // Just past the band, still within the lag window.
        assert!(milestone.in_window(AgeYears::from_hundredths(40), lead, lag));
        // Far past the band.
        assert!(!milestone.in_window(AgeYears::from_hundredths(42), lead, lag));
        assert!(!milestone.in_window(AgeYears::from_years(3), lead, lag));
    }

    #[test]
    fn test_display() {
        let rendered = social_smile().to_string();
        assert_eq!(
            rendered,
            "#2 Sonrisa social [Personal Social] P75: 0.12 P90: 0.16 (Prueba)"
        );
    }
}
