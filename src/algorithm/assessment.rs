//! Assessment workflow
//!
//! Runs a full screening: computes the corrected age for a child, selects
//! the milestones applicable at that age, classifies each one against its
//! percentile bands, and summarizes the outcome per category and area.

use crate::algorithm::age;
use crate::algorithm::classification::MilestoneCategory;
use crate::catalog::MilestoneCatalog;
use crate::config::ScreeningConfig;
use crate::models::child::ChildProfile;
use crate::models::milestone::{Area, Milestone};
use crate::models::types::AgeYears;
use crate::utils::logging::{log_assessment_complete, log_assessment_start};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Classification of one milestone at the child's age
#[derive(Debug, Clone)]
pub struct MilestoneResult {
    /// The milestone that was evaluated
    pub milestone: Arc<Milestone>,
    /// The category the child's age falls into for this milestone
    pub category: MilestoneCategory,
}

impl fmt::Display for MilestoneResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}]: {}",
            self.milestone.id, self.milestone.name, self.milestone.area, self.category
        )
    }
}

/// Outcome of a full screening assessment
#[derive(Debug)]
pub struct Assessment {
    /// Chronological age at the assessment date
    pub chronological_age: AgeYears,
    /// Age the milestones were classified against (corrected when applicable)
    pub age_used: AgeYears,
    /// Per-milestone classifications, in catalog order
    pub results: Vec<MilestoneResult>,
    /// Developmental areas covered by the evaluated milestones, in catalog order
    pub areas_covered: Vec<Area>,
}

/// Summary statistics of an assessment, suitable for serialization
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    /// Chronological age at the assessment date
    pub chronological_age: AgeYears,
    /// Age the milestones were classified against
    pub age_used: AgeYears,
    /// Number of milestones evaluated
    pub milestones_evaluated: usize,
    /// Milestones where the age is above P90
    pub advanced: usize,
    /// Milestones where the age is between P75 and P90
    pub above_average: usize,
    /// Milestones where the age is below P75
    pub normal: usize,
    /// Developmental areas covered
    pub areas_covered: Vec<Area>,
}

impl Assessment {
    /// Number of milestones in the given category
    #[must_use]
    pub fn count_in(&self, category: MilestoneCategory) -> usize {
        self.results
            .iter()
            .filter(|result| result.category == category)
            .count()
    }

    /// Whether all four developmental areas were covered
    #[must_use]
    pub fn is_fully_covered(&self) -> bool {
        self.areas_covered.len() == Area::ALL.len()
    }

    /// Results grouped by developmental area, in catalog order
    #[must_use]
    pub fn results_by_area(&self) -> Vec<(Area, Vec<&MilestoneResult>)> {
        self.results
            .iter()
            .into_group_map_by(|result| result.milestone.area)
            .into_iter()
            .sorted_by_key(|(area, _)| area.id())
            .collect()
    }

    /// Summary statistics for this assessment
    #[must_use]
    pub fn summary(&self) -> AssessmentSummary {
        AssessmentSummary {
            chronological_age: self.chronological_age,
            age_used: self.age_used,
            milestones_evaluated: self.results.len(),
            advanced: self.count_in(MilestoneCategory::Advanced),
            above_average: self.count_in(MilestoneCategory::AboveAverage),
            normal: self.count_in(MilestoneCategory::Normal),
            areas_covered: self.areas_covered.clone(),
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chronological age: {} years", self.chronological_age)?;
        if self.age_used != self.chronological_age {
            writeln!(f, "Corrected age: {} years", self.age_used)?;
        }
        writeln!(f, "Milestones evaluated: {}", self.results.len())?;
        for (area, results) in self.results_by_area() {
            writeln!(f, "{area}:")?;
            for result in results {
                writeln!(f, "  {result}")?;
            }
        }
        Ok(())
    }
}

/// Run a full screening assessment for a child
///
/// Classifies every applicable milestone against the child's corrected age
/// (which equals the chronological age when no correction applies).
#[must_use]
pub fn run_assessment(
    profile: &ChildProfile,
    catalog: &MilestoneCatalog,
    config: &ScreeningConfig,
) -> Assessment {
    let start = Instant::now();
    log_assessment_start(profile);

    let chronological_age = age::chronological_age(profile);
    let age_used = age::corrected_age(profile, config);

    let results: Vec<MilestoneResult> = catalog
        .applicable_to(age_used, config)
        .into_iter()
        .map(|milestone| {
            let category = milestone.classify_at(age_used);
            MilestoneResult {
                milestone,
                category,
            }
        })
        .collect();

    let areas_covered: Vec<Area> = results
        .iter()
        .map(|result| result.milestone.area)
        .unique()
        .sorted_by_key(|area| area.id())
        .collect();

    log_assessment_complete(results.len(), Some(start.elapsed()));

    Assessment {
        chronological_age,
        age_used,
        results,
        areas_covered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Preterm child: 1.60 years chronological, 1.47 corrected
    fn preterm_profile() -> ChildProfile {
        ChildProfile::new(
            NaiveDate::from_ymd_opt(2017, 10, 15).unwrap(),
            Some(NaiveDate::from_ymd_opt(2019, 5, 22).unwrap()),
            Some(33),
        )
        .unwrap()
    }

    #[test]
    fn test_run_assessment_uses_corrected_age() {
        let assessment = run_assessment(
            &preterm_profile(),
            MilestoneCatalog::global(),
            &ScreeningConfig::default(),
        );
        assert_eq!(
            assessment.chronological_age,
            AgeYears::from_hundredths(160)
        );
        assert_eq!(assessment.age_used, AgeYears::from_hundredths(147));
        assert!(!assessment.results.is_empty());
    }

    #[test]
    fn test_results_match_direct_classification() {
        let assessment = run_assessment(
            &preterm_profile(),
            MilestoneCatalog::global(),
            &ScreeningConfig::default(),
        );
        for result in &assessment.results {
            assert_eq!(
                result.category,
                result.milestone.classify_at(assessment.age_used)
            );
        }
    }

    #[test]
    fn test_summary_counts_add_up() {
        let assessment = run_assessment(
            &preterm_profile(),
            MilestoneCatalog::global(),
            &ScreeningConfig::default(),
        );
        let summary = assessment.summary();
        assert_eq!(
            summary.advanced + summary.above_average + summary.normal,
            summary.milestones_evaluated
        );
        assert_eq!(summary.milestones_evaluated, assessment.results.len());
        assert_eq!(summary.areas_covered, assessment.areas_covered);
    }

    #[test]
    fn test_grouping_preserves_all_results() {
        let assessment = run_assessment(
            &preterm_profile(),
            MilestoneCatalog::global(),
            &ScreeningConfig::default(),
        );
        let grouped: usize = assessment
            .results_by_area()
            .iter()
            .map(|(_, results)| results.len())
            .sum();
        assert_eq!(grouped, assessment.results.len());
    }
}
