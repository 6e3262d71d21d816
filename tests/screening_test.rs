//! Integration tests for the full screening workflow

use chrono::NaiveDate;
use milestone_screener::{
    AgeYears, Area, ChildProfile, MilestoneCatalog, MilestoneCategory, ScreeningConfig,
    ScreeningError, classify, run_assessment,
};

/// Term-birth reference case: 3.32 years, no correction
fn term_child() -> ChildProfile {
    ChildProfile::new(
        NaiveDate::from_ymd_opt(2016, 1, 18).unwrap(),
        Some(NaiveDate::from_ymd_opt(2019, 5, 16).unwrap()),
        Some(38),
    )
    .unwrap()
}

/// Preterm reference case: 1.60 years chronological, 1.47 corrected
fn preterm_child() -> ChildProfile {
    ChildProfile::new(
        NaiveDate::from_ymd_opt(2017, 10, 15).unwrap(),
        Some(NaiveDate::from_ymd_opt(2019, 5, 22).unwrap()),
        Some(33),
    )
    .unwrap()
}

#[test]
fn test_term_child_ages() {
    let child = term_child();
    assert_eq!(child.chronological_age(), AgeYears::from_hundredths(332));
    assert_eq!(child.corrected_age(), child.chronological_age());
}

#[test]
fn test_preterm_child_ages() {
    let child = preterm_child();
    assert_eq!(child.chronological_age(), AgeYears::from_hundredths(160));
    assert_eq!(child.corrected_age(), AgeYears::from_hundredths(147));
}

#[test]
fn test_assessment_before_birth_is_rejected() {
    let result = ChildProfile::new(
        NaiveDate::from_ymd_opt(2019, 5, 22).unwrap(),
        Some(NaiveDate::from_ymd_opt(2017, 10, 15).unwrap()),
        None,
    );
    assert!(matches!(
        result,
        Err(ScreeningError::InvalidDateOrder { .. })
    ));
}

#[test]
fn test_preterm_assessment_covers_all_areas() {
    let assessment = run_assessment(
        &preterm_child(),
        MilestoneCatalog::global(),
        &ScreeningConfig::default(),
    );

    assert_eq!(assessment.age_used, AgeYears::from_hundredths(147));
    assert_eq!(assessment.results.len(), 16);
    assert!(assessment.is_fully_covered());
    assert_eq!(
        assessment.areas_covered,
        vec![
            Area::PersonalSocial,
            Area::FineMotor,
            Area::Language,
            Area::GrossMotor
        ]
    );

    let summary = assessment.summary();
    assert_eq!(summary.advanced, 5);
    assert_eq!(summary.above_average, 9);
    assert_eq!(summary.normal, 2);
}

#[test]
fn test_term_assessment_summary() {
    let assessment = run_assessment(
        &term_child(),
        MilestoneCatalog::global(),
        &ScreeningConfig::default(),
    );

    assert_eq!(assessment.age_used, AgeYears::from_hundredths(332));
    let summary = assessment.summary();
    assert_eq!(summary.milestones_evaluated, 9);
    assert_eq!(summary.advanced, 3);
    assert_eq!(summary.above_average, 5);
    assert_eq!(summary.normal, 1);
    assert!(assessment.is_fully_covered());
}

#[test]
fn test_classification_against_catalog_entry() {
    // "Da un objeto": P75 1.08, P90 1.46.
    let milestone = MilestoneCatalog::global().find_by_id(7).unwrap();
    assert_eq!(milestone.p75, AgeYears::from_hundredths(108));
    assert_eq!(milestone.p90, AgeYears::from_hundredths(146));

    assert_eq!(
        milestone.classify_at(AgeYears::from_hundredths(147)),
        MilestoneCategory::Advanced
    );
    assert_eq!(
        milestone.classify_at(AgeYears::from_hundredths(146)),
        MilestoneCategory::AboveAverage
    );
    assert_eq!(
        milestone.classify_at(AgeYears::from_hundredths(108)),
        MilestoneCategory::AboveAverage
    );
    assert_eq!(
        milestone.classify_at(AgeYears::from_hundredths(107)),
        MilestoneCategory::Normal
    );
}

#[test]
fn test_classify_matches_milestone_checks() {
    let catalog = MilestoneCatalog::global();
    let age = AgeYears::from_hundredths(100);
    for milestone in catalog.all() {
        let category = classify(age, milestone.p75, milestone.p90);
        assert_eq!(
            category == MilestoneCategory::Advanced,
            milestone.is_advanced_at(age)
        );
        assert_eq!(
            category == MilestoneCategory::AboveAverage,
            milestone.is_above_average_at(age)
        );
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let child = preterm_child();
    let catalog = MilestoneCatalog::global();
    let config = ScreeningConfig::default();

    let first = run_assessment(&child, catalog, &config);
    let second = run_assessment(&child, catalog, &config);

    assert_eq!(first.age_used, second.age_used);
    assert_eq!(first.results.len(), second.results.len());
    for (a, b) in first.results.iter().zip(&second.results) {
        assert_eq!(a.milestone.id, b.milestone.id);
        assert_eq!(a.category, b.category);
    }
}

#[test]
fn test_summary_serializes_to_json() {
    let assessment = run_assessment(
        &preterm_child(),
        MilestoneCatalog::global(),
        &ScreeningConfig::default(),
    );
    let json = serde_json::to_value(assessment.summary()).unwrap();
    assert_eq!(json["age_used"], "1.47");
    assert_eq!(json["chronological_age"], "1.60");
    assert_eq!(json["milestones_evaluated"], 16);
}
