use anyhow::Context;
use chrono::NaiveDate;
use log::info;
use milestone_screener::{ChildProfile, MilestoneCatalog, ScreeningConfig, run_assessment};

/// Example case from the reference material, used when no dates are given.
const EXAMPLE_BIRTH: (i32, u32, u32) = (2016, 1, 18);
const EXAMPLE_ASSESSMENT: (i32, u32, u32) = (2019, 5, 16);
const EXAMPLE_GESTATIONAL_WEEKS: u32 = 38;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut json_output = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            "--help" | "-h" => {
                eprintln!("Usage: milestone-screener [--json] [BIRTH [ASSESSMENT [WEEKS]]]");
                eprintln!("Dates are ISO (YYYY-MM-DD); WEEKS is the gestational age.");
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }

    let birth_date = match positional.first() {
        Some(raw) => raw
            .parse::<NaiveDate>()
            .with_context(|| format!("invalid birth date: {raw}"))?,
        None => NaiveDate::from_ymd_opt(EXAMPLE_BIRTH.0, EXAMPLE_BIRTH.1, EXAMPLE_BIRTH.2).unwrap(),
    };
    let assessment_date = match positional.get(1) {
        Some(raw) => Some(
            raw.parse::<NaiveDate>()
                .with_context(|| format!("invalid assessment date: {raw}"))?,
        ),
        None if positional.is_empty() => Some(
            NaiveDate::from_ymd_opt(
                EXAMPLE_ASSESSMENT.0,
                EXAMPLE_ASSESSMENT.1,
                EXAMPLE_ASSESSMENT.2,
            )
            .unwrap(),
        ),
        None => None,
    };
    let gestational_weeks = match positional.get(2) {
        Some(raw) => Some(
            raw.parse::<u32>()
                .with_context(|| format!("invalid gestational age: {raw}"))?,
        ),
        None if positional.is_empty() => Some(EXAMPLE_GESTATIONAL_WEEKS),
        None => None,
    };

    let profile = ChildProfile::new(birth_date, assessment_date, gestational_weeks)?;
    let config = ScreeningConfig::default();
    let catalog = MilestoneCatalog::global();

    info!("Birth date: {}", profile.birth_date());
    info!("Assessment date: {}", profile.assessment_date());
    info!(
        "Gestational age: {} weeks",
        profile.gestational_age_weeks()
    );

    let assessment = run_assessment(&profile, catalog, &config);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&assessment.summary())?);
    } else {
        print!("{assessment}");
        let summary = assessment.summary();
        println!(
            "Summary: {} advanced, {} above average, {} normal across {} areas",
            summary.advanced,
            summary.above_average,
            summary.normal,
            summary.areas_covered.len()
        );
    }

    Ok(())
}
