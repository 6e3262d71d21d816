//! Milestone catalog
//!
//! An immutable, in-memory collection of the reference instrument's
//! developmental milestones, built once from the static table in [`data`]
//! and queryable by id, area, or applicability to an age.

mod data;

use crate::config::ScreeningConfig;
use crate::models::milestone::{Area, Milestone};
use crate::models::types::AgeYears;
use rustc_hash::FxHashMap;
use std::sync::{Arc, LazyLock};

/// Process-wide catalog instance, built on first use
static CATALOG: LazyLock<MilestoneCatalog> = LazyLock::new(MilestoneCatalog::new);

/// A read-only collection of milestones that can be efficiently queried
#[derive(Debug)]
pub struct MilestoneCatalog {
    /// Milestones in catalog order
    milestones: Vec<Arc<Milestone>>,
    /// Milestones indexed by id
    by_id: FxHashMap<u32, Arc<Milestone>>,
}

impl Default for MilestoneCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MilestoneCatalog {
    /// Build the catalog from the static reference table
    #[must_use]
    pub fn new() -> Self {
        let mut milestones = Vec::with_capacity(data::MILESTONE_TABLE.len());
        let mut by_id = FxHashMap::default();

        for &(id, name, area, p75, p90, kind, approval_range) in data::MILESTONE_TABLE {
            let milestone = Arc::new(Milestone {
                id,
                name,
                area,
                p75: AgeYears::from_hundredths(p75),
                p90: AgeYears::from_hundredths(p90),
                kind,
                approval_range: (!approval_range.is_empty()).then_some(approval_range),
            });

            debug_assert!(milestone.p75 <= milestone.p90, "P75 > P90 for id {id}");
            let previous = by_id.insert(id, milestone.clone());
            debug_assert!(previous.is_none(), "duplicate milestone id {id}");

            milestones.push(milestone);
        }

        log::info!("Built milestone catalog with {} entries", milestones.len());
        Self { milestones, by_id }
    }

    /// Get the shared process-wide catalog
    #[must_use]
    pub fn global() -> &'static Self {
        &CATALOG
    }

    /// Find a milestone by its id
    #[must_use]
    pub fn find_by_id(&self, id: u32) -> Option<Arc<Milestone>> {
        self.by_id.get(&id).cloned()
    }

    /// Find all milestones in a developmental area, in catalog order
    #[must_use]
    pub fn find_by_area(&self, area: Area) -> Vec<Arc<Milestone>> {
        self.filter(|milestone| milestone.area == area)
    }

    /// Milestones worth administering at the given age
    ///
    /// Selects milestones whose acquisition band intersects the window
    /// around the age defined by the configured lead and lag.
    #[must_use]
    pub fn applicable_to(&self, age: AgeYears, config: &ScreeningConfig) -> Vec<Arc<Milestone>> {
        self.filter(|milestone| {
            milestone.in_window(age, config.applicability_lead, config.applicability_lag)
        })
    }

    /// Filter milestones by a predicate, in catalog order
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Vec<Arc<Milestone>>
    where
        F: Fn(&Milestone) -> bool,
    {
        self.milestones
            .iter()
            .filter(|milestone| predicate(milestone))
            .cloned()
            .collect()
    }

    /// All milestones, in catalog order
    #[must_use]
    pub fn all(&self) -> &[Arc<Milestone>] {
        &self.milestones
    }

    /// Number of milestones in the catalog
    #[must_use]
    pub fn count(&self) -> usize {
        self.milestones.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_catalog_integrity() {
        let catalog = MilestoneCatalog::new();
        assert_eq!(catalog.count(), 79);

        let unique_ids = catalog.all().iter().map(|m| m.id).unique().count();
        assert_eq!(unique_ids, 79);

        for milestone in catalog.all() {
            assert!(
                milestone.p75 <= milestone.p90,
                "P75 > P90 for {milestone}"
            );
            assert!(!milestone.p75.is_negative());
        }
    }

    #[test]
    fn test_every_area_is_populated() {
        let catalog = MilestoneCatalog::global();
        for area in Area::ALL {
            assert!(
                !catalog.find_by_area(area).is_empty(),
                "no milestones for {area}"
            );
        }
        assert_eq!(catalog.find_by_area(Area::GrossMotor).len(), 23);
        assert_eq!(catalog.find_by_area(Area::PersonalSocial).len(), 18);
    }

    #[test]
    fn test_find_by_id() {
        let catalog = MilestoneCatalog::global();
        let first = catalog.find_by_id(1).unwrap();
        assert_eq!(first.name, "Comunicación con el observador");
        assert_eq!(first.area, Area::PersonalSocial);
        assert_eq!(first.p75, AgeYears::from_hundredths(12));
        assert_eq!(first.p90, AgeYears::from_hundredths(27));
        assert!(catalog.find_by_id(10_000).is_none());
    }

    #[test]
    fn test_applicable_to_selects_a_window() {
        let catalog = MilestoneCatalog::global();
        let config = ScreeningConfig::default();
        let age = AgeYears::from_hundredths(147);

        let applicable = catalog.applicable_to(age, &config);
        assert!(!applicable.is_empty());
        assert!(applicable.len() < catalog.count());
        for milestone in &applicable {
            assert!(milestone.in_window(
                age,
                config.applicability_lead,
                config.applicability_lag
            ));
        }
    }
}
