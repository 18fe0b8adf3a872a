//! Zone registry
//!
//! Immutable lookup from map ID to display name and hosted stages, plus the
//! inverse stage → map index. Built once and shared behind an `Arc`.

use hashbrown::HashMap;
use std::sync::{Arc, LazyLock};

use super::error::RegistryError;
use super::fractals::FRACTAL_ZONES;
use super::{StageNumber, ZoneId};

static FRACTAL_REGISTRY: LazyLock<Arc<ZoneRegistry>> = LazyLock::new(|| {
    let mut registry = ZoneRegistry::new();
    for (zone, info) in FRACTAL_ZONES.entries() {
        if let Err(e) = registry.insert(*zone, info.name, info.stages) {
            tracing::error!(error = %e, zone = *zone, name = info.name, "Fractal zone entry rejected");
        }
    }
    Arc::new(registry)
});

#[derive(Debug, Clone, Default)]
pub struct ZoneRegistry {
    names: HashMap<ZoneId, String>,
    stages: HashMap<ZoneId, Vec<StageNumber>>,
    stage_zone: HashMap<StageNumber, ZoneId>,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The Fractals of the Mists registry (scales 1-100 plus CM 99/100)
    pub fn fractals() -> Arc<ZoneRegistry> {
        Arc::clone(&FRACTAL_REGISTRY)
    }

    /// Build a registry from `(zone, name, stages)` entries.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (ZoneId, &'a str, &'a [StageNumber])>,
    {
        let mut registry = Self::new();
        for (zone, name, stages) in entries {
            registry.insert(zone, name, stages)?;
        }
        Ok(registry)
    }

    /// Register a zone. Stage numbers must not already belong to another zone.
    pub fn insert(
        &mut self,
        zone: ZoneId,
        name: &str,
        stages: &[StageNumber],
    ) -> Result<(), RegistryError> {
        if self.names.contains_key(&zone) {
            return Err(RegistryError::DuplicateZone { zone });
        }
        for stage in stages {
            if let Some(&existing) = self.stage_zone.get(stage) {
                return Err(RegistryError::DuplicateStage {
                    stage: *stage,
                    existing,
                    zone,
                });
            }
        }

        let mut sorted = stages.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        for stage in &sorted {
            self.stage_zone.insert(*stage, zone);
        }
        self.names.insert(zone, name.to_string());
        self.stages.insert(zone, sorted);
        Ok(())
    }

    /// Display name for a zone, `None` if the zone is not tracked
    pub fn name_of(&self, zone: ZoneId) -> Option<&str> {
        self.names.get(&zone).map(String::as_str)
    }

    /// Stages hosted by a zone in ascending order (empty if untracked)
    pub fn stages_of(&self, zone: ZoneId) -> &[StageNumber] {
        self.stages.get(&zone).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn zone_of_stage(&self, stage: StageNumber) -> Option<ZoneId> {
        self.stage_zone.get(&stage).copied()
    }

    pub fn is_tracked(&self, zone: ZoneId) -> bool {
        self.names.contains_key(&zone)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn stage_count(&self) -> usize {
        self.stage_zone.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_data::STAGE_COUNT;

    #[test]
    fn test_fractal_registry_covers_every_stage() {
        let registry = ZoneRegistry::fractals();
        assert_eq!(registry.stage_count(), STAGE_COUNT);
        for stage in 1..=STAGE_COUNT as StageNumber {
            assert!(
                registry.zone_of_stage(stage).is_some(),
                "stage {stage} has no zone"
            );
        }
        assert_eq!(registry.zone_of_stage(0), None);
        assert_eq!(registry.zone_of_stage(103), None);
    }

    #[test]
    fn test_fractal_table_has_distinct_stages() {
        let entries = FRACTAL_ZONES
            .entries()
            .map(|(zone, info)| (*zone, info.name, info.stages));
        let registry = ZoneRegistry::from_entries(entries).expect("fractal table is valid");
        assert_eq!(registry.len(), 18);
    }

    #[test]
    fn test_fractal_lookups() {
        let registry = ZoneRegistry::fractals();
        assert_eq!(registry.name_of(956), Some("Aetherblade"));
        assert_eq!(registry.stages_of(956), &[14, 46, 65, 71, 96]);
        assert_eq!(registry.zone_of_stage(1), Some(954));
        assert_eq!(registry.zone_of_stage(101), Some(1177));
        assert_eq!(registry.zone_of_stage(102), Some(1205));
        assert!(registry.is_tracked(1267));
    }

    #[test]
    fn test_untracked_zone() {
        let registry = ZoneRegistry::fractals();
        assert_eq!(registry.name_of(999), None);
        assert!(registry.stages_of(999).is_empty());
        assert!(!registry.is_tracked(999));
    }

    #[test]
    fn test_insert_rejects_shared_stage() {
        let mut registry = ZoneRegistry::new();
        registry.insert(1, "First", &[1, 3]).unwrap();
        let err = registry.insert(2, "Second", &[2, 3]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateStage {
                stage: 3,
                existing: 1,
                zone: 2
            }
        );
        // Rejected zone leaves no partial state behind
        assert!(!registry.is_tracked(2));
        assert_eq!(registry.zone_of_stage(2), None);
    }

    #[test]
    fn test_insert_rejects_duplicate_zone() {
        let mut registry = ZoneRegistry::new();
        registry.insert(1, "First", &[1]).unwrap();
        assert_eq!(
            registry.insert(1, "Again", &[2]),
            Err(RegistryError::DuplicateZone { zone: 1 })
        );
    }

    #[test]
    fn test_insert_sorts_stages() {
        let mut registry = ZoneRegistry::new();
        registry.insert(7, "Zone", &[9, 2, 5]).unwrap();
        assert_eq!(registry.stages_of(7), &[2, 5, 9]);
    }

    #[test]
    fn test_shared_registry_matches_checked_build() {
        let entries = FRACTAL_ZONES
            .entries()
            .map(|(zone, info)| (*zone, info.name, info.stages));
        let checked = ZoneRegistry::from_entries(entries).unwrap();
        let shared = ZoneRegistry::fractals();

        assert_eq!(shared.len(), checked.len());
        assert_eq!(shared.stage_count(), checked.stage_count());
        for stage in 1..=STAGE_COUNT as StageNumber {
            assert_eq!(shared.zone_of_stage(stage), checked.zone_of_stage(stage));
        }
    }
}
