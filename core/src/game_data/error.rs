//! Error types for zone registry construction

use thiserror::Error;

use super::{StageNumber, ZoneId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("zone {zone} is already registered")]
    DuplicateZone { zone: ZoneId },

    #[error("stage {stage} is claimed by zone {existing} and zone {zone}")]
    DuplicateStage {
        stage: StageNumber,
        existing: ZoneId,
        zone: ZoneId,
    },
}
