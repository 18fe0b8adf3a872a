use serde::{Deserialize, Serialize};

use super::StorageError;
use crate::game_data::{STAGE_COUNT, StageNumber};
use crate::timers::Timestamp;

/// Start/end of a single marathon stage, in whole epoch seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRecord {
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

impl StageRecord {
    pub fn is_completed(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn is_in_progress(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    /// Elapsed seconds for a completed stage
    pub fn duration_secs(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}

/// Persisted marathon state.
///
/// ```json
/// { "start": 1520000000, "end": null, "levels": [{"start": 1520000100, "end": null}, ...] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarathonDocument {
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
    pub levels: Vec<StageRecord>,
}

impl Default for MarathonDocument {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            levels: vec![StageRecord::default(); STAGE_COUNT],
        }
    }
}

impl MarathonDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject documents that do not hold exactly one record per stage.
    pub fn validate(&self) -> Result<(), StorageError> {
        if self.levels.len() != STAGE_COUNT {
            return Err(StorageError::StageCount {
                expected: STAGE_COUNT,
                found: self.levels.len(),
            });
        }
        Ok(())
    }

    /// Highest stage number with an end time, 0 if none
    pub fn last_completed_stage(&self) -> StageNumber {
        self.levels
            .iter()
            .rposition(|level| level.end.is_some())
            .map(|idx| idx as StageNumber + 1)
            .unwrap_or(0)
    }

    pub fn stage(&self, stage: StageNumber) -> Option<&StageRecord> {
        let idx = (stage as usize).checked_sub(1)?;
        self.levels.get(idx)
    }

    pub fn stage_mut(&mut self, stage: StageNumber) -> Option<&mut StageRecord> {
        let idx = (stage as usize).checked_sub(1)?;
        self.levels.get_mut(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_empty() {
        let doc = MarathonDocument::new();
        assert_eq!(doc.levels.len(), STAGE_COUNT);
        assert!(doc.levels.iter().all(|l| *l == StageRecord::default()));
        assert_eq!(doc.last_completed_stage(), 0);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_last_completed_stage_uses_highest_end() {
        let mut doc = MarathonDocument::new();
        doc.levels[0] = StageRecord { start: Some(10), end: Some(20) };
        doc.levels[4] = StageRecord { start: None, end: Some(50) };
        doc.levels[5] = StageRecord { start: Some(60), end: None };
        assert_eq!(doc.last_completed_stage(), 5);
    }

    #[test]
    fn test_stage_zero_is_not_addressable() {
        let mut doc = MarathonDocument::new();
        assert!(doc.stage(0).is_none());
        assert!(doc.stage_mut(0).is_none());
        assert!(doc.stage(102).is_some());
        assert!(doc.stage(103).is_none());
    }

    #[test]
    fn test_validate_rejects_short_document() {
        let mut doc = MarathonDocument::new();
        doc.levels.truncate(100);
        match doc.validate() {
            Err(StorageError::StageCount { expected, found }) => {
                assert_eq!(expected, STAGE_COUNT);
                assert_eq!(found, 100);
            }
            other => panic!("expected StageCount error, got {other:?}"),
        }
    }

    #[test]
    fn test_parses_null_fields() {
        let levels: Vec<String> = (0..STAGE_COUNT)
            .map(|i| {
                if i == 0 {
                    r#"{"start": 100, "end": 400}"#.to_string()
                } else {
                    r#"{"start": null, "end": null}"#.to_string()
                }
            })
            .collect();
        let json = format!(r#"{{"start": 50, "end": null, "levels": [{}]}}"#, levels.join(","));

        let doc: MarathonDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc.start, Some(50));
        assert_eq!(doc.end, None);
        assert_eq!(doc.levels[0].duration_secs(), Some(300));
        assert!(doc.levels[0].is_completed());
        assert_eq!(doc.last_completed_stage(), 1);
    }

    #[test]
    fn test_stage_record_states() {
        let fresh = StageRecord::default();
        assert!(!fresh.is_completed());
        assert!(!fresh.is_in_progress());

        let running = StageRecord { start: Some(1), end: None };
        assert!(running.is_in_progress());
        assert_eq!(running.duration_secs(), None);
    }
}
