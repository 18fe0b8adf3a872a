use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{MarathonDocument, StorageError};

/// Reads and writes the marathon document at a fixed path.
///
/// Writes replace the whole file. There is no partial-write recovery.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load and validate the document. A missing file is `Ok(None)`.
    pub fn load(&self) -> Result<Option<MarathonDocument>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::ReadFile {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let document: MarathonDocument =
            serde_json::from_slice(&bytes).map_err(|source| StorageError::ParseJson {
                path: self.path.clone(),
                source,
            })?;
        document.validate()?;

        tracing::debug!(
            path = %self.path.display(),
            last_completed = document.last_completed_stage(),
            "Loaded marathon state"
        );
        Ok(Some(document))
    }

    pub fn save(&self, document: &MarathonDocument) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let bytes = serde_json::to_vec(document)?;
        fs::write(&self.path, bytes).map_err(|source| StorageError::WriteFile {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StageRecord;

    #[test]
    fn test_missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));
        assert!(!store.exists());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("nested").join("state.json"));

        let mut doc = MarathonDocument::new();
        doc.start = Some(1_000);
        doc.levels[0] = StageRecord { start: Some(1_010), end: Some(1_400) };
        doc.levels[1] = StageRecord { start: Some(1_410), end: None };

        store.save(&doc).unwrap();
        assert!(store.exists());

        let loaded = store.load().unwrap().expect("document present");
        assert_eq!(loaded, doc);
        assert_eq!(loaded.last_completed_stage(), 1);
    }

    #[test]
    fn test_save_overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));

        let mut doc = MarathonDocument::new();
        doc.start = Some(1);
        store.save(&doc).unwrap();
        doc.end = Some(2);
        store.save(&doc).unwrap();

        assert_eq!(store.load().unwrap().unwrap().end, Some(2));
    }

    #[test]
    fn test_load_rejects_wrong_stage_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"start": null, "end": null, "levels": [{"start": null, "end": null}]}"#)
            .unwrap();

        let err = StateStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::StageCount { expected: 102, found: 1 }));
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();

        let err = StateStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::ParseJson { .. }));
    }
}
