//! Marathon progress chart
//!
//! Plots minutes spent per stage over the contiguous prefix of completed
//! stages and writes it as a PNG, overwriting the previous chart. Renders
//! run on a detached thread from a snapshot of the stage list, so a slow or
//! failing render never holds up polling.

mod error;
mod render;

pub use error::ChartError;
pub use render::{CHART_HEIGHT, CHART_WIDTH, render};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use crate::game_data::StageNumber;
use crate::storage::StageRecord;

/// `(stage number, minutes)` for each stage up to the first one lacking a
/// start or an end.
pub fn chart_points(stages: &[StageRecord]) -> Vec<(StageNumber, f32)> {
    stages
        .iter()
        .map_while(|stage| stage.duration_secs())
        .enumerate()
        .map(|(idx, secs)| (idx as StageNumber + 1, secs as f32 / 60.0))
        .collect()
}

/// PNG chart output.
///
/// Clones share one render counter. Every `spawn_render` takes the next
/// generation number, and a finished render only replaces the file if no
/// newer generation has been written already. Renders that finish out of
/// order therefore never leave an older snapshot on disk.
#[derive(Debug, Clone)]
pub struct ProgressChart {
    path: PathBuf,
    requested: Arc<AtomicU64>,
    written: Arc<Mutex<u64>>,
}

impl ProgressChart {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            requested: Arc::new(AtomicU64::new(0)),
            written: Arc::new(Mutex::new(0)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of background renders requested so far
    pub fn renders_requested(&self) -> u64 {
        self.requested.load(Ordering::SeqCst)
    }

    /// Render and write synchronously.
    pub fn write(&self, stages: &[StageRecord]) -> Result<(), ChartError> {
        let png = self.encode(stages)?;
        self.create_parent()?;
        fs::write(&self.path, png).map_err(|source| ChartError::WriteFile {
            path: self.path.clone(),
            source,
        })
    }

    fn encode(&self, stages: &[StageRecord]) -> Result<Vec<u8>, ChartError> {
        render(&chart_points(stages))?
            .encode_png()
            .map_err(|e| ChartError::Encode {
                path: self.path.clone(),
                reason: e.to_string(),
            })
    }

    fn create_parent(&self) -> Result<(), ChartError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ChartError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    /// Write the render for `generation` unless a newer one is already on
    /// disk. Returns whether the file was replaced.
    fn write_generation(
        &self,
        stages: &[StageRecord],
        generation: u64,
    ) -> Result<bool, ChartError> {
        let png = self.encode(stages)?;

        let mut written = self.written.lock().unwrap_or_else(|e| e.into_inner());
        if *written >= generation {
            return Ok(false);
        }
        self.create_parent()?;
        fs::write(&self.path, png).map_err(|source| ChartError::WriteFile {
            path: self.path.clone(),
            source,
        })?;
        *written = generation;
        Ok(true)
    }

    /// Fire-and-forget render on a background thread. Errors are logged only.
    pub fn spawn_render(&self, snapshot: Vec<StageRecord>) {
        let generation = self.requested.fetch_add(1, Ordering::SeqCst) + 1;
        let chart = self.clone();
        let spawned = thread::Builder::new()
            .name("progress-chart".to_string())
            .spawn(move || match chart.write_generation(&snapshot, generation) {
                Ok(true) => {
                    tracing::debug!(path = %chart.path.display(), generation, "Progress chart updated")
                }
                Ok(false) => tracing::debug!(generation, "Stale progress chart discarded"),
                Err(e) => tracing::warn!(error = %e, "Failed to render progress chart"),
            });

        if let Err(e) = spawned {
            tracing::warn!(error = %e, "Failed to spawn progress chart thread");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(start: i64, end: i64) -> StageRecord {
        StageRecord {
            start: Some(start),
            end: Some(end),
        }
    }

    #[test]
    fn test_chart_points_stop_at_first_gap() {
        let mut stages = vec![StageRecord::default(); 5];
        stages[0] = completed(0, 600);
        stages[1] = completed(600, 1_500);
        stages[2] = StageRecord {
            start: Some(1_500),
            end: None,
        };
        stages[3] = completed(2_000, 2_300);

        assert_eq!(chart_points(&stages), vec![(1, 10.0), (2, 15.0)]);
    }

    #[test]
    fn test_chart_points_empty_without_completed_first_stage() {
        let mut stages = vec![StageRecord::default(); 3];
        stages[1] = completed(0, 60);
        assert!(chart_points(&stages).is_empty());
    }

    #[test]
    fn test_render_draws_line() {
        let pixmap = render(&[(1, 10.0), (2, 15.0), (3, 8.5)]).unwrap();
        assert_eq!(pixmap.width(), CHART_WIDTH);
        assert_eq!(pixmap.height(), CHART_HEIGHT);
        // Pure blue pixels only come from the data line
        let has_line = pixmap
            .pixels()
            .iter()
            .any(|p| p.blue() > 200 && p.red() < 50 && p.green() < 50);
        assert!(has_line);
    }

    #[test]
    fn test_render_handles_empty_and_long_stages() {
        assert!(render(&[]).is_ok());
        assert!(render(&[(1, 95.0)]).is_ok());
    }

    #[test]
    fn test_write_creates_png() {
        let dir = tempfile::tempdir().unwrap();
        let chart = ProgressChart::new(dir.path().join("out").join("progress.png"));
        chart.write(&[completed(0, 300), completed(300, 900)]).unwrap();

        let bytes = fs::read(chart.path()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_spawn_render_counts_requests() {
        let dir = tempfile::tempdir().unwrap();
        let chart = ProgressChart::new(dir.path().join("progress.png"));
        let shared = chart.clone();
        assert_eq!(chart.renders_requested(), 0);

        chart.spawn_render(vec![completed(0, 60)]);
        shared.spawn_render(vec![completed(0, 120)]);
        assert_eq!(chart.renders_requested(), 2);
    }

    #[test]
    fn test_older_generation_does_not_overwrite_newer() {
        let dir = tempfile::tempdir().unwrap();
        let chart = ProgressChart::new(dir.path().join("progress.png"));
        let newer = vec![completed(0, 300), completed(300, 900)];
        let older: Vec<StageRecord> = Vec::new();

        assert!(chart.write_generation(&newer, 2).unwrap());
        assert!(!chart.write_generation(&older, 1).unwrap());

        let on_disk = fs::read(chart.path()).unwrap();
        assert_eq!(on_disk, chart.encode(&newer).unwrap());
    }
}
