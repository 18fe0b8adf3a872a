//! Marathon timer
//!
//! Walks a cursor through the stage sequence as the player enters each
//! stage's zone in order. Transition policy for `update(zone)`, with
//! `cur` the cursor before the call:
//!
//! 1. `zone` is the zone of `cur` and `cur` has an end time: the player
//!    went back in, so the end is cleared (reset).
//! 2. Otherwise:
//!    a. `cur` is in progress: set its end (stop).
//!    b. `zone` is the zone of `cur + 1`: advance and set the new stage's
//!       start. Entering any other stage's zone is ignored.
//!
//! The state document is written after every change.

use std::sync::Arc;

use super::{Clock, DisplayTriple, SystemClock, Timestamp, ZoneTimer, format_elapsed};
use crate::chart::ProgressChart;
use crate::game_data::{FIRST_CHALLENGE_STAGE, StageNumber, ZoneId, ZoneRegistry};
use crate::storage::{MarathonDocument, StageRecord, StateStore, StorageError};

/// Challenge motes reuse the zones of the last two regular scales
const CHALLENGE_STAGE_OFFSET: StageNumber = 2;

pub struct SequenceTimer<C: Clock = SystemClock> {
    registry: Arc<ZoneRegistry>,
    clock: C,
    document: MarathonDocument,
    /// Stage currently attempted, 0 before the first stage is entered
    cursor: StageNumber,
    store: Option<StateStore>,
    chart: Option<ProgressChart>,
}

impl SequenceTimer<SystemClock> {
    /// Fresh in-memory marathon. Nothing is written until a store is attached.
    pub fn new(registry: Arc<ZoneRegistry>) -> Self {
        Self::with_clock(registry, SystemClock)
    }
}

impl<C: Clock> SequenceTimer<C> {
    pub fn with_clock(registry: Arc<ZoneRegistry>, clock: C) -> Self {
        Self {
            registry,
            clock,
            document: MarathonDocument::new(),
            cursor: 0,
            store: None,
            chart: None,
        }
    }

    /// Resume from an existing document. The cursor lands on the highest
    /// stage with an end time.
    pub fn from_document(
        registry: Arc<ZoneRegistry>,
        clock: C,
        document: MarathonDocument,
    ) -> Result<Self, StorageError> {
        document.validate()?;
        let cursor = document.last_completed_stage();
        Ok(Self {
            registry,
            clock,
            document,
            cursor,
            store: None,
            chart: None,
        })
    }

    /// Open a marathon backed by `store`. With `reload` the stored document
    /// is resumed if present; otherwise a fresh document replaces it on the
    /// first write.
    pub fn load(
        registry: Arc<ZoneRegistry>,
        clock: C,
        store: StateStore,
        reload: bool,
    ) -> Result<Self, StorageError> {
        let document = if reload { store.load()? } else { None };

        let timer = match document {
            Some(document) => {
                tracing::info!(path = %store.path().display(), "Resuming marathon");
                Self::from_document(registry, clock, document)?
            }
            None => Self::with_clock(registry, clock),
        };
        Ok(timer.with_store(store))
    }

    pub fn with_store(mut self, store: StateStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Attach a progress chart and render the current state once.
    pub fn with_chart(mut self, chart: ProgressChart) -> Self {
        self.chart = Some(chart);
        self.refresh_chart();
        self
    }

    pub fn cursor(&self) -> StageNumber {
        self.cursor
    }

    pub fn document(&self) -> &MarathonDocument {
        &self.document
    }

    pub fn stages(&self) -> &[StageRecord] {
        &self.document.levels
    }

    /// `"<zone name> - <scale>"`, with challenge motes shown as e.g. `99CM`
    pub fn label(&self) -> String {
        if self.cursor == 0 {
            return String::new();
        }

        let name = self
            .registry
            .zone_of_stage(self.cursor)
            .and_then(|zone| self.registry.name_of(zone))
            .unwrap_or_default();

        if self.cursor >= FIRST_CHALLENGE_STAGE {
            format!("{} - {}CM", name, self.cursor - CHALLENGE_STAGE_OFFSET)
        } else {
            format!("{} - {}", name, self.cursor)
        }
    }

    fn zone_of_stage(&self, stage: StageNumber) -> Option<ZoneId> {
        if stage == 0 {
            return None;
        }
        self.registry.zone_of_stage(stage)
    }

    fn total_time(&self, now: Timestamp) -> String {
        match self.document.start {
            Some(start) => format_elapsed(start, self.document.end.unwrap_or(now)),
            None => String::new(),
        }
    }

    fn instance_time(&self, now: Timestamp) -> String {
        match self.document.stage(self.cursor) {
            Some(StageRecord {
                start: Some(start),
                end,
            }) => format_elapsed(*start, end.unwrap_or(now)),
            _ => String::new(),
        }
    }

    fn triple(&self, now: Timestamp) -> DisplayTriple {
        DisplayTriple {
            total: self.total_time(now),
            label: self.label(),
            instance: self.instance_time(now),
        }
    }

    /// Persist the full document, then log the transition.
    fn record(&self, action: &str, now: Timestamp) {
        self.persist();
        tracing::info!(
            action,
            total = %self.total_time(now),
            stage = self.cursor,
            label = %self.label(),
            instance = %self.instance_time(now),
            "Marathon {action}"
        );
    }

    fn persist(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.save(&self.document) {
            tracing::warn!(
                error = %e,
                path = %store.path().display(),
                "Failed to persist marathon state"
            );
        }
    }

    fn refresh_chart(&self) {
        if let Some(chart) = &self.chart {
            chart.spawn_render(self.document.levels.clone());
        }
    }
}

impl<C: Clock> ZoneTimer for SequenceTimer<C> {
    fn start(&mut self) -> DisplayTriple {
        let now = self.clock.now();
        self.document.start.get_or_insert(now);
        self.record("start", now);
        self.triple(now)
    }

    fn stop(&mut self) -> DisplayTriple {
        let now = self.clock.now();
        self.document.end = Some(now);
        self.record("stop", now);
        self.triple(now)
    }

    fn update(&mut self, zone: ZoneId) -> DisplayTriple {
        let now = self.clock.now();
        let cur = self.cursor;

        if self.zone_of_stage(cur) == Some(zone) {
            let reset = match self.document.stage_mut(cur) {
                Some(stage) if stage.end.is_some() => {
                    stage.end = None;
                    true
                }
                _ => false,
            };
            if reset {
                self.record("instance reset", now);
                self.refresh_chart();
            }
        } else {
            let stopped = match self.document.stage_mut(cur) {
                Some(stage) if stage.is_in_progress() => {
                    stage.end = Some(now);
                    true
                }
                _ => false,
            };
            if stopped {
                self.record("instance stop", now);
                self.refresh_chart();
            }

            let next = cur + 1;
            if self.zone_of_stage(next) == Some(zone) {
                if let Some(stage) = self.document.stage_mut(next) {
                    stage.start = Some(now);
                    self.cursor = next;
                    self.record("instance start", now);
                }
            }
        }

        self.triple(now)
    }

    fn display(&self) -> DisplayTriple {
        self.triple(self.clock.now())
    }
}
