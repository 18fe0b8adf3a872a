//! Daily run timer
//!
//! Tracks a single running total plus the tracked instance the player is in.
//! Nothing is persisted; a fresh timer is created per launch.

use std::sync::Arc;

use super::{Clock, DisplayTriple, SystemClock, Timestamp, ZoneTimer, format_elapsed};
use crate::game_data::{ZoneId, ZoneRegistry};

#[derive(Debug)]
pub struct SimpleTimer<C: Clock = SystemClock> {
    registry: Arc<ZoneRegistry>,
    clock: C,

    run_start: Option<Timestamp>,
    run_end: Option<Timestamp>,

    active_zone: Option<ZoneId>,
    /// Kept after leaving the instance so the last name stays on screen
    active_zone_name: String,
    zone_start: Option<Timestamp>,
    zone_end: Option<Timestamp>,
}

impl SimpleTimer<SystemClock> {
    pub fn new(registry: Arc<ZoneRegistry>) -> Self {
        Self::with_clock(registry, SystemClock)
    }
}

impl<C: Clock> SimpleTimer<C> {
    pub fn with_clock(registry: Arc<ZoneRegistry>, clock: C) -> Self {
        Self {
            registry,
            clock,
            run_start: None,
            run_end: None,
            active_zone: None,
            active_zone_name: String::new(),
            zone_start: None,
            zone_end: None,
        }
    }

    pub fn run_start(&self) -> Option<Timestamp> {
        self.run_start
    }

    pub fn run_end(&self) -> Option<Timestamp> {
        self.run_end
    }

    pub fn active_zone(&self) -> Option<ZoneId> {
        self.active_zone
    }

    pub fn active_zone_name(&self) -> &str {
        &self.active_zone_name
    }

    pub fn zone_start(&self) -> Option<Timestamp> {
        self.zone_start
    }

    pub fn zone_end(&self) -> Option<Timestamp> {
        self.zone_end
    }

    fn total_time(&self, now: Timestamp) -> String {
        match self.run_start {
            Some(start) => format_elapsed(start, self.run_end.unwrap_or(now)),
            None => String::new(),
        }
    }

    fn instance_time(&self, now: Timestamp) -> String {
        match self.zone_start {
            Some(start) => format_elapsed(start, self.zone_end.unwrap_or(now)),
            None => String::new(),
        }
    }

    fn triple(&self, now: Timestamp) -> DisplayTriple {
        DisplayTriple {
            total: self.total_time(now),
            label: self.active_zone_name.clone(),
            instance: self.instance_time(now),
        }
    }

    fn log(&self, action: &str, now: Timestamp) {
        tracing::info!(
            action,
            total = %self.total_time(now),
            instance = %self.instance_time(now),
            zone = ?self.active_zone,
            label = %self.active_zone_name,
            "Daily timer {action}"
        );
    }
}

impl<C: Clock> ZoneTimer for SimpleTimer<C> {
    fn start(&mut self) -> DisplayTriple {
        let now = self.clock.now();
        self.active_zone = None;
        self.active_zone_name.clear();
        self.zone_start = None;
        self.zone_end = None;
        self.run_start = Some(now);
        self.run_end = None;
        self.log("start", now);
        self.triple(now)
    }

    fn stop(&mut self) -> DisplayTriple {
        let now = self.clock.now();
        self.run_end = Some(now);
        self.zone_end = Some(now);
        self.log("stop", now);
        self.triple(now)
    }

    fn update(&mut self, zone: ZoneId) -> DisplayTriple {
        let now = self.clock.now();

        if self.active_zone != Some(zone) {
            if let Some(name) = self.registry.name_of(zone) {
                // Switching straight from one tracked zone to another opens
                // the new instance without closing the previous one.
                self.active_zone = Some(zone);
                self.active_zone_name = name.to_string();
                self.zone_start = Some(now);
                self.zone_end = None;
                self.log("instance start", now);
            } else if self.active_zone.is_some() {
                self.active_zone = None;
                self.zone_end = Some(now);
                self.log("instance stop", now);
            }
        }

        self.triple(now)
    }

    fn display(&self) -> DisplayTriple {
        self.triple(self.clock.now())
    }
}
