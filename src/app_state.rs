use fractal_core::{
    AppConfig, DisplayTriple, LinkError, ProgressChart, SequenceTimer, SimpleTimer, StateStore,
    StorageError, SystemClock, ZoneId, ZoneRegistry, ZoneTimer,
};

use crate::cli::{Args, Mode};

/// The active timer plus the user's running toggle.
///
/// Only the driver loop touches this, so toggles and poll ticks never
/// interleave.
pub struct AppState {
    timer: Box<dyn ZoneTimer + Send>,
    running: bool,
}

impl AppState {
    pub fn new(timer: Box<dyn ZoneTimer + Send>) -> Self {
        Self {
            timer,
            running: false,
        }
    }

    /// Build the timer selected on the command line.
    pub fn from_args(args: &Args, config: &AppConfig) -> Result<Self, StorageError> {
        let registry = ZoneRegistry::fractals();

        let timer: Box<dyn ZoneTimer + Send> = match args.mode {
            Mode::Daily => Box::new(SimpleTimer::new(registry)),
            Mode::Marathon => {
                let store = StateStore::new(&config.state_file);
                let timer = SequenceTimer::load(registry, SystemClock, store, args.reload)?;
                if args.graph {
                    Box::new(timer.with_chart(ProgressChart::new(&config.chart_file)))
                } else {
                    Box::new(timer)
                }
            }
        };

        tracing::info!(
            mode = ?args.mode,
            reload = args.reload,
            graph = args.graph,
            "Timer ready"
        );
        Ok(Self::new(timer))
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start on the stopped → running edge; `None` if already running.
    pub fn start(&mut self) -> Option<DisplayTriple> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(self.timer.start())
    }

    /// Stop on the running → stopped edge; `None` if already stopped.
    pub fn stop(&mut self) -> Option<DisplayTriple> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(self.timer.stop())
    }

    pub fn toggle(&mut self) -> DisplayTriple {
        self.running = !self.running;
        if self.running {
            self.timer.start()
        } else {
            self.timer.stop()
        }
    }

    /// Feed one poll result. Ignored while stopped; a failed read only
    /// refreshes the display.
    pub fn tick(&mut self, zone: Result<ZoneId, LinkError>) -> Option<DisplayTriple> {
        if !self.running {
            return None;
        }
        match zone {
            Ok(zone) => Some(self.timer.update(zone)),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping poll tick");
                Some(self.timer.display())
            }
        }
    }

    pub fn display(&self) -> DisplayTriple {
        self.timer.display()
    }
}
