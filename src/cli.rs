use clap::{Parser, ValueEnum};
use fractal_core::AppConfig;
use std::path::PathBuf;

/// Which timer drives the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// One total plus the current instance
    Daily,
    /// Scales 1-100 and both challenge motes, in order, persisted
    Marathon,
}

#[derive(Debug, Parser)]
#[command(version, about = "Fractal Timer")]
pub struct Args {
    /// Which state machine to use
    #[arg(long = "state", value_enum, default_value_t = Mode::Daily)]
    pub mode: Mode,

    /// Reload the previous state for the marathon state machine
    #[arg(long)]
    pub reload: bool,

    /// Generate a progress chart from the marathon state machine
    #[arg(long)]
    pub graph: bool,

    /// Marathon state file (overrides config)
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Progress chart output (overrides config)
    #[arg(long)]
    pub chart_file: Option<PathBuf>,

    /// Poll interval in milliseconds (overrides config)
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

impl Args {
    /// Apply command-line overrides on top of the stored config
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(path) = &self.state_file {
            config.state_file = path.clone();
        }
        if let Some(path) = &self.chart_file {
            config.chart_file = path.clone();
        }
        if let Some(ms) = self.interval_ms {
            config.poll_interval_ms = ms;
        }
        config
    }
}
