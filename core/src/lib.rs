pub mod chart;
pub mod context;
pub mod game_data;
pub mod link;
pub mod storage;
pub mod timers;

// Re-exports for convenience
pub use chart::{ChartError, ProgressChart};
pub use context::{AppConfig, ConfigError};
pub use game_data::{STAGE_COUNT, StageNumber, ZoneId, ZoneRegistry};
pub use link::{LinkError, MumbleLink, ZoneSource};
pub use storage::{MarathonDocument, StageRecord, StateStore, StorageError};
pub use timers::{
    Clock, DisplayTriple, ManualClock, SequenceTimer, SimpleTimer, SystemClock, Timestamp,
    ZoneTimer,
};
