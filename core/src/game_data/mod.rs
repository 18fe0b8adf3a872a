mod error;
mod fractals;
mod registry;

/// Game map identifier as reported by the link's `map_id`
pub type ZoneId = u32;

/// 1-based position in a marathon sequence
pub type StageNumber = u32;

pub use error::RegistryError;
pub use fractals::{FIRST_CHALLENGE_STAGE, FRACTAL_ZONES, FractalInfo, STAGE_COUNT, get_fractal_info};
pub use registry::ZoneRegistry;
