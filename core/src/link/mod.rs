//! Game link
//!
//! The game client publishes a shared memory block (the Mumble positional
//! audio link). Its identity field is NUL-terminated UTF-16 JSON holding,
//! among other things, the player's current `map_id`.

mod error;
mod identity;
#[cfg(unix)]
mod shm;
#[cfg(windows)]
mod win;

pub use error::LinkError;
pub use identity::parse_identity;
#[cfg(unix)]
pub use shm::MumbleLink;
#[cfg(windows)]
pub use win::MumbleLink;

use crate::game_data::ZoneId;

/// Well-known name of the shared region
pub const DEFAULT_LINK_NAME: &str = "MumbleLink";

/// Full size of the shared region
pub const LINK_SIZE: usize = 5460;

/// Byte offset of the identity field
pub const IDENTITY_OFFSET: usize = 592;

/// Identity field width in bytes (256 UTF-16 units)
pub const IDENTITY_LEN: usize = 512;

/// Supplies the player's current map on each poll tick
pub trait ZoneSource {
    fn current_zone(&mut self) -> Result<ZoneId, LinkError>;
}
