//! POSIX shared memory link (`/dev/shm/<name>`)

use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

use super::{IDENTITY_LEN, IDENTITY_OFFSET, LinkError, ZoneSource, parse_identity};
use crate::game_data::ZoneId;

const SHM_DIR: &str = "/dev/shm";

pub struct MumbleLink {
    name: String,
    map: Mmap,
}

impl MumbleLink {
    /// Map the named region read-only. Fails if the game has not created it.
    pub fn open(name: &str) -> Result<Self, LinkError> {
        Self::open_path(&Path::new(SHM_DIR).join(name))
    }

    pub fn open_path(path: &Path) -> Result<Self, LinkError> {
        let name = path.display().to_string();
        let file = File::open(path).map_err(|source| LinkError::Unavailable {
            name: name.clone(),
            source,
        })?;

        // The game keeps writing to this region; reads copy the identity
        // bytes out before decoding.
        let map = unsafe { Mmap::map(&file) }.map_err(|source| LinkError::Map {
            name: name.clone(),
            source,
        })?;

        let required = IDENTITY_OFFSET + IDENTITY_LEN;
        if map.len() < required {
            return Err(LinkError::TooSmall {
                name,
                size: map.len(),
                required,
            });
        }

        tracing::info!(region = %name, size = map.len(), "Opened game link");
        Ok(Self { name, map })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ZoneSource for MumbleLink {
    fn current_zone(&mut self) -> Result<ZoneId, LinkError> {
        let identity = self.map[IDENTITY_OFFSET..IDENTITY_OFFSET + IDENTITY_LEN].to_vec();
        parse_identity(&identity)
    }
}
