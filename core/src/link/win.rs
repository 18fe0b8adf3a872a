//! Named file mapping link (Windows)

use windows::Win32::Foundation::{BOOL, CloseHandle, HANDLE};
use windows::Win32::System::Memory::{
    FILE_MAP_READ, MEMORY_MAPPED_VIEW_ADDRESS, MapViewOfFile, OpenFileMappingW, UnmapViewOfFile,
};
use windows::core::{HSTRING, PCWSTR};

use super::{IDENTITY_LEN, IDENTITY_OFFSET, LINK_SIZE, LinkError, ZoneSource, parse_identity};
use crate::game_data::ZoneId;

pub struct MumbleLink {
    name: String,
    handle: HANDLE,
    view: MEMORY_MAPPED_VIEW_ADDRESS,
}

// The view is only read through `&mut self`.
unsafe impl Send for MumbleLink {}

impl MumbleLink {
    /// Open the named mapping read-only. Fails if the game has not created it.
    pub fn open(name: &str) -> Result<Self, LinkError> {
        let wide = HSTRING::from(name);
        let handle = unsafe { OpenFileMappingW(FILE_MAP_READ.0, BOOL(0), PCWSTR(wide.as_ptr())) }
            .map_err(|e| LinkError::Unavailable {
                name: name.to_string(),
                source: std::io::Error::other(e.to_string()),
            })?;

        let view = unsafe { MapViewOfFile(handle, FILE_MAP_READ, 0, 0, LINK_SIZE) };
        if view.Value.is_null() {
            let source = std::io::Error::last_os_error();
            unsafe {
                let _ = CloseHandle(handle);
            }
            return Err(LinkError::Map {
                name: name.to_string(),
                source,
            });
        }

        tracing::info!(region = %name, size = LINK_SIZE, "Opened game link");
        Ok(Self {
            name: name.to_string(),
            handle,
            view,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ZoneSource for MumbleLink {
    fn current_zone(&mut self) -> Result<ZoneId, LinkError> {
        let identity = unsafe {
            let base = self.view.Value as *const u8;
            std::slice::from_raw_parts(base.add(IDENTITY_OFFSET), IDENTITY_LEN).to_vec()
        };
        parse_identity(&identity)
    }
}

impl Drop for MumbleLink {
    fn drop(&mut self) {
        unsafe {
            let _ = UnmapViewOfFile(self.view);
            let _ = CloseHandle(self.handle);
        }
    }
}
