use encoding_rs::UTF_16LE;
use serde::Deserialize;

use super::LinkError;
use crate::game_data::ZoneId;

/// Only `map_id` matters here; the game writes more fields
#[derive(Debug, Deserialize)]
struct Identity {
    map_id: ZoneId,
}

/// Extract `map_id` from the identity field: NUL-terminated UTF-16LE JSON.
pub fn parse_identity(bytes: &[u8]) -> Result<ZoneId, LinkError> {
    let (text, _) = UTF_16LE.decode_without_bom_handling(bytes);
    let json = text.split('\0').next().unwrap_or_default().trim();
    if json.is_empty() {
        return Err(LinkError::EmptyIdentity);
    }

    let identity: Identity = serde_json::from_str(json)?;
    Ok(identity.map_id)
}

#[cfg(test)]
pub(crate) fn encode_identity(json: &str, len: usize) -> Vec<u8> {
    let mut bytes: Vec<u8> = json.encode_utf16().flat_map(u16::to_le_bytes).collect();
    bytes.resize(len, 0);
    bytes
}
