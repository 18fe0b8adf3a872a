//! Error types for the game link

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("shared memory region '{name}' is not available (is the game running?)")]
    Unavailable {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to map shared memory region '{name}'")]
    Map {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("shared memory region '{name}' is {size} bytes, need at least {required}")]
    TooSmall {
        name: String,
        size: usize,
        required: usize,
    },

    #[error("identity is empty")]
    EmptyIdentity,

    #[error("failed to parse identity")]
    Identity(#[from] serde_json::Error),
}
