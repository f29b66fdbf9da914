use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body returned to the caller on every non-2xx path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

/// Everything that can go wrong while serving one weather request.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Neither a city nor a full coordinate pair was supplied.
    #[error("City or coordinates required")]
    MissingLocation,

    /// The current-conditions call answered with a status other than 200.
    #[error("{message}")]
    Provider { status: u16, message: String },

    /// Network, read or decode failure anywhere in the outbound sequence.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

impl ProxyError {
    pub fn status_code(&self) -> u16 {
        match self {
            ProxyError::MissingLocation => 400,
            ProxyError::Provider { status, .. } => *status,
            ProxyError::Transport(_) => 500,
        }
    }

    pub fn payload(&self) -> ErrorPayload {
        let error = match self {
            // Keep the whole context chain so the caller sees the root cause.
            ProxyError::Transport(err) => format!("{err:#}"),
            other => other.to_string(),
        };

        ErrorPayload { error }
    }
}
