// src/error.rs
use reqwest::StatusCode;
use reqwest::header::InvalidHeaderValue;
use serde::Deserialize;
use thiserror::Error;

use crate::validation::RecordIdError;

/// Body PowerDNS sends alongside a rejected request.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponseBody {
    pub error: String,
}

/// Mutating operation that the server rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateRecord,
    ReplaceRecordSet,
    DeleteRecordSet,
}

impl Action {
    fn describe(self) -> &'static str {
        match self {
            Action::CreateRecord => "creating record",
            Action::ReplaceRecordSet => "creating record set",
            Action::DeleteRecordSet => "deleting record",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

#[derive(Debug, Error)]
pub enum PdnsError {
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("api key is not a valid header value")]
    InvalidApiKey(#[from] InvalidHeaderValue),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not decode response (HTTP {status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid record id: {0}")]
    InvalidRecordId(#[from] RecordIdError),

    #[error("error {action}: {id}{}", reason_suffix(.reason))]
    Api {
        action: Action,
        id: String,
        status: StatusCode,
        reason: Option<String>,
    },
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(reason) => format!(", reason: {reason:?}"),
        None => String::new(),
    }
}

impl PdnsError {
    /// Build an API error from a rejected response body. A body that is not a
    /// PowerDNS error document yields an error without a reason.
    pub(crate) fn api(action: Action, id: impl Into<String>, status: StatusCode, body: &[u8]) -> Self {
        let reason = serde_json::from_slice::<ErrorResponseBody>(body)
            .ok()
            .map(|b| b.error);
        PdnsError::Api {
            action,
            id: id.into(),
            status,
            reason,
        }
    }

    /// True when the server answered but refused the request.
    pub fn is_api_error(&self) -> bool {
        matches!(self, PdnsError::Api { .. })
    }

    /// True when the caller passed a malformed record identifier.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PdnsError::InvalidRecordId(_))
    }

    /// HTTP status attached to the error, if the server produced one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            PdnsError::Api { status, .. } | PdnsError::Decode { status, .. } => Some(*status),
            PdnsError::Transport(err) => err.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PdnsError>;
