//! Error types for SHOWCASE listing operations

use thiserror::Error;

/// Failure of a single listing or reference-data fetch.
///
/// The list controller treats every variant the same way (full reset of the
/// loaded results); the distinction only matters for logging.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("Transport failure: {reason}")]
    Transport { reason: String },

    #[error("Listing API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed listing response: {reason}")]
    Decode { reason: String },
}

impl ListingError {
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ListingError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_includes_code() {
        let err = ListingError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Listing API returned HTTP 502: bad gateway");
    }

    #[test]
    fn test_serde_error_maps_to_decode() {
        let err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        assert!(matches!(ListingError::from(err), ListingError::Decode { .. }));
    }
}
