use crate::decode::DecodeError;

/// Failure of one Jupiter call, tagged with the stage that failed and the
/// endpoint it was talking to.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{endpoint}: creating request: {reason}")]
    Request {
        endpoint: &'static str,
        reason: String,
    },

    #[error("{endpoint}: making request: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint}: reading response: {source}")]
    Body {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint}: unmarshaling response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: DecodeError,
    },
}

impl ClientError {
    /// Untyped dump of the offending payload, for decode failures.
    pub fn raw_payload(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Decode { source, .. } => source.raw.as_ref(),
            _ => None,
        }
    }
}
