//! Search-specific error taxonomy

use thiserror::Error;

/// Failures of the remote ranking path
///
/// Both variants are caught at the dispatcher boundary and converted into a
/// silent fallback; they are never surfaced to callers of `search`.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The network call to the ranking service failed
    #[error("remote ranking invocation failed: {message}")]
    RemoteInvocation { message: String },

    /// The ranking service responded, but not with the expected JSON shape
    #[error("ranking response could not be parsed: {message}")]
    ResponseParse { message: String },
}

impl SearchError {
    pub fn remote_invocation(message: impl Into<String>) -> Self {
        Self::RemoteInvocation {
            message: message.into(),
        }
    }

    pub fn response_parse(message: impl Into<String>) -> Self {
        Self::ResponseParse {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SearchError::remote_invocation("timeout");
        assert_eq!(
            err.to_string(),
            "remote ranking invocation failed: timeout"
        );

        let err = SearchError::response_parse("missing field `matches`");
        assert_eq!(
            err.to_string(),
            "ranking response could not be parsed: missing field `matches`"
        );
    }
}
