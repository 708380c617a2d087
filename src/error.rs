use thiserror::Error;

/// Error type shared by the content and translation capability traits.
///
/// Strategies only ever branch on `NotFound` (a missing per-locale project
/// is recoverable and skips that locale); everything else propagates and
/// aborts the strategy invocation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("{service} API error ({status}): {body}")]
    Api {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("transport error")]
    Transport(#[from] reqwest::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(StoreError::NotFound("project fr_FR".to_string()).is_not_found());
        assert!(!StoreError::Api {
            service: "transifex",
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        }
        .is_not_found());
    }

    #[test]
    fn test_display_includes_status() {
        let err = StoreError::Api {
            service: "desk",
            status: reqwest::StatusCode::FORBIDDEN,
            body: "denied".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("desk"));
        assert!(msg.contains("403"));
        assert!(msg.contains("denied"));
    }
}
