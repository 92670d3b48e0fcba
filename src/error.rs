use thiserror::Error;

/// Failures while polling the homework status API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS or timeout failure.
    #[error("request to homework API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("homework API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not JSON.
    #[error("homework API returned invalid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// The body was JSON but not a status page.
    #[error("unexpected homework API response: {0}")]
    Shape(#[source] serde_json::Error),
}

impl FetchError {
    /// Credentials are wrong; retrying will not help.
    pub fn is_auth(&self) -> bool {
        matches!(self, FetchError::Status { status: 401 | 403, .. })
    }
}

/// Failures while delivering a message.
///
/// Bot API URLs embed the bot token, so transport errors must be stripped of
/// their URL (`reqwest::Error::without_url`) before they are wrapped here.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("request to Telegram failed: {0}")]
    Transport(reqwest::Error),

    #[error("Telegram rejected the message (status {status}): {description}")]
    Rejected { status: u16, description: String },
}

/// Everything that can end a single polling cycle early.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

impl CycleError {
    pub fn is_fatal(&self) -> bool {
        match self {
            CycleError::Fetch(e) => e.is_auth(),
            CycleError::Notify(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        let err = FetchError::Status {
            status: 500,
            body: "Internal Server Error".into(),
        };
        assert_eq!(
            err.to_string(),
            "homework API returned status 500: Internal Server Error"
        );
    }

    #[test]
    fn auth_failures_are_fatal() {
        for status in [401, 403] {
            let err = CycleError::from(FetchError::Status {
                status,
                body: String::new(),
            });
            assert!(err.is_fatal());
        }
    }

    #[test]
    fn other_failures_are_retried() {
        let server = CycleError::from(FetchError::Status {
            status: 503,
            body: String::new(),
        });
        assert!(!server.is_fatal());

        let decode = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert!(!CycleError::from(FetchError::Decode(decode)).is_fatal());

        let rejected = CycleError::from(NotifyError::Rejected {
            status: 400,
            description: "Bad Request: chat not found".into(),
        });
        assert!(!rejected.is_fatal());
    }

    #[test]
    fn cycle_error_is_transparent() {
        let err = CycleError::from(NotifyError::Rejected {
            status: 403,
            description: "Forbidden: bot was blocked by the user".into(),
        });
        assert_eq!(
            err.to_string(),
            "Telegram rejected the message (status 403): Forbidden: bot was blocked by the user"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CycleError>();
    }
}
