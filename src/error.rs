//! Error types for Crew Chat.

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value was present but unusable.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from dispatching a request to the crew server.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP client itself could not be constructed.
    #[error("Failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },

    /// The request never produced a response (connect, DNS, broken pipe).
    #[error("Request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },

    /// The server answered with a non-2xx status.
    ///
    /// `details` is the human-readable failure text the server included in
    /// its error body, when it included one.
    #[error("Server error {status}")]
    Server { status: u16, details: Option<String> },

    /// The server answered 2xx but the body was not the expected JSON.
    #[error("Invalid response from {endpoint}: {reason}")]
    InvalidBody { endpoint: String, reason: String },
}

impl ApiError {
    /// The normalized failure message for this error.
    ///
    /// Server-provided `details` pass through verbatim; a non-2xx status
    /// without details becomes a generic `server error <status>` line.
    /// Other variants fall back to their display form.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server {
                details: Some(details),
                ..
            } => details.clone(),
            ApiError::Server {
                status,
                details: None,
            } => format!("server error {status}"),
            other => other.to_string(),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_details_pass_through_verbatim() {
        let err = ApiError::Server {
            status: 500,
            details: Some("pipeline timeout".into()),
        };
        assert_eq!(err.user_message(), "pipeline timeout");
    }

    #[test]
    fn server_without_details_gets_generic_line() {
        let err = ApiError::Server {
            status: 502,
            details: None,
        };
        assert_eq!(err.user_message(), "server error 502");
    }

    #[test]
    fn transport_falls_back_to_display() {
        let err = ApiError::Transport {
            endpoint: "kickoff_crew".into(),
            reason: "connection refused".into(),
        };
        assert_eq!(
            err.user_message(),
            "Request to kickoff_crew failed: connection refused"
        );
    }

    #[test]
    fn config_error_names_the_key() {
        let err = ConfigError::InvalidValue {
            key: "CREW_CHAT_URL".into(),
            message: "base URL is empty".into(),
        };
        assert!(err.to_string().contains("CREW_CHAT_URL"));
    }
}
