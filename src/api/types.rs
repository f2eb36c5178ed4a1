//! Wire types for the crew server's HTTP contract.

use serde::{Deserialize, Serialize};

/// Body of a successful (2xx) stage response.
///
/// `result` and `prompt` are independent display payloads; the server may
/// send either, both, or neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewReply {
    /// Main stage output, in the server's markdown-lite dialect
    /// (`**bold**` headers, `[label](url)` links).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Follow-up instruction telling the user how to continue
    /// (e.g. "Enter 'Proceed' to generate the Bill of Materials.").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// Body the server sends alongside a non-2xx status.
///
/// `details` is the only field surfaced to the user; `error` is a coarse
/// stage label ("Error in Stage 2") and goes to the log instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_fields_are_independent() {
        let both: CrewReply =
            serde_json::from_str(r#"{"result":"**Plan**","prompt":"Enter 'Proceed'."}"#).unwrap();
        assert_eq!(both.result.as_deref(), Some("**Plan**"));
        assert_eq!(both.prompt.as_deref(), Some("Enter 'Proceed'."));

        let neither: CrewReply = serde_json::from_str("{}").unwrap();
        assert_eq!(neither, CrewReply::default());
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let reply: CrewReply =
            serde_json::from_str(r#"{"result":"ok","stage":2,"elapsed_ms":1200}"#).unwrap();
        assert_eq!(reply.result.as_deref(), Some("ok"));
        assert_eq!(reply.prompt, None);
    }

    #[test]
    fn error_body_without_details_parses() {
        let body: ErrorReply = serde_json::from_str(r#"{"error":"Error in Stage 2"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Error in Stage 2"));
        assert_eq!(body.details, None);
    }

    #[test]
    fn absent_options_are_not_serialized() {
        let reply = CrewReply {
            result: Some("done".into()),
            prompt: None,
        };
        assert_eq!(serde_json::to_string(&reply).unwrap(), r#"{"result":"done"}"#);
    }
}
