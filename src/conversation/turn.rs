//! Turn parsing — classifies one user submission.

/// Phrases treated as a go-ahead while a stage is waiting on confirmation.
///
/// Matching is exact on the normalized text: "yes please" is a fresh
/// project description, not a confirmation.
pub const CONFIRMATION_PHRASES: [&str; 5] = ["looks good", "proceed", "yes", "continue", "ok"];

/// One user submission, trimmed and classified.
///
/// Keeps the text as typed (that exact text becomes the kickoff payload)
/// alongside the normalized form used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    raw: String,
    normalized: String,
}

impl Turn {
    /// Parse raw input into a turn.
    pub fn parse(input: &str) -> Self {
        let raw = input.trim().to_string();
        let normalized = raw.to_lowercase();
        Self { raw, normalized }
    }

    /// The trimmed text as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The trimmed, lowercased form.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whether there is anything to act on at all.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether this turn is a confirmation gesture.
    pub fn is_confirmation(&self) -> bool {
        CONFIRMATION_PHRASES.contains(&self.normalized.as_str())
    }
}
