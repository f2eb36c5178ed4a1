//! Chat session — couples the conversation machine to the dispatcher.
//!
//! One `ChatSession` is one conversation: it owns the workflow stage, the
//! transcript, and the dispatcher handle. `submit` runs a full turn from
//! raw input to render-ready events; nothing else moves the stage.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::api::{CrewApi, CrewReply};
use crate::conversation::{Stage, Turn, TurnDecision, apply_outcome, plan_turn};
use crate::error::ApiError;

/// Failure line shown when the request itself could not complete.
pub const CONNECTION_TROUBLE: &str =
    "Sorry, I'm having trouble connecting. Please try again later.";

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Bot,
}

/// One line of the conversation, oldest first in the transcript.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    pub id: Uuid,
    pub role: Role,
    pub text: String,
    pub at: DateTime<Utc>,
}

/// Render-ready output of one turn, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// Main stage output from the server's `result` field (markdown-lite).
    Result(String),
    /// The server's follow-up instruction (`prompt` field).
    Prompt(String),
    /// Local guidance; no request was made and the stage did not move.
    Guidance(String),
    /// A failed turn, surfaced as a bot-style message.
    Failure(String),
}

/// A live conversation with the crew server.
pub struct ChatSession {
    api: Arc<dyn CrewApi>,
    stage: Stage,
    transcript: Vec<TranscriptEntry>,
}

impl ChatSession {
    pub fn new(api: Arc<dyn CrewApi>) -> Self {
        Self {
            api,
            stage: Stage::Start,
            transcript: Vec::new(),
        }
    }

    /// The current workflow stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Conversation lines so far, oldest first.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Abandon the workflow: back to `Start`, transcript kept.
    ///
    /// The next non-empty input describes a fresh project.
    pub fn reset(&mut self) {
        if self.stage != Stage::Start {
            tracing::info!(stage = %self.stage, "Conversation reset");
        }
        self.stage = Stage::Start;
    }

    /// Run one full turn: parse, plan, dispatch, transition.
    ///
    /// At most one request leaves per call, and holding `&mut self` across
    /// the await means a second turn cannot start until this one's outcome
    /// has been applied.
    pub async fn submit(&mut self, input: &str) -> Vec<ChatEvent> {
        let turn = Turn::parse(input);

        match plan_turn(self.stage, &turn) {
            TurnDecision::Ignore => Vec::new(),
            TurnDecision::Reject { guidance } => {
                self.record(Role::User, turn.raw());
                self.record(Role::Bot, guidance);
                vec![ChatEvent::Guidance(guidance.to_string())]
            }
            TurnDecision::Dispatch(plan) => {
                self.record(Role::User, turn.raw());
                tracing::info!(stage = %self.stage, endpoint = %plan.endpoint, "Dispatching turn");

                let outcome = self.api.dispatch(&plan).await;
                self.stage = apply_outcome(self.stage, &outcome);

                match outcome {
                    Ok(reply) => self.reply_events(reply),
                    Err(err) => {
                        tracing::warn!(next_stage = %self.stage, "Turn failed: {err}");
                        let text = failure_text(&err);
                        self.record(Role::Bot, &text);
                        vec![ChatEvent::Failure(text)]
                    }
                }
            }
        }
    }

    /// Turn a successful reply into display events, recording each line.
    fn reply_events(&mut self, reply: CrewReply) -> Vec<ChatEvent> {
        let mut events = Vec::new();
        if let Some(result) = reply.result {
            self.record(Role::Bot, &result);
            events.push(ChatEvent::Result(result));
        }
        if let Some(prompt) = reply.prompt {
            self.record(Role::Bot, &prompt);
            events.push(ChatEvent::Prompt(prompt));
        }
        events
    }

    fn record(&mut self, role: Role, text: &str) {
        self.transcript.push(TranscriptEntry {
            id: Uuid::new_v4(),
            role,
            text: text.to_string(),
            at: Utc::now(),
        });
    }
}

/// The bot-style line shown for a failed dispatch.
///
/// Server-reported failures carry the server's explanation; everything
/// else (connect errors, garbled bodies) gets the connection line.
fn failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Server { .. } => format!("Sorry, an error occurred: {}", err.user_message()),
        _ => CONNECTION_TROUBLE.to_string(),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
