//! Planning and transition rules — the decision core of the conversation.
//!
//! Two pure functions: `plan_turn` maps (stage, turn) to at most one
//! request, and `apply_outcome` maps (stage, outcome) to the next stage.
//! Neither performs I/O; the session owns the single live `Stage` and
//! calls them in order around each dispatch.

use serde_json::json;

use super::stage::Stage;
use super::turn::Turn;

/// A crew server endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Kickoff,
    GenerateBom,
    GenerateFinalAssets,
}

impl Endpoint {
    /// The path this endpoint lives at on the crew server.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Kickoff => "/kickoff_crew",
            Endpoint::GenerateBom => "/generate_bom",
            Endpoint::GenerateFinalAssets => "/generate_final_assets",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path().trim_start_matches('/'))
    }
}

/// One planned request: where to post and what to send.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPlan {
    pub endpoint: Endpoint,
    pub payload: serde_json::Value,
}

/// What a turn maps to at the current stage.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnDecision {
    /// Dispatch this request and apply its outcome to the stage.
    Dispatch(RequestPlan),
    /// No call; show guidance and stay where we are.
    Reject { guidance: &'static str },
    /// Empty input; nothing happens at all.
    Ignore,
}

/// Guidance shown when a stage expects confirmation and gets something else.
pub const GUIDANCE: &str = "Please confirm with 'proceed' (or 'looks good', 'yes', \
    'continue', 'ok') to keep going, or restart to describe a new project.";

/// Decide what a turn does at the current stage.
///
/// At `Start` every non-empty turn kicks off a fresh project, even one
/// that reads like a confirmation. The awaiting stages accept only the
/// confirmation vocabulary and reject everything else locally. The two
/// post-kickoff calls carry empty bodies: the server already holds the
/// project context from kickoff.
pub fn plan_turn(stage: Stage, turn: &Turn) -> TurnDecision {
    if turn.is_empty() {
        return TurnDecision::Ignore;
    }

    match stage {
        Stage::Start => TurnDecision::Dispatch(RequestPlan {
            endpoint: Endpoint::Kickoff,
            payload: json!({ "project_details": turn.raw() }),
        }),
        Stage::AwaitingBom if turn.is_confirmation() => TurnDecision::Dispatch(RequestPlan {
            endpoint: Endpoint::GenerateBom,
            payload: json!({}),
        }),
        Stage::AwaitingFinalAssets if turn.is_confirmation() => {
            TurnDecision::Dispatch(RequestPlan {
                endpoint: Endpoint::GenerateFinalAssets,
                payload: json!({}),
            })
        }
        Stage::AwaitingBom | Stage::AwaitingFinalAssets => TurnDecision::Reject {
            guidance: GUIDANCE,
        },
    }
}

/// Apply a resolved outcome to the stage that produced the call.
///
/// Success advances the cycle; any failure resets to `Start`.
pub fn apply_outcome<T, E>(stage: Stage, outcome: &Result<T, E>) -> Stage {
    match outcome {
        Ok(_) => stage.on_success(),
        Err(_) => Stage::Start,
    }
}
