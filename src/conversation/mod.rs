//! Conversation core — stage machine, turn parsing, decision rules.
//!
//! The stage only moves when a dispatched call resolves. Planning and
//! transition are pure functions; `crate::session` owns the single live
//! `Stage` and performs the I/O between them.

pub mod machine;
pub mod stage;
pub mod turn;

pub use machine::{Endpoint, GUIDANCE, RequestPlan, TurnDecision, apply_outcome, plan_turn};
pub use stage::Stage;
pub use turn::{CONFIRMATION_PHRASES, Turn};
