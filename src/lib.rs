//! Crew Chat — terminal client for the three-stage crew pipeline.
//!
//! Drives kickoff → bill of materials → final assets over HTTP, one user
//! turn at a time. `conversation` decides which call a turn maps to,
//! `api` performs it, and `session` applies the outcome and hands
//! render-ready events to the REPL.

pub mod api;
pub mod config;
pub mod conversation;
pub mod error;
pub mod render;
pub mod repl;
pub mod session;
