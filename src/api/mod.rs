//! HTTP contract with the crew server.

pub mod client;
pub mod types;

pub use client::{CrewApi, CrewClient};
pub use types::{CrewReply, ErrorReply};
