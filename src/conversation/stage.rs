//! Workflow stage machine — tracks where the crew pipeline is.

use serde::{Deserialize, Serialize};

/// The stages of a crew conversation.
///
/// Cycles on success: Start → AwaitingBom → AwaitingFinalAssets → Start.
/// Any dispatch failure, from any stage, returns to `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// No workflow in progress; the next input describes a fresh project.
    Start,
    /// Kickoff succeeded; waiting for the go-ahead to generate the
    /// bill of materials.
    AwaitingBom,
    /// BOM succeeded; waiting for the go-ahead to generate final assets.
    AwaitingFinalAssets,
}

impl Stage {
    /// The stage reached when a call dispatched from `self` succeeds.
    pub fn on_success(self) -> Stage {
        match self {
            Stage::Start => Stage::AwaitingBom,
            Stage::AwaitingBom => Stage::AwaitingFinalAssets,
            Stage::AwaitingFinalAssets => Stage::Start,
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::Start
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::AwaitingBom => "awaiting_bom",
            Self::AwaitingFinalAssets => "awaiting_final_assets",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_walks_the_cycle() {
        use Stage::*;
        assert_eq!(Start.on_success(), AwaitingBom);
        assert_eq!(AwaitingBom.on_success(), AwaitingFinalAssets);
        assert_eq!(AwaitingFinalAssets.on_success(), Start);
    }

    #[test]
    fn three_successes_return_to_start() {
        let mut stage = Stage::default();
        for _ in 0..3 {
            stage = stage.on_success();
        }
        assert_eq!(stage, Stage::Start);
    }

    #[test]
    fn default_is_start() {
        assert_eq!(Stage::default(), Stage::Start);
    }

    #[test]
    fn display_matches_serde() {
        use Stage::*;
        for stage in [Start, AwaitingBom, AwaitingFinalAssets] {
            let display = format!("{stage}");
            let json = serde_json::to_string(&stage).unwrap();
            // JSON wraps in quotes
            assert_eq!(
                format!("\"{display}\""),
                json,
                "Display and serde should match for {stage:?}"
            );
        }
    }
}
