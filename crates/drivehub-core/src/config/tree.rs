//! Tree reconstruction settings.

use serde::{Deserialize, Serialize};

/// How the tree builder reacts to parent references that form a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// The first node reached twice in a walk is left without a parent.
    #[default]
    Break,
    /// The build fails with a `CycleDetected` error.
    Reject,
}

/// Tree builder configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Cycle handling policy.
    #[serde(default)]
    pub cycle_policy: CyclePolicy,
}
