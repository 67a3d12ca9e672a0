use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelateConfig {
    /// Processed documents allowed to wait unconsumed in the hand-off channel.
    pub handoff_capacity: usize,
    /// Stamped on stored document and symbol rows.
    pub schema_version: i32,
}

impl Default for CorrelateConfig {
    fn default() -> Self {
        Self {
            handoff_capacity: 1,
            schema_version: 1,
        }
    }
}

impl CorrelateConfig {
    pub fn with_handoff_capacity(mut self, capacity: usize) -> Self {
        self.handoff_capacity = capacity.max(1);
        self
    }

    pub fn handoff_capacity(&self) -> usize {
        self.handoff_capacity.max(1)
    }
}
