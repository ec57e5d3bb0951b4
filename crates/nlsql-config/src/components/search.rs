//! Reformulation search configuration

use super::defaults::DEFAULT_MAX_EDITS;
use serde::{Deserialize, Serialize};

/// Bounds for the parse-tree reformulation search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of single-token moves away from a seed.
    ///
    /// Also caps how many accepted candidates are returned.
    #[serde(default = "default_max_edits")]
    pub max_edits: usize,
}

fn default_max_edits() -> usize {
    DEFAULT_MAX_EDITS
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_edits: DEFAULT_MAX_EDITS,
        }
    }
}
