//! SQL assembly configuration

use super::defaults::DEFAULT_TABLE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema hints used when assembling SELECT / FROM / WHERE clauses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Table used when no known table is named in the question
    pub default_table: String,
    /// Known table names, matched case-insensitively against name tokens
    pub tables: Vec<String>,
    /// Column bound by an operator word, e.g. `by = "author"`
    pub operator_columns: BTreeMap<String, String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_table: DEFAULT_TABLE.to_string(),
            tables: vec![DEFAULT_TABLE.to_string()],
            operator_columns: BTreeMap::new(),
        }
    }
}
