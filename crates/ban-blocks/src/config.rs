//! Configuration for block assembly

use serde::{Deserialize, Serialize};

/// Assembler configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    /// Work value used when the input carries none
    pub default_work: String,
    /// Emit a warning for every rejected input
    pub log_rejections: bool,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            default_work: String::new(),
            log_rejections: true,
        }
    }
}
