use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Locations of the persisted rule sources
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Newline-separated blocklist. Built-in list is used when unset or missing.
    #[serde(default)]
    pub blocklist_path: Option<PathBuf>,

    /// JSON `{domains, updatedAt}` document.
    #[serde(default)]
    pub whitelist_path: Option<PathBuf>,
}
