use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted whitelist as exchanged with the host: `{domains, updatedAt}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistDocument {
    pub domains: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl WhitelistDocument {
    pub fn new(domains: Vec<String>) -> Self {
        Self {
            domains,
            updated_at: Utc::now(),
        }
    }
}
