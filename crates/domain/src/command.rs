//! Host → engine command envelope.
//!
//! The envelope is a JSON object whose `command` field names the operation;
//! any arguments sit next to it:
//!
//! ```json
//! {"command": "updateWhitelist", "whitelist": ["example.com"]}
//! ```

use crate::errors::DomainError;
use crate::statistics::Statistics;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum ControlCommand {
    /// Reload blocklist and whitelist from their persisted sources.
    ReloadRules,
    GetStatistics,
    UpdateWhitelist { whitelist: Vec<String> },
    AddRule { domain: String },
    RemoveRule { domain: String },
    ClearCache,
    ResetStatistics,
}

impl ControlCommand {
    /// Decode an envelope. Unknown command names and missing arguments are
    /// reported as [`DomainError::InvalidCommand`].
    pub fn from_envelope(envelope: &serde_json::Value) -> Result<Self, DomainError> {
        Self::deserialize(envelope).map_err(|e| DomainError::InvalidCommand(e.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ControlCommand::ReloadRules => "reloadRules",
            ControlCommand::GetStatistics => "getStatistics",
            ControlCommand::UpdateWhitelist { .. } => "updateWhitelist",
            ControlCommand::AddRule { .. } => "addRule",
            ControlCommand::RemoveRule { .. } => "removeRule",
            ControlCommand::ClearCache => "clearCache",
            ControlCommand::ResetStatistics => "resetStatistics",
        }
    }
}

/// Reply payload for a recognized command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandReply {
    /// `{"success": bool}`
    Ack(bool),
    /// Flat statistics map.
    Statistics(Statistics),
}

impl CommandReply {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CommandReply::Ack(success) => serde_json::json!({ "success": success }),
            CommandReply::Statistics(stats) => serde_json::Value::Object(stats.to_flat_map()),
        }
    }
}

impl Serialize for CommandReply {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
