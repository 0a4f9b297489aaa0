use nullroute_domain::{CommandReply, ControlCommand};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

use crate::use_cases::{
    ClearCacheUseCase, EditBlocklistUseCase, GetStatisticsUseCase, ReloadRulesUseCase,
    ResetStatisticsUseCase, UpdateWhitelistUseCase,
};

/// Dispatch a host command envelope `{command, ...args}`.
///
/// Returns `None` for envelopes that do not decode to a known command; those
/// are logged and otherwise ignored.
pub struct HandleControlCommandUseCase {
    reload_rules: Arc<ReloadRulesUseCase>,
    update_whitelist: Arc<UpdateWhitelistUseCase>,
    edit_blocklist: Arc<EditBlocklistUseCase>,
    get_statistics: Arc<GetStatisticsUseCase>,
    reset_statistics: Arc<ResetStatisticsUseCase>,
    clear_cache: Arc<ClearCacheUseCase>,
}

impl HandleControlCommandUseCase {
    pub fn new(
        reload_rules: Arc<ReloadRulesUseCase>,
        update_whitelist: Arc<UpdateWhitelistUseCase>,
        edit_blocklist: Arc<EditBlocklistUseCase>,
        get_statistics: Arc<GetStatisticsUseCase>,
        reset_statistics: Arc<ResetStatisticsUseCase>,
        clear_cache: Arc<ClearCacheUseCase>,
    ) -> Self {
        Self {
            reload_rules,
            update_whitelist,
            edit_blocklist,
            get_statistics,
            reset_statistics,
            clear_cache,
        }
    }

    #[instrument(skip_all)]
    pub async fn execute(&self, envelope: &Value) -> Option<CommandReply> {
        let command = match ControlCommand::from_envelope(envelope) {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "Ignoring unrecognized command envelope");
                return None;
            }
        };
        debug!(command = command.name(), "Handling control command");

        let reply = match command {
            ControlCommand::ReloadRules => match self.reload_rules.execute().await {
                Ok(_) => CommandReply::Ack(true),
                Err(e) => {
                    error!(error = %e, "Rule reload failed");
                    CommandReply::Ack(false)
                }
            },
            ControlCommand::GetStatistics => {
                CommandReply::Statistics(self.get_statistics.execute())
            }
            ControlCommand::UpdateWhitelist { whitelist } => {
                self.update_whitelist.execute(whitelist).await;
                CommandReply::Ack(true)
            }
            ControlCommand::AddRule { domain } => {
                CommandReply::Ack(self.edit_blocklist.add(&domain).is_ok())
            }
            ControlCommand::RemoveRule { domain } => {
                CommandReply::Ack(self.edit_blocklist.remove(&domain).is_ok())
            }
            ControlCommand::ClearCache => {
                self.clear_cache.execute();
                CommandReply::Ack(true)
            }
            ControlCommand::ResetStatistics => {
                self.reset_statistics.execute();
                CommandReply::Ack(true)
            }
        };

        Some(reply)
    }
}
