pub mod cache;
pub mod control;
pub mod dns;
pub mod rules;
pub mod stats;

pub use cache::ClearCacheUseCase;
pub use control::HandleControlCommandUseCase;
pub use dns::{Disposition, DropReason, HandleDnsQueryUseCase, QueryOutcome};
pub use rules::{EditBlocklistUseCase, ReloadRulesUseCase, UpdateWhitelistUseCase};
pub use stats::{GetStatisticsUseCase, ResetStatisticsUseCase};
