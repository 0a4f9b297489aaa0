pub mod edit_blocklist;
pub mod reload;
pub mod update_whitelist;

pub use edit_blocklist::EditBlocklistUseCase;
pub use reload::ReloadRulesUseCase;
pub use update_whitelist::UpdateWhitelistUseCase;
