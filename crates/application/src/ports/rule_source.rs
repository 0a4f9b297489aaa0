use async_trait::async_trait;
use nullroute_domain::{DomainError, WhitelistDocument};

/// Persisted origin of the blocklist and whitelist.
///
/// `Ok(None)` means "nothing persisted", which is distinct from an I/O or
/// parse failure.
#[async_trait]
pub trait RuleSourcePort: Send + Sync {
    async fn load_blocklist(&self) -> Result<Option<Vec<String>>, DomainError>;

    async fn load_whitelist(&self) -> Result<Option<WhitelistDocument>, DomainError>;

    async fn save_whitelist(&self, document: &WhitelistDocument) -> Result<(), DomainError>;
}
