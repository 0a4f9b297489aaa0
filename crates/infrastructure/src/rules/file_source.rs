use super::parser::parse_blocklist;
use async_trait::async_trait;
use nullroute_application::ports::RuleSourcePort;
use nullroute_domain::{DomainError, WhitelistDocument};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Rule source backed by two optional files.
///
/// A missing path or a missing file both mean "nothing persisted". Any other
/// read or parse error is reported so the caller can keep its current rules.
#[derive(Debug, Clone, Default)]
pub struct FileRuleSource {
    blocklist_path: Option<PathBuf>,
    whitelist_path: Option<PathBuf>,
}

impl FileRuleSource {
    pub fn new(blocklist_path: Option<PathBuf>, whitelist_path: Option<PathBuf>) -> Self {
        Self {
            blocklist_path,
            whitelist_path,
        }
    }

    async fn read_optional(path: &Path) -> Result<Option<String>, DomainError> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Rule file not found");
                Ok(None)
            }
            Err(e) => Err(DomainError::RuleSource(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[async_trait]
impl RuleSourcePort for FileRuleSource {
    async fn load_blocklist(&self) -> Result<Option<Vec<String>>, DomainError> {
        let Some(path) = &self.blocklist_path else {
            return Ok(None);
        };
        let Some(content) = Self::read_optional(path).await? else {
            return Ok(None);
        };

        let entries = parse_blocklist(&content);
        info!(path = %path.display(), entries = entries.len(), "Blocklist loaded");
        Ok(Some(entries))
    }

    async fn load_whitelist(&self) -> Result<Option<WhitelistDocument>, DomainError> {
        let Some(path) = &self.whitelist_path else {
            return Ok(None);
        };
        let Some(content) = Self::read_optional(path).await? else {
            return Ok(None);
        };

        let document: WhitelistDocument = serde_json::from_str(&content).map_err(|e| {
            DomainError::RuleSource(format!("invalid whitelist {}: {}", path.display(), e))
        })?;
        info!(
            path = %path.display(),
            entries = document.domains.len(),
            updated_at = %document.updated_at,
            "Whitelist loaded"
        );
        Ok(Some(document))
    }

    /// Write via a sibling temp file and rename, so readers never see a
    /// half-written document.
    async fn save_whitelist(&self, document: &WhitelistDocument) -> Result<(), DomainError> {
        let Some(path) = &self.whitelist_path else {
            return Ok(());
        };

        let json = serde_json::to_vec_pretty(document)
            .map_err(|e| DomainError::IoError(format!("failed to encode whitelist: {}", e)))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::IoError(format!("{}: {}", parent.display(), e)))?;
        }

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), entries = document.domains.len(), "Whitelist saved");
        Ok(())
    }
}
