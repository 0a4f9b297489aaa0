use anyhow::Context;
use nullroute_api::AppState;
use nullroute_application::ports::{
    ResponseCachePort, RuleSourcePort, RuleStorePort, UpstreamResolverPort,
};
use nullroute_application::services::QueryStatsCollector;
use nullroute_application::use_cases::{
    ClearCacheUseCase, EditBlocklistUseCase, GetStatisticsUseCase, HandleControlCommandUseCase,
    HandleDnsQueryUseCase, ReloadRulesUseCase, ResetStatisticsUseCase, UpdateWhitelistUseCase,
};
use nullroute_domain::Config;
use nullroute_infrastructure::dns::{InMemoryRuleStore, ResponseCache, UpstreamResolver};
use nullroute_infrastructure::rules::FileRuleSource;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Every long-lived engine object, built once at startup and shared by handle.
pub struct Services {
    pub cache: Arc<ResponseCache>,
    pub handle_query: Arc<HandleDnsQueryUseCase>,
    pub handle_command: Arc<HandleControlCommandUseCase>,
    pub reload_rules: Arc<ReloadRulesUseCase>,
    pub get_statistics: Arc<GetStatisticsUseCase>,
}

impl Services {
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let store: Arc<dyn RuleStorePort> = Arc::new(InMemoryRuleStore::new());
        let cache = Arc::new(ResponseCache::new(
            Duration::from_secs(config.cache.ttl_secs),
            config.cache.max_entries,
        ));
        let cache_port: Arc<dyn ResponseCachePort> = cache.clone();
        let source: Arc<dyn RuleSourcePort> = Arc::new(FileRuleSource::new(
            config.rules.blocklist_path.clone(),
            config.rules.whitelist_path.clone(),
        ));

        let resolver = UpstreamResolver::from_config(&config.upstream)
            .context("building upstream resolver")?;
        info!(
            protocol = ?config.upstream.protocol,
            upstreams = ?resolver.endpoints(),
            timeout_ms = config.upstream.timeout_ms,
            "Upstream resolver ready"
        );
        let upstream: Arc<dyn UpstreamResolverPort> = Arc::new(resolver);

        let stats = Arc::new(QueryStatsCollector::new());

        let handle_query = Arc::new(HandleDnsQueryUseCase::new(
            store.clone(),
            cache_port.clone(),
            upstream,
            stats.clone(),
        ));

        let reload_rules = Arc::new(ReloadRulesUseCase::new(
            source.clone(),
            store.clone(),
            cache_port.clone(),
        ));
        let get_statistics = Arc::new(GetStatisticsUseCase::new(stats.clone()));

        let handle_command = Arc::new(HandleControlCommandUseCase::new(
            reload_rules.clone(),
            Arc::new(UpdateWhitelistUseCase::new(
                source,
                store.clone(),
                cache_port.clone(),
            )),
            Arc::new(EditBlocklistUseCase::new(store, cache_port.clone())),
            get_statistics.clone(),
            Arc::new(ResetStatisticsUseCase::new(stats)),
            Arc::new(ClearCacheUseCase::new(cache_port)),
        ));

        Ok(Self {
            cache,
            handle_query,
            handle_command,
            reload_rules,
            get_statistics,
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            handle_command: self.handle_command.clone(),
            get_statistics: self.get_statistics.clone(),
        }
    }
}
