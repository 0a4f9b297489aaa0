use bytes::Bytes;
use nullroute_domain::packet::{parse_query, question_kind, synthesize_blocked, with_transaction_id};
use nullroute_domain::{FilterDecision, PacketError, ParsedQuery};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::{ResponseCachePort, RuleStorePort, UpstreamResolverPort};
use crate::services::QueryStatsCollector;

/// How an answered query was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    CacheHit,
    Blocked,
    Resolved,
}

/// Why a datagram received no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Codec rejected the packet. Not counted as a query.
    Malformed(PacketError),
    /// Upstream timed out, failed, or returned garbage.
    UpstreamFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Answered {
        response: Bytes,
        disposition: Disposition,
    },
    Dropped(DropReason),
}

impl QueryOutcome {
    pub fn response(&self) -> Option<&Bytes> {
        match self {
            QueryOutcome::Answered { response, .. } => Some(response),
            QueryOutcome::Dropped(_) => None,
        }
    }
}

/// Per-datagram dispatcher pipeline.
///
/// `parse -> cache lookup -> classify -> synthesize | forward -> cache store`.
/// Each call is independent; the only shared state is the rule store, the
/// response cache and the statistics counters.
pub struct HandleDnsQueryUseCase {
    rules: Arc<dyn RuleStorePort>,
    cache: Arc<dyn ResponseCachePort>,
    upstream: Arc<dyn UpstreamResolverPort>,
    stats: Arc<QueryStatsCollector>,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        rules: Arc<dyn RuleStorePort>,
        cache: Arc<dyn ResponseCachePort>,
        upstream: Arc<dyn UpstreamResolverPort>,
        stats: Arc<QueryStatsCollector>,
    ) -> Self {
        Self {
            rules,
            cache,
            upstream,
            stats,
        }
    }

    #[instrument(skip_all, fields(len = packet.len()))]
    pub async fn execute(&self, packet: Bytes) -> QueryOutcome {
        let query = match parse_query(packet) {
            Ok(query) => query,
            Err(e) => {
                debug!(error = %e, "Dropping malformed datagram");
                return QueryOutcome::Dropped(DropReason::Malformed(e));
            }
        };

        if let Some(response) = self.cached_answer(&query) {
            self.stats.record_cache_hit();
            debug!(domain = %query.domain, "Cache hit");
            return QueryOutcome::Answered {
                response,
                disposition: Disposition::CacheHit,
            };
        }

        match self.rules.classify(&query.domain) {
            FilterDecision::Blocked => {
                self.stats.record_blocked();
                debug!(domain = %query.domain, "Blocked");
                QueryOutcome::Answered {
                    response: synthesize_blocked(&query),
                    disposition: Disposition::Blocked,
                }
            }
            FilterDecision::Allowed => {
                self.stats.record_allowed();
                self.forward(&query).await
            }
        }
    }

    /// Cached bytes re-stamped with this query's id, unless the cached answer
    /// is for a different QTYPE/QCLASS.
    fn cached_answer(&self, query: &ParsedQuery) -> Option<Bytes> {
        let cached = self.cache.get(&query.domain)?;

        let same_kind = match (query.question, question_kind(&cached)) {
            (Some(asked), Some(stored)) => asked == stored,
            _ => true,
        };
        if !same_kind {
            return None;
        }

        Some(with_transaction_id(&cached, query.transaction_id))
    }

    async fn forward(&self, query: &ParsedQuery) -> QueryOutcome {
        match self.upstream.resolve(&query.raw).await {
            Ok(response) => {
                debug!(domain = %query.domain, bytes = response.len(), "Resolved upstream");
                self.cache.set(&query.domain, response.clone());
                QueryOutcome::Answered {
                    response,
                    disposition: Disposition::Resolved,
                }
            }
            Err(e) => {
                warn!(domain = %query.domain, error = %e, "Upstream resolution failed");
                QueryOutcome::Dropped(DropReason::UpstreamFailed)
            }
        }
    }
}
