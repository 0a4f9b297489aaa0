use bytes::Bytes;
use std::sync::Arc;

/// QTYPE/QCLASS pair of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionKind {
    pub qtype: u16,
    pub qclass: u16,
}

/// One inbound query, alive for the handling of a single datagram.
///
/// Uses `Arc<str>` for the domain so it can be shared with the cache key
/// without copying.
#[derive(Debug, Clone)]
pub struct ParsedQuery {
    pub transaction_id: [u8; 2],
    pub domain: Arc<str>,
    /// QTYPE/QCLASS, when the packet carries them after the name.
    pub question: Option<QuestionKind>,
    /// The original datagram, forwarded upstream verbatim.
    pub raw: Bytes,
}

impl ParsedQuery {
    #[inline]
    pub fn id(&self) -> u16 {
        u16::from_be_bytes(self.transaction_id)
    }
}
