use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Upstream query timed out after {0} ms")]
    QueryTimeout(u64),

    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),

    #[error("Invalid upstream response: {0}")]
    InvalidDnsResponse(String),

    #[error("Rule source error: {0}")]
    RuleSource(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Reasons a raw datagram is rejected by the query codec.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketError {
    #[error("packet is {len} bytes, shorter than the 12-byte header")]
    TooShort { len: usize },

    #[error("label of length {label_len} at offset {offset} overruns {packet_len}-byte packet")]
    LabelOverrun {
        offset: usize,
        label_len: usize,
        packet_len: usize,
    },

    #[error("question name is not terminated before end of packet")]
    UnterminatedName,

    #[error("question name is empty")]
    EmptyName,
}
