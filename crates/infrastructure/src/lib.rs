//! Nullroute Infrastructure Layer
//!
//! Concrete adapters for the application ports: the in-memory rule store and
//! response cache, upstream transports, the UDP listener, and the file-backed
//! rule source.
pub mod dns;
pub mod rules;
