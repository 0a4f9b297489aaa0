//! Nullroute Application Layer
//!
//! Ports describe what the engine needs from the outside world; use cases
//! drive the query pipeline and the host-facing operations through them.
pub mod ports;
pub mod services;
pub mod use_cases;
