#![allow(dead_code)]

pub mod clock;
pub mod dns_server_mock;
pub mod packets;

pub use clock::ManualClock;
pub use dns_server_mock::{MockBehavior, MockDnsServer};
