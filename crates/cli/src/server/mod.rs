pub mod control;
pub mod dns;

pub use control::start_control_server;
pub use dns::start_dns_server;
