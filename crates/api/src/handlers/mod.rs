pub mod command;
pub mod health;
pub mod stats;

pub use command::handle_command;
pub use health::health_check;
pub use stats::get_stats;
