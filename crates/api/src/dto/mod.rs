pub mod stats;

pub use stats::StatsResponse;
