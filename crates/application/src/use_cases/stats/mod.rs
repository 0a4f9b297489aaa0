pub mod get_statistics;
pub mod reset_statistics;

pub use get_statistics::GetStatisticsUseCase;
pub use reset_statistics::ResetStatisticsUseCase;
