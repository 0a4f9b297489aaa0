pub mod handle_command;

pub use handle_command::HandleControlCommandUseCase;
