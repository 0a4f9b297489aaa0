pub mod handle_query;

pub use handle_query::{Disposition, DropReason, HandleDnsQueryUseCase, QueryOutcome};
