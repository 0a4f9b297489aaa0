use nullroute_application::use_cases::{GetStatisticsUseCase, HandleControlCommandUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub handle_command: Arc<HandleControlCommandUseCase>,
    pub get_statistics: Arc<GetStatisticsUseCase>,
}
