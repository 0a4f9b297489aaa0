pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_control_routes;
pub use state::AppState;
