pub mod api_client;
pub mod session_service;

pub use api_client::{ApiClient, ApiError};
pub use session_service::SessionService;
