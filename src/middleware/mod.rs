pub mod auth;
pub mod load_existing;
pub mod response;
pub mod server_error;

pub use auth::bearer_auth_middleware;
pub use load_existing::Existing;
pub use response::{ApiResponse, ApiResult};
pub use server_error::server_error_middleware;
