pub mod auth;
pub mod basic_auth;
pub mod response;

pub use auth::jwt_auth_middleware;
pub use basic_auth::docs_auth_middleware;
pub use response::{ApiResponse, ApiResult};
