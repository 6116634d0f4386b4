pub mod auth_service;
pub mod record_service;

pub use auth_service::{AuthService, VerifiedUser};
pub use record_service::{RecordError, RecordService};
