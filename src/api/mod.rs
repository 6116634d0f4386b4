pub mod docs;
pub mod extract;

pub use docs::openapi_document;
pub use extract::JsonBody;
