pub mod api_client;
pub mod error;

pub use api_client::{redirect_to, ApiClient};
pub use error::ApiError;
