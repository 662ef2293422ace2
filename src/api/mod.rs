pub mod extract;
pub mod response;

pub use extract::JsonBody;
pub use response::{ApiResponse, ApiResult};
