pub mod api_info;
pub mod docket;
pub mod error;
pub mod security;

pub use api_info::*;
pub use docket::*;
pub use error::*;
pub use security::*;
