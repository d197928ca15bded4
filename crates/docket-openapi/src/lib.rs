//! Assembles a [`Docket`](docket_core::Docket) from settings and plugins and
//! projects it onto an application's `utoipa` OpenAPI document.
//!
//! Kept in its own crate so it can be reused by:
//! - the server (Swagger UI + `/api-docs/{group}/openapi.json`)
//! - tooling binaries (exporting a static document)

pub mod compose;
pub mod oauth;
pub mod render;
pub mod resources;

pub use compose::{DocketComposer, DocketDefaults, DEFAULT_GROUP_NAME};
pub use oauth::{build_oauth2_security_scheme, OAUTH2_SCHEME_NAME};
pub use render::render;
pub use resources::*;
