//! Library exports.
//!
//! Re-exports the workspace crates under one name so that additional binaries
//! (e.g. the OpenAPI exporter) and integration tests depend on a single crate.

pub use docket_actix as actix;
pub use docket_config as config;
pub use docket_core as core;
pub use docket_observability as observability;
pub use docket_openapi as openapi;
pub use docket_server as server;
