//! Actix-web HTTP surface for the documentation metadata.
//!
//! This crate intentionally contains framework-specific code (handlers and route
//! registration). Values served here are computed once at startup by `docket-openapi`.

pub mod handlers;
pub mod openapi;
pub mod routes;

pub use openapi::{MetadataApiDoc, METADATA_DOCUMENT_URL};
pub use routes::{
    configure_document, configure_metadata, configure_metrics, configure_ui_redirect,
};
