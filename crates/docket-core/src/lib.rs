//! Framework-agnostic building blocks for composing API documentation.
//!
//! A [`Docket`] describes what ends up in a published OpenAPI document. Services
//! customize it by registering [`DocketPlugin`]s; plugins are ordered by
//! [`Precedence`] and their hooks are folded over seed values with
//! [`apply_across`].

pub mod compose;
pub mod models;
pub mod order;
pub mod plugin;
pub mod selector;

pub use compose::*;
pub use models::*;
pub use order::*;
pub use plugin::*;
pub use selector::*;
