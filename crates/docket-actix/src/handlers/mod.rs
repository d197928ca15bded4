pub mod admin;
pub mod metadata;
pub mod ui;
