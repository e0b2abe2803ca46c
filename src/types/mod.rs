// FoxBr shared type definitions
// Each submodule defines types used across the application.

pub mod chrome;
pub mod errors;
pub mod geometry;
pub mod navigation;
pub mod page_view;
pub mod settings;
pub mod tab;
