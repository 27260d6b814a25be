//! API - entry points that turn wire requests into use case calls.

pub mod dispatch;
mod error_mapping;

pub use dispatch::SheetDispatcher;
