//! Gearsheet engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Sheet actions: item store, gear tabs, ordering, transfer, rolls, view
//! - `infrastructure/` - Ports and their in-memory, dice and config adapters
//! - `api/` - Request dispatch and error mapping
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Shared sheet fixtures for unit tests.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end tests against the in-memory adapters.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
