//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Record storage (the sheet's document store)
//! - Catalog lookup and source resolution for drag and drop
//! - Dice rolling and chat publishing
//! - Clock/Random (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{CatalogLookup, ContextResolver, RecordStore, SourceRef};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{ChatMessage, RollError, RollOutcome, RollPort, RollRequest};

// =============================================================================
// Testability Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;

#[cfg(test)]
pub use repos::{MockCatalogLookup, MockContextResolver, MockRecordStore};

#[cfg(test)]
pub use external::MockRollPort;

#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};
