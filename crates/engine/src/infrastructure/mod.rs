//! Infrastructure - port definitions and the adapters that implement them.

pub mod clock;
pub mod config;
pub mod dice;
pub mod in_memory;
pub mod ports;
pub mod seed;
