//! Core types: groups, errors, RNG, configuration.
//!
//! Everything else in the crate is built from these.

pub mod group;
pub mod error;
pub mod rng;
pub mod config;

pub use group::{GroupId, GroupMap, GROUP_COUNT};
pub use error::BingoError;
pub use rng::DrawRng;
pub use config::{BingoConfig, DEFAULT_GROUP_SEEDS};
