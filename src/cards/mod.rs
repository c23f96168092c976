//! Bingo cards: the grid type and its deterministic generator.
//!
//! - `card`: `BingoCard`, `Cell`, grid dimensions
//! - `generator`: `generate_card` from a seed and a vocabulary

pub mod card;
pub mod generator;

pub use card::{BingoCard, Cell, CARD_CELLS, GRID_SIZE};
pub use generator::{distinct_words, generate_card};
