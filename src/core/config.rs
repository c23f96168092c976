//! Session configuration.
//!
//! A `BingoConfig` fixes everything that makes a session reproducible:
//! - one card seed per group
//! - the seed for teacher draws
//! - the vocabulary and question lists
//!
//! Hosts build it with the `with_*` methods or deserialize it from any
//! serde format.

use serde::{Deserialize, Serialize};

use super::error::BingoError;
use super::group::{GroupId, GroupMap};
use super::rng::DrawRng;
use crate::cards::{distinct_words, CARD_CELLS};
use crate::content::{to_owned_list, QUESTIONS, VOCABULARY};

/// Card seeds used when a config does not override them.
pub const DEFAULT_GROUP_SEEDS: [u64; 4] = [12345, 67890, 54321, 98765];

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BingoConfig {
    /// Card seed per group. Same seed, same card.
    pub group_seeds: GroupMap<u64>,

    /// Seed for question and word draws.
    pub draw_seed: u64,

    /// Words for cards and word draws.
    pub vocabulary: Vec<String>,

    /// Prompts for question draws.
    pub questions: Vec<String>,
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            group_seeds: GroupMap::new(|group| DEFAULT_GROUP_SEEDS[group.index()]),
            draw_seed: 42,
            vocabulary: to_owned_list(&VOCABULARY),
            questions: to_owned_list(&QUESTIONS),
        }
    }
}

impl BingoConfig {
    /// Set the card seed for one group.
    #[must_use]
    pub fn with_group_seed(mut self, group: GroupId, seed: u64) -> Self {
        self.group_seeds[group] = seed;
        self
    }

    /// Set the draw seed.
    #[must_use]
    pub fn with_draw_seed(mut self, seed: u64) -> Self {
        self.draw_seed = seed;
        self
    }

    /// Seed draws from OS entropy, for live classroom play.
    #[must_use]
    pub fn with_entropy_draw_seed(mut self) -> Self {
        self.draw_seed = DrawRng::from_entropy().seed();
        self
    }

    /// Replace the vocabulary.
    #[must_use]
    pub fn with_vocabulary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = words.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the question list.
    #[must_use]
    pub fn with_questions<I, S>(mut self, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.questions = questions.into_iter().map(Into::into).collect();
        self
    }

    /// Check that a session can be built from this config.
    pub fn validate(&self) -> Result<(), BingoError> {
        let available = distinct_words(&self.vocabulary).len();
        if available < CARD_CELLS {
            return Err(BingoError::InsufficientVocabulary {
                available,
                required: CARD_CELLS,
            });
        }
        if self.questions.is_empty() {
            return Err(BingoError::EmptyQuestionList);
        }
        Ok(())
    }
}
