//! Deterministic card generation.
//!
//! A card is a pure function of `(seed, vocabulary)`: the distinct words are
//! shuffled with a ChaCha8 stream seeded from `seed`, and the first 16 are
//! laid out row-major. No global random state is touched, so a given seed
//! yields the same card on every run and platform.

use log::debug;
use rustc_hash::FxHashSet;

use super::card::{BingoCard, CARD_CELLS};
use crate::core::{BingoError, DrawRng};

/// Distinct words of a vocabulary, first occurrence wins.
pub fn distinct_words<S: AsRef<str>>(vocabulary: &[S]) -> Vec<&str> {
    let mut seen = FxHashSet::default();
    vocabulary
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| seen.insert(*word))
        .collect()
}

/// Generate the card for a seed.
///
/// Fails with [`BingoError::InsufficientVocabulary`] when the vocabulary has
/// fewer than 16 distinct words.
///
/// ```
/// use classroom_bingo::cards::generate_card;
/// use classroom_bingo::content::VOCABULARY;
///
/// let card = generate_card(12345, &VOCABULARY).unwrap();
/// assert_eq!(card, generate_card(12345, &VOCABULARY).unwrap());
/// assert!(card.words().all(|w| VOCABULARY.contains(&w)));
/// ```
pub fn generate_card<S: AsRef<str>>(seed: u64, vocabulary: &[S]) -> Result<BingoCard, BingoError> {
    let mut words = distinct_words(vocabulary);
    if words.len() < CARD_CELLS {
        return Err(BingoError::InsufficientVocabulary {
            available: words.len(),
            required: CARD_CELLS,
        });
    }

    DrawRng::new(seed).shuffle(&mut words);
    debug!("generated card for seed {seed} from {} words", words.len());

    Ok(BingoCard::from_row_major(&words[..CARD_CELLS]))
}
