//! Teacher draws: a random question or a random word.
//!
//! Only one draw is shown at a time, so the current draw is a single
//! `Option<Drawn>`. Drawing a question replaces a drawn word and vice versa.

use serde::{Deserialize, Serialize};

/// The question or word the teacher drew last.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Drawn {
    Question(String),
    Word(String),
}

impl Drawn {
    /// The drawn text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Drawn::Question(text) | Drawn::Word(text) => text,
        }
    }

    /// The drawn question, if a question was drawn.
    #[must_use]
    pub fn question(&self) -> Option<&str> {
        match self {
            Drawn::Question(text) => Some(text),
            Drawn::Word(_) => None,
        }
    }

    /// The drawn word, if a word was drawn.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match self {
            Drawn::Word(text) => Some(text),
            Drawn::Question(_) => None,
        }
    }
}
