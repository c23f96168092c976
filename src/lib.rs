//! # classroom-bingo
//!
//! Game core for a classroom vocabulary bingo. Four groups each get a fixed
//! 4x4 card of topic words, mark cells as the teacher reads questions, and
//! win by completing a row, column or diagonal.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Cards are a pure function of a seed and the
//!    vocabulary. Draws use a seeded ChaCha8 stream, so whole sessions replay.
//!
//! 2. **Explicit State**: A `Session` value owns every piece of mutable
//!    state. No globals, no interior mutability.
//!
//! 3. **Rendering Is Elsewhere**: Transitions return plain data
//!    (`ToggleOutcome`, `SessionSnapshot`). How a win is announced is up to
//!    the caller.
//!
//! ## Modules
//!
//! - `core`: Group IDs, errors, RNG, configuration
//! - `content`: Default vocabulary and questions
//! - `cards`: Bingo cards and their generator
//! - `rules`: Mark matrices and win detection
//! - `session`: Session state, draws, view, snapshots
//!
//! ## Example
//!
//! ```
//! use classroom_bingo::{BingoConfig, GroupId, Session};
//!
//! let mut session = Session::new(BingoConfig::default()).unwrap();
//! let group = GroupId::new(1).unwrap();
//!
//! for i in 0..4 {
//!     let outcome = session.toggle_mark(group, i, i).unwrap();
//!     assert_eq!(outcome.was_new_win, i == 3);
//! }
//! assert!(session.is_winner(group));
//! ```

pub mod core;
pub mod content;
pub mod cards;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{BingoConfig, BingoError, DrawRng, GroupId, GroupMap, GROUP_COUNT};

pub use crate::cards::{generate_card, BingoCard, Cell, CARD_CELLS, GRID_SIZE};

pub use crate::rules::{check_win, winning_lines, MarkMatrix, WinLine};

pub use crate::session::{
    Drawn, GroupSnapshot, GroupStatus, Mode, Session, SessionSnapshot, ToggleOutcome, View,
};
