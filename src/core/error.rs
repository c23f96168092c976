//! Error type shared by the whole crate.

use thiserror::Error;

use super::group::GroupId;

/// Errors raised by card generation, configuration and session operations.
///
/// Toggling, drawing, resetting and win checks are total over valid
/// arguments. Only bad configuration or out-of-range identifiers fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BingoError {
    /// The vocabulary cannot fill a card without repeating words.
    #[error("insufficient vocabulary: {available} distinct words, a card needs {required}")]
    InsufficientVocabulary { available: usize, required: usize },

    /// The question list is empty, so questions cannot be drawn.
    #[error("question list is empty")]
    EmptyQuestionList,

    /// Group number outside 1-4.
    #[error("invalid group {0}: groups are numbered 1 to 4")]
    InvalidGroup(u8),

    /// Cell coordinate outside the 4x4 grid.
    #[error("invalid cell ({row}, {col}): rows and columns are 0 to 3")]
    InvalidCell { row: usize, col: usize },

    /// The group already won; its card is closed until the next reset.
    #[error("{0} already won and is locked until reset")]
    GroupLocked(GroupId),

    /// Cards cannot be opened while the teacher panel is shown.
    #[error("teacher panel is active")]
    TeacherModeActive,
}
