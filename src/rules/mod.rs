//! Game rules: mark matrices and bingo detection.
//!
//! The rules are pure. Sessions call [`check_win`] after every toggle for
//! the toggled group only.

pub mod marks;
pub mod win;

pub use marks::MarkMatrix;
pub use win::{check_win, winning_lines, WinLine};
