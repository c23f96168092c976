//! What the screen is showing: the group list, one group's card, or the
//! teacher panel.

use serde::{Deserialize, Serialize};

use crate::core::GroupId;

/// Top-level screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Group list, or a single group's card when one is open.
    #[default]
    Groups,
    /// Teacher panel with draws and group statuses.
    Teacher,
}

/// Current screen plus the open card, if any.
///
/// A card can only be open in [`Mode::Groups`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct View {
    mode: Mode,
    open_card: Option<GroupId>,
}

impl View {
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Group whose card is on screen.
    #[must_use]
    pub fn open_card(&self) -> Option<GroupId> {
        self.open_card
    }

    pub(crate) fn show_groups(&mut self) {
        self.mode = Mode::Groups;
        self.open_card = None;
    }

    pub(crate) fn show_teacher_panel(&mut self) {
        self.mode = Mode::Teacher;
        self.open_card = None;
    }

    pub(crate) fn open(&mut self, group: GroupId) {
        debug_assert_eq!(self.mode, Mode::Groups);
        self.open_card = Some(group);
    }

    pub(crate) fn close(&mut self) {
        self.open_card = None;
    }
}

/// Progress shown on group badges and the teacher panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupStatus {
    Playing,
    Winner,
}
