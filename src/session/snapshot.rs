//! Plain-data view of a session for renderers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::draw::Drawn;
use super::view::{GroupStatus, Mode};
use crate::cards::BingoCard;
use crate::core::GroupId;
use crate::rules::{MarkMatrix, WinLine};

/// One group's card, marks and status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub group: GroupId,
    pub status: GroupStatus,
    pub card: BingoCard,
    pub marks: MarkMatrix,
    /// Completed lines, for highlighting.
    pub winning_lines: SmallVec<[WinLine; 4]>,
}

/// The whole session at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub mode: Mode,
    pub open_card: Option<GroupId>,
    pub drawn: Option<Drawn>,
    /// One entry per group, in group order.
    pub groups: Vec<GroupSnapshot>,
}

impl SessionSnapshot {
    /// Snapshot of one group.
    #[must_use]
    pub fn group(&self, group: GroupId) -> Option<&GroupSnapshot> {
        self.groups.iter().find(|g| g.group == group)
    }
}
