//! Group identification and per-group data storage.
//!
//! ## GroupId
//!
//! Type-safe identifier for the four classroom groups, numbered 1-4.
//!
//! ## GroupMap
//!
//! Fixed per-group storage backed by an array for O(1) access.
//! Supports iteration and indexing by `GroupId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::BingoError;

/// Number of groups in a session.
pub const GROUP_COUNT: usize = 4;

/// Group identifier, 1-4.
///
/// Groups are numbered the way the classroom sees them: the first group is
/// `GroupId(1)`. Use [`GroupId::index`] for 0-based storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GroupId(u8);

impl GroupId {
    /// All groups in display order.
    pub const ALL: [GroupId; GROUP_COUNT] = [GroupId(1), GroupId(2), GroupId(3), GroupId(4)];

    /// Create a group ID from its 1-based number.
    ///
    /// ```
    /// use classroom_bingo::core::GroupId;
    ///
    /// assert_eq!(GroupId::new(3).unwrap().number(), 3);
    /// assert!(GroupId::new(0).is_err());
    /// assert!(GroupId::new(5).is_err());
    /// ```
    pub fn new(number: u8) -> Result<Self, BingoError> {
        if (1..=GROUP_COUNT as u8).contains(&number) {
            Ok(Self(number))
        } else {
            Err(BingoError::InvalidGroup(number))
        }
    }

    /// Get the 1-based group number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Get the 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Iterate over all groups in order.
    pub fn all() -> impl Iterator<Item = GroupId> {
        Self::ALL.into_iter()
    }
}

impl TryFrom<u8> for GroupId {
    type Error = BingoError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<GroupId> for u8 {
    fn from(group: GroupId) -> Self {
        group.0
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Grupo {}", self.0)
    }
}

/// Per-group data storage with O(1) access.
///
/// Always holds exactly one entry per group.
///
/// ## Example
///
/// ```
/// use classroom_bingo::core::{GroupId, GroupMap};
///
/// let mut scores: GroupMap<u32> = GroupMap::with_value(0);
/// let second = GroupId::new(2).unwrap();
///
/// scores[second] += 5;
/// assert_eq!(scores[second], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupMap<T> {
    data: [T; GROUP_COUNT],
}

impl<T> GroupMap<T> {
    /// Create a new GroupMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(GroupId) -> T) -> Self {
        Self {
            data: GroupId::ALL.map(&mut factory),
        }
    }

    /// Create a GroupMap from a fallible factory, stopping at the first error.
    pub fn try_new<E>(mut factory: impl FnMut(GroupId) -> Result<T, E>) -> Result<Self, E> {
        let mut values = Vec::with_capacity(GROUP_COUNT);
        for group in GroupId::ALL {
            values.push(factory(group)?);
        }
        let data = match values.try_into() {
            Ok(data) => data,
            Err(_) => unreachable!("one value per group"),
        };
        Ok(Self { data })
    }

    /// Create a new GroupMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new GroupMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a group's data.
    #[must_use]
    pub fn get(&self, group: GroupId) -> &T {
        &self.data[group.index()]
    }

    /// Get a mutable reference to a group's data.
    pub fn get_mut(&mut self, group: GroupId) -> &mut T {
        &mut self.data[group.index()]
    }

    /// Iterate over (GroupId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &T)> {
        GroupId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (GroupId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (GroupId, &mut T)> {
        GroupId::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<GroupId> for GroupMap<T> {
    type Output = T;

    fn index(&self, group: GroupId) -> &Self::Output {
        self.get(group)
    }
}

impl<T> IndexMut<GroupId> for GroupMap<T> {
    fn index_mut(&mut self, group: GroupId) -> &mut Self::Output {
        self.get_mut(group)
    }
}
