//! The set of doors already opened.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::door::Door;

/// Doors the visitor has already opened. Serialized as a JSON array in
/// ascending order; input order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpenedDoors(BTreeSet<Door>);

impl OpenedDoors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, door: Door) -> bool {
        self.0.contains(&door)
    }

    /// Returns `true` when the door was not already open.
    pub fn insert(&mut self, door: Door) -> bool {
        self.0.insert(door)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Door> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Door> for OpenedDoors {
    fn from_iter<T: IntoIterator<Item = Door>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
