//! Door numbers and the shuffled grid order.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{DOOR_COUNT, IMAGE_DIR, IMAGE_EXT};

/// A door number in `1..=24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Door(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("door number {0} is outside 1..=24")]
pub struct InvalidDoor(pub u32);

impl Door {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(DOOR_COUNT);

    /// Build a door from its number.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDoor`] when `number` is not in `1..=24`.
    pub fn new(number: u32) -> Result<Self, InvalidDoor> {
        u8::try_from(number)
            .ok()
            .filter(|n| (1..=DOOR_COUNT).contains(n))
            .map(Self)
            .ok_or(InvalidDoor(number))
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// All doors in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (1..=DOOR_COUNT).map(Self)
    }

    /// Relative path of the picture behind this door, e.g. `images/days/7.jpeg`.
    #[must_use]
    pub fn image_path(self) -> String {
        format!("{IMAGE_DIR}{}.{IMAGE_EXT}", self.0)
    }
}

impl TryFrom<u32> for Door {
    type Error = InvalidDoor;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Door> for u32 {
    fn from(door: Door) -> Self {
        Self::from(door.0)
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grid order: cell index to door number. Always a permutation of every door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Door>", into = "Vec<Door>")]
pub struct DoorOrder(Vec<Door>);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidOrder {
    #[error("expected {expected} doors, found {found}")]
    Length { expected: usize, found: usize },
    #[error("door {0} appears more than once")]
    Duplicate(Door),
}

impl DoorOrder {
    /// Doors in ascending order, before any shuffle.
    #[must_use]
    pub fn sorted() -> Self {
        Self(Door::all().collect())
    }

    /// Uniformly random permutation via an in-place Fisher–Yates shuffle.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut doors: Vec<Door> = Door::all().collect();
        for i in (1..doors.len()).rev() {
            let j = rng.gen_range(0..=i);
            doors.swap(i, j);
        }
        Self(doors)
    }

    /// Validate an arbitrary sequence as a full permutation.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOrder`] when the sequence is the wrong length or repeats a door.
    pub fn from_doors(doors: Vec<Door>) -> Result<Self, InvalidOrder> {
        let expected = usize::from(DOOR_COUNT);
        if doors.len() != expected {
            return Err(InvalidOrder::Length {
                expected,
                found: doors.len(),
            });
        }
        let mut seen = [false; DOOR_COUNT as usize];
        for door in &doors {
            let slot = &mut seen[usize::from(door.number() - 1)];
            if *slot {
                return Err(InvalidOrder::Duplicate(*door));
            }
            *slot = true;
        }
        Ok(Self(doors))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Door] {
        &self.0
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Door> + '_ {
        self.0.iter().copied()
    }

    /// Grid cell holding `door`.
    #[must_use]
    pub fn cell_of(&self, door: Door) -> Option<usize> {
        self.0.iter().position(|d| *d == door)
    }
}

impl TryFrom<Vec<Door>> for DoorOrder {
    type Error = InvalidOrder;

    fn try_from(value: Vec<Door>) -> Result<Self, Self::Error> {
        Self::from_doors(value)
    }
}

impl From<DoorOrder> for Vec<Door> {
    fn from(order: DoorOrder) -> Self {
        order.0
    }
}
