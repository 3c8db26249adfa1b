//! Dates, the availability rule and the derived status copy.

use std::fmt;

use crate::constants::{
    DECEMBER, DOOR_COUNT, STATUS_ALL_OPEN, STATUS_COME_BACK, STATUS_NOT_STARTED,
    TODAY_NOT_DECEMBER,
};
use crate::door::Door;

/// Calendar date reduced to what the availability rule needs.
///
/// `month` is 1-based (December = 12). Front ends reading a 0-based month
/// convert with [`CalendarDate::from_zero_based`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    #[must_use]
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    #[must_use]
    pub const fn december(day: u32) -> Self {
        Self::new(DECEMBER, day)
    }

    #[must_use]
    pub const fn from_zero_based(month0: u32, day: u32) -> Self {
        Self::new(month0 + 1, day)
    }

    #[must_use]
    pub const fn is_december(self) -> bool {
        self.month == DECEMBER
    }

    /// A door is available in December once its day has come.
    #[must_use]
    pub fn is_available(self, door: Door) -> bool {
        self.is_december() && self.day >= u32::from(door.number())
    }

    #[must_use]
    pub fn status(self) -> StatusMessage {
        if !self.is_december() {
            StatusMessage::NotStarted
        } else if self.day >= u32::from(DOOR_COUNT) {
            StatusMessage::AllAvailable
        } else {
            StatusMessage::InProgress { day: self.day }
        }
    }

    /// Short label for the header, e.g. `December 3`.
    #[must_use]
    pub fn today_label(self) -> String {
        if self.is_december() {
            format!("December {}", self.day)
        } else {
            TODAY_NOT_DECEMBER.to_string()
        }
    }
}

/// Source of "today" for availability checks.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}

/// Unlock progress shown under the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    NotStarted,
    InProgress { day: u32 },
    AllAvailable,
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => f.write_str(STATUS_NOT_STARTED),
            Self::AllAvailable => f.write_str(STATUS_ALL_OPEN),
            Self::InProgress { day } if *day <= 1 => {
                write!(f, "Find and open door 1. {STATUS_COME_BACK}")
            }
            Self::InProgress { day } => {
                write!(f, "Find and open doors 1-{day}. {STATUS_COME_BACK}")
            }
        }
    }
}
