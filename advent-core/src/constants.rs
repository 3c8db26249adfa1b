//! Calendar constants shared by the core state machine and its front ends.
//!
//! Storage keys match the records written by earlier releases of the widget
//! so that existing browser data keeps rehydrating.

/// Number of doors on the calendar.
pub const DOOR_COUNT: u8 = 24;

/// December as a 1-based month number.
pub const DECEMBER: u32 = 12;

// Storage keys -------------------------------------------------------------
/// Key of the JSON array holding opened door numbers.
pub const OPENED_DOORS_KEY: &str = "advent-calendar-open-windows";
/// Key of the JSON array holding the shuffled grid order.
pub const DOOR_ORDER_KEY: &str = "advent-calendar-positions";

// Assets -------------------------------------------------------------------
pub(crate) const IMAGE_DIR: &str = "images/days/";
pub(crate) const IMAGE_EXT: &str = "jpeg";

// Copy ---------------------------------------------------------------------
pub const CALENDAR_TITLE: &str = "Bluebell Advent Calendar";
pub(crate) const STATUS_NOT_STARTED: &str = "The advent calendar will be available in December!";
pub(crate) const STATUS_ALL_OPEN: &str = "All advent calendar doors are now available!";
pub(crate) const STATUS_COME_BACK: &str = "Come back each day for a new picture of Bluebell!";
pub(crate) const TODAY_NOT_DECEMBER: &str = "Not December yet!";
