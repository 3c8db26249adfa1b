//! Advent calendar core
//!
//! Platform-agnostic state machine for the Bluebell advent calendar: a
//! shuffled grid of 24 doors, each opening once its December day arrives.
//! Persistence and the current date are supplied by the front end through the
//! [`KeyValueStore`] and [`Clock`] traits.

pub mod constants;
pub mod date;
pub mod door;
pub mod opened;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use constants::{CALENDAR_TITLE, DECEMBER, DOOR_COUNT, DOOR_ORDER_KEY, OPENED_DOORS_KEY};
pub use date::{CalendarDate, Clock, FixedClock, StatusMessage};
pub use door::{Door, DoorOrder, InvalidDoor, InvalidOrder};
pub use opened::OpenedDoors;
pub use state::{CalendarState, DoorCell, DoorStatus};
pub use storage::{
    KeyValueStore, LoadError, MemoryStore, load_json, load_json_or_default, remove_record,
    save_json,
};
