//! The calendar state machine.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::constants::{DOOR_ORDER_KEY, OPENED_DOORS_KEY};
use crate::date::{CalendarDate, Clock, StatusMessage};
use crate::door::{Door, DoorOrder};
use crate::opened::OpenedDoors;
use crate::storage::{KeyValueStore, load_json_or_default, remove_record, save_json};

/// How a single grid cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorStatus {
    Locked,
    Available,
    Opened,
}

/// One grid cell as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorCell {
    pub cell: usize,
    pub door: Door,
    pub status: DoorStatus,
}

/// Opened doors plus the shuffled order, kept in sync with a [`KeyValueStore`].
///
/// Availability is never cached: every query asks the clock again.
#[derive(Debug, Clone)]
pub struct CalendarState<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    store: S,
    clock: C,
    rng: ChaCha20Rng,
    order: DoorOrder,
    opened: OpenedDoors,
}

impl<S, C> CalendarState<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Rehydrate from `store`, generating and persisting a fresh order when
    /// none is stored. Unreadable records fall back to their defaults.
    pub fn initialize(store: S, clock: C, seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let opened = load_json_or_default::<_, OpenedDoors>(&store, OPENED_DOORS_KEY)
            .unwrap_or_default();
        let order = match load_json_or_default::<_, DoorOrder>(&store, DOOR_ORDER_KEY) {
            Some(order) => order,
            None => {
                let order = DoorOrder::shuffled(&mut rng);
                log::debug!("generated door order {:?}", order.as_slice());
                save_json(&store, DOOR_ORDER_KEY, &order);
                order
            }
        };
        Self {
            store,
            clock,
            rng,
            order,
            opened,
        }
    }

    #[must_use]
    pub fn today(&self) -> CalendarDate {
        self.clock.today()
    }

    #[must_use]
    pub fn is_available(&self, door: Door) -> bool {
        self.today().is_available(door)
    }

    #[must_use]
    pub fn is_open(&self, door: Door) -> bool {
        self.opened.contains(door)
    }

    /// Open `door` if today allows it. Already-open and not-yet-available
    /// doors are left alone. Returns whether the opened set changed.
    pub fn open(&mut self, door: Door) -> bool {
        if self.opened.contains(door) || !self.is_available(door) {
            return false;
        }
        self.opened.insert(door);
        save_json(&self.store, OPENED_DOORS_KEY, &self.opened);
        log::info!("opened door {door}");
        true
    }

    /// Close every door and reshuffle the grid.
    pub fn reset(&mut self) {
        let order = DoorOrder::shuffled(&mut self.rng);
        self.opened.clear();
        self.order = order;
        remove_record(&self.store, OPENED_DOORS_KEY);
        save_json(&self.store, DOOR_ORDER_KEY, &self.order);
        log::info!("calendar reset");
    }

    #[must_use]
    pub fn status_message(&self) -> StatusMessage {
        self.today().status()
    }

    #[must_use]
    pub fn today_label(&self) -> String {
        self.today().today_label()
    }

    #[must_use]
    pub fn door_status(&self, door: Door) -> DoorStatus {
        self.status_on(self.today(), door)
    }

    /// Grid cells in display order. The clock is read once for the whole grid.
    pub fn doors(&self) -> impl ExactSizeIterator<Item = DoorCell> + '_ {
        let today = self.today();
        self.order.iter().enumerate().map(move |(cell, door)| DoorCell {
            cell,
            door,
            status: self.status_on(today, door),
        })
    }

    fn status_on(&self, today: CalendarDate, door: Door) -> DoorStatus {
        if self.opened.contains(door) {
            DoorStatus::Opened
        } else if today.is_available(door) {
            DoorStatus::Available
        } else {
            DoorStatus::Locked
        }
    }

    #[must_use]
    pub const fn order(&self) -> &DoorOrder {
        &self.order
    }

    #[must_use]
    pub const fn opened(&self) -> &OpenedDoors {
        &self.opened
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Swap the clock, keeping doors and order. Used when the page stays open
    /// across midnight or by simulations stepping through the season.
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> CalendarState<S, C2> {
        CalendarState {
            store: self.store,
            clock,
            rng: self.rng,
            order: self.order,
            opened: self.opened,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::FixedClock;
    use crate::storage::MemoryStore;

    fn door(n: u32) -> Door {
        Door::new(n).unwrap()
    }

    fn state_on(day: CalendarDate) -> CalendarState<MemoryStore, FixedClock> {
        CalendarState::initialize(MemoryStore::new(), FixedClock(day), 7)
    }

    #[test]
    fn initialize_persists_order_but_not_opened() {
        let state = state_on(CalendarDate::december(1));
        assert!(state.store().contains(DOOR_ORDER_KEY));
        assert!(!state.store().contains(OPENED_DOORS_KEY));
        assert!(state.opened().is_empty());
    }

    #[test]
    fn open_is_gated_and_idempotent() {
        let mut state = state_on(CalendarDate::december(3));
        assert!(state.open(door(2)));
        assert!(!state.open(door(2)));
        assert!(!state.open(door(4)));
        assert_eq!(state.opened().len(), 1);
        assert_eq!(
            state.store().get(OPENED_DOORS_KEY).unwrap().as_deref(),
            Some("[2]")
        );
    }

    #[test]
    fn doors_follow_order_and_report_status() {
        let mut state = state_on(CalendarDate::december(2));
        state.open(door(1));
        let cells: Vec<DoorCell> = state.doors().collect();
        assert_eq!(cells.len(), 24);
        for cell in &cells {
            assert_eq!(state.order().as_slice()[cell.cell], cell.door);
            assert_eq!(state.door_status(cell.door), cell.status);
        }
        assert_eq!(state.door_status(door(1)), DoorStatus::Opened);
        assert_eq!(state.door_status(door(2)), DoorStatus::Available);
        assert_eq!(state.door_status(door(3)), DoorStatus::Locked);
    }

    #[test]
    fn door_status_tracks_the_clock() {
        let mut state = state_on(CalendarDate::december(5));
        state.open(door(5));
        let state = state.with_clock(FixedClock(CalendarDate::new(1, 5)));
        assert_eq!(state.door_status(door(5)), DoorStatus::Opened);
        assert_eq!(state.door_status(door(1)), DoorStatus::Locked);
        assert!(
            state
                .doors()
                .all(|c| (c.status == DoorStatus::Opened) == (c.door == door(5)))
        );
    }

    #[test]
    fn with_clock_moves_the_day_forward() {
        let state = state_on(CalendarDate::december(1));
        let mut later = state.with_clock(FixedClock(CalendarDate::december(10)));
        assert!(later.open(door(10)));
        assert_eq!(later.today_label(), "December 10");
    }
}
