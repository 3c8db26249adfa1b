use advent_core::{CalendarDate, Clock};

/// Reads the visitor's local date from `Date` on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn today(&self) -> CalendarDate {
        let now = js_sys::Date::new_0();
        CalendarDate::from_zero_based(now.get_month(), now.get_date())
    }
}

/// Seed for the door shuffle, drawn from the wall clock and `Math.random`.
#[must_use]
pub fn session_seed() -> u64 {
    let time_bits = js_sys::Date::now().to_bits();
    let noise_bits = js_sys::Math::random().to_bits();
    time_bits ^ noise_bits.rotate_left(29)
}
