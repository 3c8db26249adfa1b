use crate::clock::BrowserClock;
use crate::storage::BrowserStore;
use advent_core::CalendarState;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

pub mod handlers;
pub mod state;

/// Calendar wired to `localStorage` and the visitor's local date.
pub type BrowserCalendar = CalendarState<BrowserStore, BrowserClock>;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    use crate::components::calendar::{CalendarView, Props};

    let calendar = use_state(|| {
        BrowserCalendar::initialize(BrowserStore, BrowserClock, crate::clock::session_seed())
    });
    state::use_periodic_refresh(state::REFRESH_MS);

    let on_open = handlers::build_open(&calendar);
    let on_reset = handlers::build_reset(&calendar);
    let props = Props::from_state(&*calendar, on_open, on_reset);

    html! {
        <main id="main" role="main" class="calendar-page">
            <CalendarView ..props />
        </main>
    }
}
