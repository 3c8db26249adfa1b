use advent_core::{CalendarDate, CalendarState, Door, FixedClock, MemoryStore};
use advent_web::components::calendar::{CalendarView, Props as CalendarProps};
use advent_web::components::door_grid::{DoorGrid, Props as GridProps};
use advent_web::components::header::{CalendarHeader, Props as HeaderProps};
use advent_web::components::status_line::{Props as StatusProps, StatusLine};
use futures::executor::block_on;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn calendar_on(date: CalendarDate) -> CalendarState<MemoryStore, FixedClock> {
    CalendarState::initialize(MemoryStore::new(), FixedClock(date), 0xC0FFEE)
}

fn render_calendar(state: &CalendarState<MemoryStore, FixedClock>) -> String {
    let props = CalendarProps::from_state(state, Callback::noop(), Callback::noop());
    block_on(LocalServerRenderer::<CalendarView>::with_props(props).render())
}

#[test]
fn header_renders_title_today_and_reset() {
    let props = HeaderProps {
        title: AttrValue::from("Bluebell Advent Calendar"),
        today_label: AttrValue::from("December 4"),
        on_reset: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CalendarHeader>::with_props(props).render());
    assert!(html.contains("Bluebell Advent Calendar"));
    assert!(html.contains("Today: December 4"));
    assert!(html.contains("reset-btn"));
    assert!(html.contains("Reset Calendar"));
}

#[test]
fn status_line_is_a_live_region() {
    let props = StatusProps {
        message: AttrValue::from("All advent calendar doors are now available!"),
    };
    let html = block_on(LocalServerRenderer::<StatusLine>::with_props(props).render());
    assert!(html.contains("aria-live=\"polite\""));
    assert!(html.contains("All advent calendar doors are now available!"));
}

#[test]
fn grid_renders_cells_in_shuffled_order() {
    let state = calendar_on(CalendarDate::december(1));
    let props = GridProps {
        cells: state.doors().collect(),
        on_open: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DoorGrid>::with_props(props).render());

    let mut cursor = 0;
    for door in state.order().iter() {
        let marker = format!("data-door=\"{door}\"");
        let found = html[cursor..]
            .find(&marker)
            .unwrap_or_else(|| panic!("door {door} missing or out of order"));
        cursor += found + marker.len();
    }
}

#[test]
fn off_season_calendar_is_fully_locked() {
    let state = calendar_on(CalendarDate::new(7, 14));
    let html = render_calendar(&state);
    assert_eq!(html.matches("door--locked").count(), 24);
    assert!(!html.contains("door--available"));
    assert!(html.contains("Today: Not December yet!"));
    assert!(html.contains("The advent calendar will be available in December!"));
}

#[test]
fn december_third_shows_progress_and_opened_picture() {
    let mut state = calendar_on(CalendarDate::december(3));
    assert!(state.open(Door::new(2).unwrap()));
    let html = render_calendar(&state);

    assert_eq!(html.matches("door--opened").count(), 1);
    assert_eq!(html.matches("door--available").count(), 2);
    assert_eq!(html.matches("door--locked").count(), 21);
    assert!(html.contains("images/days/2.jpeg"));
    assert!(html.contains("Cat 2"));
    assert!(html.contains("Find and open doors 1-3."));
    assert!(html.contains("Today: December 3"));
}

#[test]
fn reset_returns_view_to_closed_doors() {
    let mut state = calendar_on(CalendarDate::december(24));
    for door in Door::all() {
        state.open(door);
    }
    assert_eq!(render_calendar(&state).matches("door--opened").count(), 24);

    state.reset();
    let html = render_calendar(&state);
    assert_eq!(html.matches("door--opened").count(), 0);
    assert_eq!(html.matches("door--available").count(), 24);
}
