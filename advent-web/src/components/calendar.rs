use advent_core::{CALENDAR_TITLE, CalendarState, Clock, Door, DoorCell, KeyValueStore};
use yew::prelude::*;

use crate::components::door_grid::DoorGrid;
use crate::components::header::CalendarHeader;
use crate::components::status_line::StatusLine;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub today_label: AttrValue,
    pub status: AttrValue,
    pub cells: Vec<DoorCell>,
    pub on_open: Callback<Door>,
    pub on_reset: Callback<()>,
}

impl Props {
    /// Snapshot everything the view needs from `state`, reading the clock once
    /// per field so each render reflects the current date.
    #[must_use]
    pub fn from_state<S, C>(
        state: &CalendarState<S, C>,
        on_open: Callback<Door>,
        on_reset: Callback<()>,
    ) -> Self
    where
        S: KeyValueStore,
        C: Clock,
    {
        Self {
            today_label: AttrValue::from(state.today_label()),
            status: AttrValue::from(state.status_message().to_string()),
            cells: state.doors().collect(),
            on_open,
            on_reset,
        }
    }
}

/// The whole widget: header, door grid and status line.
#[function_component(CalendarView)]
pub fn calendar_view(p: &Props) -> Html {
    html! {
        <section class="calendar-card" aria-labelledby="calendar-title">
            <CalendarHeader
                title={AttrValue::from(CALENDAR_TITLE)}
                today_label={p.today_label.clone()}
                on_reset={p.on_reset.clone()}
            />
            <DoorGrid cells={p.cells.clone()} on_open={p.on_open.clone()} />
            <StatusLine message={p.status.clone()} />
        </section>
    }
}
