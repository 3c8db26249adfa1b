use advent_core::{CalendarState, Clock, Door, KeyValueStore};
use yew::prelude::*;

/// Open a door on a copy of the calendar and publish it when something changed.
pub fn build_open<S, C>(calendar: &UseStateHandle<CalendarState<S, C>>) -> Callback<Door>
where
    S: KeyValueStore + Clone + 'static,
    C: Clock + Clone + 'static,
{
    let calendar = calendar.clone();
    Callback::from(move |door: Door| {
        let mut next = (*calendar).clone();
        if next.open(door) {
            calendar.set(next);
        }
    })
}

pub fn build_reset<S, C>(calendar: &UseStateHandle<CalendarState<S, C>>) -> Callback<()>
where
    S: KeyValueStore + Clone + 'static,
    C: Clock + Clone + 'static,
{
    let calendar = calendar.clone();
    Callback::from(move |()| {
        let mut next = (*calendar).clone();
        next.reset();
        calendar.set(next);
    })
}
