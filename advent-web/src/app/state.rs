#[cfg(target_arch = "wasm32")]
use crate::dom::{Interval, console_error, js_error_message};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// How often the widget re-reads the clock while the page stays open.
pub const REFRESH_MS: i32 = 60_000;

/// Re-render on a timer so doors unlock at midnight without a reload.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_periodic_refresh(period_ms: i32) {
    let trigger = use_force_update();
    use_effect_with(period_ms, move |&period_ms| {
        let interval = Interval::new(period_ms, move || trigger.force_update());
        if let Err(err) = &interval {
            console_error(&format!(
                "calendar refresh timer unavailable: {}",
                js_error_message(err)
            ));
        }
        move || drop(interval)
    });
}
