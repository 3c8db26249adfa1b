use crate::components::button::Button;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub today_label: AttrValue,
    pub on_reset: Callback<()>,
}

/// Title bar with today's date and the reset control.
#[function_component(CalendarHeader)]
pub fn calendar_header(p: &Props) -> Html {
    let on_reset = {
        let cb = p.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <header class="calendar-header" role="banner">
            <h1 id="calendar-title" class="calendar-title">{ p.title.clone() }</h1>
            <div class="calendar-header__actions">
                <span class="calendar-today">{ format!("Today: {}", p.today_label) }</span>
                <Button
                    id={AttrValue::from("reset-btn")}
                    class={classes!("btn-danger")}
                    label={AttrValue::from("Reset Calendar")}
                    onclick={on_reset}
                />
            </div>
        </header>
    }
}
