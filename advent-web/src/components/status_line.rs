use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub message: AttrValue,
}

#[function_component(StatusLine)]
pub fn status_line(p: &Props) -> Html {
    html! {
        <p id="calendar-status" class="calendar-status" role="status" aria-live="polite">
            { p.message.clone() }
        </p>
    }
}
