use advent_core::{Door, DoorCell};
use yew::prelude::*;

use crate::components::door_tile::DoorTile;
use crate::paths::door_image_url;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cells: Vec<DoorCell>,
    pub on_open: Callback<Door>,
}

#[function_component(DoorGrid)]
pub fn door_grid(p: &Props) -> Html {
    html! {
        <div class="door-grid" role="list">
            { for p.cells.iter().map(|c| html! {
                <DoorTile
                    key={c.cell}
                    cell={c.cell}
                    door={c.door}
                    status={c.status}
                    image_src={AttrValue::from(door_image_url(c.door))}
                    on_open={p.on_open.clone()}
                />
            }) }
        </div>
    }
}
