use advent_core::{Door, DoorStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cell: usize,
    pub door: Door,
    pub status: DoorStatus,
    pub image_src: AttrValue,
    pub on_open: Callback<Door>,
}

/// One grid cell. Locked doors are inert, available doors open on click and
/// opened doors link to their picture.
#[function_component(DoorTile)]
pub fn door_tile(p: &Props) -> Html {
    let number = p.door.to_string();
    let cell = p.cell.to_string();
    match p.status {
        DoorStatus::Opened => html! {
            <div class="door door--opened" data-door={number.clone()} data-cell={cell}>
                <a class="door__link" href={p.image_src.clone()} target="_blank" rel="noopener noreferrer">
                    <img class="door__image" src={p.image_src.clone()} alt={format!("Cat {number}")} />
                </a>
            </div>
        },
        DoorStatus::Available => {
            let onclick = {
                let cb = p.on_open.clone();
                let door = p.door;
                Callback::from(move |_| cb.emit(door))
            };
            html! {
                <button type="button" class="door door--available" data-door={number.clone()} data-cell={cell}
                    aria-label={format!("Open door {number}")} {onclick}>
                    <span class="door__number">{ number }</span>
                </button>
            }
        }
        DoorStatus::Locked => html! {
            <button type="button" class="door door--locked" data-door={number.clone()} data-cell={cell}
                disabled={true} aria-disabled="true" aria-label={format!("Door {number} is still locked")}>
                <span class="door__number">{ number }</span>
            </button>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(status: DoorStatus) -> String {
        let props = Props {
            cell: 4,
            door: Door::new(9).unwrap(),
            status,
            image_src: AttrValue::from("/images/days/9.jpeg"),
            on_open: Callback::noop(),
        };
        block_on(LocalServerRenderer::<DoorTile>::with_props(props).render())
    }

    #[test]
    fn locked_tile_is_disabled_and_hides_image() {
        let html = render(DoorStatus::Locked);
        assert!(html.contains("door--locked"));
        assert!(html.contains("disabled"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn available_tile_shows_number() {
        let html = render(DoorStatus::Available);
        assert!(html.contains("door--available"));
        assert!(html.contains("Open door 9"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn opened_tile_links_picture() {
        let html = render(DoorStatus::Opened);
        assert!(html.contains("door--opened"));
        assert!(html.contains("/images/days/9.jpeg"));
        assert!(html.contains("Cat 9"));
        assert!(html.contains("noopener"));
    }
}
