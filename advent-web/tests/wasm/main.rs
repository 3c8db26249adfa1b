#![cfg(target_arch = "wasm32")]

use advent_core::{
    CalendarDate, CalendarState, DOOR_ORDER_KEY, DoorOrder, FixedClock, KeyValueStore,
    OPENED_DOORS_KEY,
};
use advent_web::app::App;
use advent_web::dom;
use advent_web::storage::BrowserStore;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn clear_records() {
    let store = BrowserStore;
    store.remove(OPENED_DOORS_KEY).expect("clear opened");
    store.remove(DOOR_ORDER_KEY).expect("clear order");
}

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
fn browser_store_round_trips_values() {
    let store = BrowserStore;
    store.set("advent-test-key", "[1,2]").expect("set");
    assert_eq!(
        store.get("advent-test-key").expect("get").as_deref(),
        Some("[1,2]")
    );
    store.remove("advent-test-key").expect("remove");
    assert_eq!(store.get("advent-test-key").expect("get"), None);
}

#[wasm_bindgen_test]
fn calendar_rehydrates_from_local_storage() {
    clear_records();
    let mut first =
        CalendarState::initialize(BrowserStore, FixedClock(CalendarDate::december(6)), 1);
    assert!(first.open(advent_core::Door::new(6).expect("door")));

    let second =
        CalendarState::initialize(BrowserStore, FixedClock(CalendarDate::december(6)), 2);
    assert_eq!(second.order(), first.order());
    assert_eq!(second.opened(), first.opened());
    clear_records();
}

#[wasm_bindgen_test]
fn corrupt_local_storage_does_not_break_startup() {
    let store = BrowserStore;
    store.set(OPENED_DOORS_KEY, "{not json").expect("seed opened");
    store.set(DOOR_ORDER_KEY, "[1,1,1]").expect("seed order");

    let calendar =
        CalendarState::initialize(BrowserStore, FixedClock(CalendarDate::december(1)), 3);
    assert!(calendar.opened().is_empty());
    let stored = store.get(DOOR_ORDER_KEY).expect("read order").expect("order");
    let parsed: DoorOrder = serde_json::from_str(&stored).expect("valid order persisted");
    assert_eq!(&parsed, calendar.order());
    clear_records();
}

#[wasm_bindgen_test]
fn app_renders_grid_and_reset_reshuffles() {
    clear_records();
    Renderer::<App>::with_root(ensure_app_root()).render();
    let doc = dom::document().expect("document");

    let tiles = doc.query_selector_all(".door").expect("query tiles");
    assert_eq!(tiles.length(), 24);
    assert!(doc.get_element_by_id("calendar-status").is_some());

    let before = BrowserStore
        .get(DOOR_ORDER_KEY)
        .expect("read order")
        .expect("order persisted on mount");

    let reset: HtmlElement = doc
        .get_element_by_id("reset-btn")
        .expect("reset button")
        .dyn_into()
        .expect("reset is an HtmlElement");
    reset.click();

    let after = BrowserStore
        .get(DOOR_ORDER_KEY)
        .expect("read order")
        .expect("order persisted after reset");
    assert_ne!(before, after);
    assert_eq!(BrowserStore.get(OPENED_DOORS_KEY).expect("read opened"), None);
    clear_records();
}
