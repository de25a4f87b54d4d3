//! Helpers for the `wasm_bindgen_test` suites that mount real components.

use gloo_timers::future::TimeoutFuture;
use web_sys::{Element, EventTarget, MouseEvent, MouseEventInit};

/// Appends a fresh `<div id=..>` to the body to render into.
pub fn mount_root(id: &str) -> Element {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document available");
    let root = document
        .create_element("div")
        .expect("create test root");
    root.set_id(id);
    document
        .body()
        .expect("body available")
        .append_child(&root)
        .expect("append test root");
    root
}

pub fn dispatch_mouse(target: &EventTarget, kind: &str, client_x: i32, client_y: i32) {
    let mut init = MouseEventInit::new();
    init.client_x(client_x).client_y(client_y).bubbles(true);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init)
        .expect("build mouse event");
    target.dispatch_event(&event).expect("dispatch mouse event");
}

pub fn move_pointer(client_x: i32, client_y: i32) {
    let window = web_sys::window().expect("window available");
    dispatch_mouse(&window, "mousemove", client_x, client_y);
}

/// Lets the scheduler render and run effects.
pub async fn settle() {
    TimeoutFuture::new(20).await;
}
