use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Latest pointer location in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_client(e: &MouseEvent) -> Self {
        Self::new(f64::from(e.client_x()), f64::from(e.client_y()))
    }
}

/// Forwards every window `mousemove` to `on_move` while the calling
/// component is mounted. The listener is removed on teardown.
#[hook]
pub fn use_pointer_tracker(on_move: Callback<PointerPosition>) {
    use_effect_with_deps(
        move |on_move| {
            let on_move = on_move.clone();
            let listener = web_sys::window().map(|window| {
                let move_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                    on_move.emit(PointerPosition::from_client(&e));
                }) as Box<dyn FnMut(MouseEvent)>);

                if let Err(e) = window.add_event_listener_with_callback(
                    "mousemove",
                    move_callback.as_ref().unchecked_ref(),
                ) {
                    warn!("Failed to register pointer listener: {:?}", e);
                } else {
                    debug!("Pointer listener registered");
                }
                (window, move_callback)
            });

            move || {
                if let Some((window, move_callback)) = listener {
                    if let Err(e) = window.remove_event_listener_with_callback(
                        "mousemove",
                        move_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Failed to remove pointer listener: {:?}", e);
                    } else {
                        debug!("Pointer listener removed");
                    }
                }
            }
        },
        on_move,
    );
}

/// Pointer position owned by the calling component.
#[hook]
pub fn use_pointer_position() -> PointerPosition {
    let position = use_state(PointerPosition::default);
    let on_move = {
        let setter = position.setter();
        use_callback(move |pos: PointerPosition, _: &()| setter.set(pos), ())
    };
    use_pointer_tracker(on_move);
    *position
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;

    use super::*;
    use crate::browser_test_support::{mount_root, move_pointer, settle};

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(PointerReadout)]
    fn pointer_readout() -> Html {
        let pos = use_pointer_position();
        html! { <span>{format!("{},{}", pos.x, pos.y)}</span> }
    }

    #[derive(Properties, PartialEq)]
    struct TrackerProps {
        on_move: Callback<PointerPosition>,
    }

    #[function_component(Tracker)]
    fn tracker(props: &TrackerProps) -> Html {
        use_pointer_tracker(props.on_move.clone());
        html! {}
    }

    #[wasm_bindgen_test(async)]
    async fn position_follows_latest_move() {
        let root = mount_root("pointer-position-root");
        let _handle = yew::Renderer::<PointerReadout>::with_root(root.clone()).render();
        settle().await;
        assert_eq!(root.text_content().as_deref(), Some("0,0"));

        move_pointer(120, 45);
        move_pointer(300, 80);
        settle().await;
        assert_eq!(root.text_content().as_deref(), Some("300,80"));
    }

    #[wasm_bindgen_test(async)]
    async fn listener_is_removed_on_unmount() {
        let root = mount_root("pointer-teardown-root");
        let seen = Rc::new(Cell::new(Vec::<PointerPosition>::new()));
        let on_move = {
            let seen = seen.clone();
            Callback::from(move |pos: PointerPosition| {
                let mut all = seen.take();
                all.push(pos);
                seen.set(all);
            })
        };
        let handle =
            yew::Renderer::<Tracker>::with_root_and_props(root, TrackerProps { on_move }).render();
        settle().await;

        move_pointer(10, 20);
        let recorded = seen.take();
        assert_eq!(recorded, vec![PointerPosition::new(10.0, 20.0)]);

        handle.destroy();
        settle().await;
        move_pointer(30, 40);
        assert!(seen.take().is_empty());
    }
}
