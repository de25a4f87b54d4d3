use gloo_timers::callback::Timeout;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config::{BADGE_POP_MS, MAX_TILT_DEG};
use crate::effects::counter::ClickCounter;
use crate::effects::tilt::{CardRect, TiltState};

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    /// Glyph shown above the card body. Clicking the card spins it.
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or(MAX_TILT_DEG)]
    pub max_tilt_deg: f64,
    #[prop_or(true)]
    pub counted: bool,
    #[prop_or_default]
    pub animation_delay_s: f64,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    let tilt = use_state(TiltState::default);
    let counter = use_state(ClickCounter::new);
    let popping = use_state(|| false);
    let pop_timeout = use_mut_ref(|| None::<Timeout>);

    let onmousemove = {
        let node = node.clone();
        let tilt = tilt.clone();
        let max_tilt_deg = props.max_tilt_deg;
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = node.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                let x = f64::from(e.client_x()) - rect.left();
                let y = f64::from(e.client_y()) - rect.top();
                tilt.set((*tilt).moved(CardRect::new(rect.width(), rect.height()), x, y, max_tilt_deg));
            }
        })
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| {
            tilt.set((*tilt).left());
        })
    };

    let onclick = {
        let counter = counter.clone();
        let popping = popping.clone();
        let pop_timeout = pop_timeout.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *counter;
            next.activate();
            counter.set(next);

            popping.set(true);
            let popping = popping.clone();
            // Replacing the handle drops (and cancels) any pending reset
            *pop_timeout.borrow_mut() = Some(Timeout::new(BADGE_POP_MS, move || {
                popping.set(false);
            }));
        })
    };

    let card_style = format!(
        "transform: {}; animation-delay: {}s;",
        tilt.transform(),
        props.animation_delay_s
    );

    html! {
        <div
            ref={node}
            class={classes!("tilt-card", props.class.clone(), tilt.hovered.then(|| "hovered"))}
            style={card_style}
            {onmousemove}
            {onmouseleave}
            onclick={props.counted.then(|| onclick)}
        >
            {
                if let Some(badge) = counter.badge() {
                    html! {
                        <span class={classes!("click-badge", (*popping).then(|| "pop"))}>{badge}</span>
                    }
                } else {
                    html! {}
                }
            }
            {
                if let Some(icon) = &props.icon {
                    html! {
                        <div class="tilt-card__icon" style={format!("transform: {};", counter.transform())}>
                            <span class="tilt-card__glyph">{icon.clone()}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            { for props.children.iter() }
        </div>
    }
}
