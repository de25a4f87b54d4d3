use log::debug;
use yew::prelude::*;

use crate::effects::snowfall::{generate, Particle, SnowfallPreset};

#[derive(Properties, PartialEq)]
pub struct SnowflakeProps {
    pub particle: Particle,
}

#[function_component(Snowflake)]
pub fn snowflake(props: &SnowflakeProps) -> Html {
    html! {
        <div class="snowflake" style={props.particle.style()}>
            <div class="snowflake__glyph">{"❄"}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SnowfallProps {
    pub preset: SnowfallPreset,
}

/// Full-page layer of falling flakes. The flakes are drawn once when the
/// layer mounts; later preset changes do not reshuffle them.
#[function_component(Snowfall)]
pub fn snowfall(props: &SnowfallProps) -> Html {
    let preset = props.preset;
    let flakes = use_state(move || {
        let mut rng = fastrand::Rng::new();
        let flakes = generate(preset, &mut rng);
        debug!("Generated {} snowflakes ({:?})", flakes.len(), preset);
        flakes
    });

    html! {
        <div class="snowfall">
            { for flakes.iter().map(|flake| html! {
                <Snowflake key={flake.id} particle={flake.clone()} />
            })}
        </div>
    }
}
