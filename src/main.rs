use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod effects {
    pub mod counter;
    pub mod parallax;
    pub mod pointer;
    pub mod snowfall;
    pub mod tilt;
}
mod components {
    pub mod snowflake;
    pub mod tilt_card;
}
mod pages {
    pub mod landing;
}
#[cfg(all(test, target_arch = "wasm32"))]
mod browser_test_support;

use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
