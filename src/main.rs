use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod error;
mod style;
mod state {
    pub mod lightbox;
    pub mod nav;
    pub mod paginator;
    pub mod parallax;
    pub mod reveal;
    pub mod scroll;
    pub mod wrap;
}
mod components {
    pub mod gallery;
    pub mod hero;
    pub mod icons;
    pub mod navigation;
    pub mod sections;
    pub mod testimonials;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

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
            html! { <Home /> }
        }
        Route::NotFound => {
            // Single-page site: unknown paths fall back to the landing page.
            warn!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
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
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        // Nothing to log to; keep rendering anyway.
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
