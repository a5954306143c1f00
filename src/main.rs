use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod reveal;
mod scroll;
mod components {
    pub mod footer;
    pub mod icon;
    pub mod nav;
    pub mod scroll_reveal;
}
mod contact {
    pub mod controller;
    pub mod hook;
    pub mod relay;
    pub mod submission;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod landing;
}

use components::{footer::Footer, nav::Nav};
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
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        // single page site, every other path lands on the home page
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="site">
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
