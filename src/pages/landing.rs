use yew::prelude::*;

use crate::pages::about::About;
use crate::pages::contact::ContactSection;
use crate::pages::hero::Hero;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main>
            <Hero />
            <About />
            <ContactSection />
        </main>
    }
}
