use yew::prelude::*;

use crate::reveal::{reveal_once, IntersectionSource, RevealError, RevealOptions};

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    /// Seconds to wait before the transition starts once revealed.
    #[prop_or(0.0)]
    pub delay: f64,
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let mut watch = None;
                if let Some(element) = node.cast::<web_sys::Element>() {
                    let on_reveal = {
                        let revealed = revealed.clone();
                        move || revealed.set(true)
                    };
                    match reveal_once(&IntersectionSource, &element, &RevealOptions::default(), on_reveal) {
                        Ok(w) => watch = Some(w),
                        Err(RevealError::Unsupported) => revealed.set(true),
                        Err(e) => {
                            log::warn!("Showing block without transition: {}", e);
                            revealed.set(true);
                        }
                    }
                }
                move || drop(watch)
            },
            (),
        );
    }

    let style = format!("transition-delay: {}s;", props.delay);

    html! {
        <div ref={node} class={classes!("reveal", (*revealed).then_some("revealed"))} {style}>
            <style>
                {r#"
                    .reveal {
                        opacity: 0;
                        transform: translateY(40px);
                        transition-property: opacity, transform;
                        transition-duration: 0.6s;
                        transition-timing-function: ease-out;
                    }
                    .reveal.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }
                "#}
            </style>
            { for props.children.iter() }
        </div>
    }
}
