use chrono::Datelike;
use yew::prelude::*;

use crate::components::icon::Icon;
use crate::components::nav::NAV_ITEMS;
use crate::scroll::scroll_to_section;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #020617;
                        border-top: 1px solid #0f172a;
                        padding: 3rem 1.5rem;
                    }
                    .footer-row {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.125rem;
                        font-weight: 700;
                    }
                    .footer-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .footer-links button {
                        background: none;
                        border: none;
                        color: #64748b;
                        font-size: 0.875rem;
                        cursor: pointer;
                    }
                    .footer-links button:hover {
                        color: #fff;
                    }
                    .copyright {
                        color: #475569;
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .footer-row {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
            <div class="footer-row">
                <div class="footer-brand">
                    <Icon name="sparkles" size={16} />
                    <span>{"Brand"}</span>
                </div>
                <div class="footer-links">
                    { for NAV_ITEMS.iter().map(|item| {
                        let section = item.id;
                        html! {
                            <button key={section} onclick={Callback::from(move |_| { scroll_to_section(section); })}>
                                {item.label}
                            </button>
                        }
                    }) }
                </div>
                <div class="copyright">
                    {format!("© {} Brand. All rights reserved.", year)}
                </div>
            </div>
        </footer>
    }
}
