use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icon::Icon;
use crate::scroll::scroll_to_section;

pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { id: "home", label: "Home", icon: "home" },
    NavItem { id: "about", label: "About", icon: "info" },
    NavItem { id: "contact", label: "Contact", icon: "mail" },
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_bool_toggle(false);

    let go_to = {
        let menu_open = menu_open.clone();
        move |section: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if scroll_to_section(section) {
                    menu_open.set(false);
                }
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.toggle())
    };

    html! {
        <header class="site-header">
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(2, 6, 23, 0.9);
                        backdrop-filter: blur(24px);
                        border-bottom: 1px solid rgba(30, 41, 59, 0.5);
                    }
                    .site-nav {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                    }
                    .nav-row {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .brand-mark {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(135deg, #6366f1, #7c3aed);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: none;
                        border: none;
                        color: #94a3b8;
                        font-weight: 500;
                        cursor: pointer;
                        transition: color 0.2s;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .nav-cta {
                        background: #4f46e5;
                        color: #fff;
                        border: none;
                        padding: 0.625rem 1.5rem;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.2s, background 0.2s;
                    }
                    .nav-cta:hover {
                        background: #4338ca;
                        transform: scale(1.05);
                    }
                    .menu-button {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .menu-button {
                            display: flex;
                        }
                        .mobile-menu.open {
                            display: flex;
                            flex-direction: column;
                            gap: 0.75rem;
                            padding: 1rem 0;
                            margin-top: 1rem;
                            border-top: 1px solid rgba(30, 41, 59, 0.5);
                        }
                        .mobile-menu .nav-cta {
                            width: 100%;
                            padding: 0.75rem 1.5rem;
                        }
                    }
                "#}
            </style>
            <nav class="site-nav">
                <div class="nav-row">
                    <div class="brand">
                        <div class="brand-mark">
                            <Icon name="sparkles" size={20} />
                        </div>
                        <span>{"Brand"}</span>
                    </div>

                    <div class="nav-links">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <button key={item.id} class="nav-link" onclick={go_to(item.id)}>
                                <Icon name={item.icon} size={18} />
                                {item.label}
                            </button>
                        }) }
                        <button class="nav-cta" onclick={go_to("contact")}>{"Get Started"}</button>
                    </div>

                    <button class="menu-button" onclick={toggle_menu} aria-label="Toggle menu">
                        <Icon name={if *menu_open { "x" } else { "menu" }} size={24} />
                    </button>
                </div>

                <div class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <button key={item.id} class="nav-link" onclick={go_to(item.id)}>
                            <Icon name={item.icon} size={20} />
                            {item.label}
                        </button>
                    }) }
                    <button class="nav-cta" onclick={go_to("contact")}>{"Get Started"}</button>
                </div>
            </nav>
        </header>
    }
}
