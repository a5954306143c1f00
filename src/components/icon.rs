use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Home,
    Info,
    Mail,
    Menu,
    X,
    Send,
    CheckCircle,
    ChevronRight,
    Sparkles,
    Target,
    Heart,
    MapPin,
    Phone,
    Clock,
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
}

impl IconName {
    /// Unknown names render as [`IconName::Info`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "home" => IconName::Home,
            "info" => IconName::Info,
            "mail" => IconName::Mail,
            "menu" => IconName::Menu,
            "x" => IconName::X,
            "send" => IconName::Send,
            "check-circle" => IconName::CheckCircle,
            "chevron-right" => IconName::ChevronRight,
            "sparkles" => IconName::Sparkles,
            "target" => IconName::Target,
            "heart" => IconName::Heart,
            "map-pin" => IconName::MapPin,
            "phone" => IconName::Phone,
            "clock" => IconName::Clock,
            "facebook" => IconName::Facebook,
            "twitter" => IconName::Twitter,
            "instagram" => IconName::Instagram,
            "linkedin" => IconName::Linkedin,
            _ => IconName::Info,
        }
    }

    // 24x24 stroke outlines
    fn paths(self) -> &'static [&'static str] {
        match self {
            IconName::Home => &["m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
            IconName::Info => &[
                "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0",
                "M12 16v-4",
                "M12 8h.01",
            ],
            IconName::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            IconName::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconName::X => &["M18 6 6 18", "m6 6 12 12"],
            IconName::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            IconName::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
            IconName::ChevronRight => &["m9 18 6-6-6-6"],
            IconName::Sparkles => &[
                "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z",
                "M5 3v4",
                "M19 17v4",
                "M3 5h4",
                "M17 19h4",
            ],
            IconName::Target => &[
                "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0",
                "M18 12a6 6 0 1 1-12 0a6 6 0 1 1 12 0",
                "M14 12a2 2 0 1 1-4 0a2 2 0 1 1 4 0",
            ],
            IconName::Heart => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            ],
            IconName::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M15 10a3 3 0 1 1-6 0a3 3 0 1 1 6 0",
            ],
            IconName::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            IconName::Clock => &["M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0", "M12 6v6l4 2"],
            IconName::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
            IconName::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            IconName::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            IconName::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M6 4a2 2 0 1 1-4 0a2 2 0 1 1 4 0",
            ],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: AttrValue,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let icon = IconName::from_name(&props.name);
    let size = props.size.to_string();

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
