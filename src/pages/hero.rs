use yew::prelude::*;

use crate::components::icon::Icon;
use crate::scroll::scroll_to_section;

const STATS: [(&str, &str); 4] = [
    ("10+", "Years Experience"),
    ("500+", "Projects Done"),
    ("100+", "Happy Clients"),
    ("24/7", "Support"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let start_journey = Callback::from(|_: MouseEvent| {
        scroll_to_section("contact");
    });
    let learn_more = Callback::from(|_: MouseEvent| {
        scroll_to_section("about");
    });

    html! {
        <section id="home" class="hero">
            <style>
                {r#"
                    @keyframes heroRise {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        overflow: hidden;
                        padding-top: 5rem;
                    }
                    .hero-glow {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 50%;
                        filter: blur(64px);
                        pointer-events: none;
                    }
                    .hero-glow.left {
                        top: 25%;
                        left: 25%;
                        background: rgba(79, 70, 229, 0.2);
                    }
                    .hero-glow.right {
                        bottom: 25%;
                        right: 25%;
                        background: rgba(124, 58, 237, 0.2);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        text-align: center;
                        animation: heroRise 0.8s ease-out both;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: rgba(99, 102, 241, 0.1);
                        border: 1px solid rgba(99, 102, 241, 0.3);
                        border-radius: 9999px;
                        padding: 0.5rem 1rem;
                        margin-bottom: 2rem;
                        color: #a5b4fc;
                        font-size: 0.875rem;
                    }
                    .hero h1 {
                        font-size: clamp(3rem, 8vw, 6rem);
                        font-weight: 900;
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                    }
                    .hero h1 span {
                        background: linear-gradient(90deg, #818cf8, #a78bfa, #818cf8);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero p {
                        font-size: 1.25rem;
                        color: #94a3b8;
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        line-height: 1.6;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .hero-primary, .hero-secondary {
                        padding: 1rem 2rem;
                        border-radius: 0.75rem;
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: #fff;
                        cursor: pointer;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .hero-primary {
                        background: #4f46e5;
                        border: none;
                        box-shadow: 0 10px 15px rgba(79, 70, 229, 0.3);
                    }
                    .hero-secondary {
                        background: rgba(30, 41, 59, 0.5);
                        border: 1px solid #334155;
                    }
                    .hero-stats {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        max-width: 56rem;
                        margin: 5rem auto 0;
                        animation: heroRise 0.8s ease-out 0.3s both;
                    }
                    .hero-stat {
                        text-align: center;
                        padding: 1rem;
                        background: rgba(15, 23, 42, 0.5);
                        border: 1px solid #1e293b;
                        border-radius: 1rem;
                    }
                    .hero-stat-value {
                        font-size: 2.25rem;
                        font-weight: 900;
                        color: #818cf8;
                    }
                    .hero-stat-label {
                        color: #64748b;
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .hero-stats {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
            <div class="hero-glow left"></div>
            <div class="hero-glow right"></div>
            <div>
                <div class="hero-content">
                    <div class="hero-badge">
                        <Icon name="sparkles" size={16} />
                        <span>{"Welcome to the future"}</span>
                    </div>
                    <h1>{"Create Something "}<span>{"Amazing"}</span></h1>
                    <p>
                        {"We build beautiful digital experiences that captivate your audience and drive results. Transform your vision into reality."}
                    </p>
                    <div class="hero-actions">
                        <button class="hero-primary" onclick={start_journey}>
                            {"Start Your Journey"}
                            <Icon name="chevron-right" size={20} />
                        </button>
                        <button class="hero-secondary" onclick={learn_more}>{"Learn More"}</button>
                    </div>
                </div>
                <div class="hero-stats">
                    { for STATS.iter().map(|(value, label)| html! {
                        <div class="hero-stat" key={*label}>
                            <div class="hero-stat-value">{*value}</div>
                            <div class="hero-stat-label">{*label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
