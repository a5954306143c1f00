use yew::prelude::*;

use crate::components::icon::Icon;
use crate::components::scroll_reveal::ScrollReveal;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "target",
        title: "Our Mission",
        description: "To deliver exceptional digital solutions that empower businesses to thrive in the modern world.",
    },
    Feature {
        icon: "heart",
        title: "Our Values",
        description: "We believe in transparency, innovation, and putting our clients first in everything we do.",
    },
    Feature {
        icon: "sparkles",
        title: "Our Approach",
        description: "Combining creativity with technical excellence to create products that truly stand out.",
    },
];

const REASONS: [&str; 4] = [
    "Cutting-edge technology and modern frameworks",
    "Dedicated support throughout your journey",
    "Scalable solutions for growing businesses",
    "Affordable pricing with premium quality",
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <style>
                {r#"
                    .about {
                        padding: 8rem 1.5rem;
                    }
                    .about-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-eyebrow {
                        color: #818cf8;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        font-size: 0.875rem;
                    }
                    .section-heading h2 {
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        font-weight: 900;
                        margin: 1rem 0 1.5rem;
                    }
                    .section-heading h2 span {
                        color: #818cf8;
                    }
                    .section-heading p {
                        font-size: 1.25rem;
                        color: #94a3b8;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .feature-card {
                        height: 100%;
                        box-sizing: border-box;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: linear-gradient(135deg, #0f172a, #020617);
                        border: 1px solid #1e293b;
                        transition: border-color 0.3s;
                    }
                    .feature-card:hover {
                        border-color: rgba(99, 102, 241, 0.5);
                    }
                    .feature-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 0.75rem;
                        background: rgba(99, 102, 241, 0.1);
                        color: #818cf8;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                    }
                    .feature-card h3 {
                        font-size: 1.5rem;
                        margin: 0 0 1rem;
                    }
                    .feature-card p {
                        color: #94a3b8;
                        line-height: 1.6;
                    }
                    .why-us {
                        margin-top: 4rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        align-items: center;
                        padding: 3rem;
                        background: rgba(15, 23, 42, 0.5);
                        border: 1px solid #1e293b;
                        border-radius: 1.5rem;
                    }
                    .why-us h3 {
                        font-size: 2.25rem;
                        margin: 0 0 1.5rem;
                    }
                    .why-us ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .why-us li {
                        display: flex;
                        gap: 0.75rem;
                        color: #cbd5e1;
                        margin-bottom: 1rem;
                    }
                    .why-us li .icon {
                        color: #818cf8;
                        flex-shrink: 0;
                    }
                    .why-us img {
                        width: 100%;
                        height: 20rem;
                        object-fit: cover;
                        border-radius: 1rem;
                    }
                    @media (max-width: 768px) {
                        .feature-grid, .why-us {
                            grid-template-columns: 1fr;
                        }
                        .why-us {
                            padding: 2rem;
                        }
                    }
                "#}
            </style>
            <div class="about-inner">
                <ScrollReveal>
                    <div class="section-heading">
                        <span class="section-eyebrow">{"About Us"}</span>
                        <h2>{"Who We "}<span>{"Are"}</span></h2>
                        <p>
                            {"A passionate team of creators, developers, and strategists dedicated to building the future of digital experiences."}
                        </p>
                    </div>
                </ScrollReveal>

                <div class="feature-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <ScrollReveal key={feature.title} delay={index as f64 * 0.1}>
                            <div class="feature-card">
                                <div class="feature-icon">
                                    <Icon name={feature.icon} size={28} />
                                </div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        </ScrollReveal>
                    }) }
                </div>

                <ScrollReveal delay={0.3}>
                    <div class="why-us">
                        <div>
                            <h3>{"Why Choose Our Services?"}</h3>
                            <ul>
                                { for REASONS.iter().map(|reason| html! {
                                    <li key={*reason}>
                                        <Icon name="check-circle" size={16} />
                                        {*reason}
                                    </li>
                                }) }
                            </ul>
                        </div>
                        <img
                            src="https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800&q=80"
                            alt="Team working"
                        />
                    </div>
                </ScrollReveal>
            </div>
        </section>
    }
}
