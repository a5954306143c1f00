use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icon::Icon;
use crate::components::scroll_reveal::ScrollReveal;
use crate::contact::hook::{use_form_handler, ClearGeneration};
use crate::contact::submission::{ContactFields, Phase};

const CONTACT_INFO: [(&str, &str, &str); 3] = [
    ("map-pin", "Address", "123 Main Street, City, Country"),
    ("phone", "Phone", "+1 (555) 123-4567"),
    ("clock", "Hours", "Mon - Fri: 9AM - 6PM"),
];

const SOCIALS: [&str; 4] = ["facebook", "twitter", "instagram", "linkedin"];

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_form_handler();
    let fields = use_state(ContactFields::default);

    // a delivered message must not be resubmittable from the inputs
    {
        let fields = fields.clone();
        use_effect_with_deps(
            move |cleared: &ClearGeneration| {
                if cleared.0 > 0 {
                    let mut next = (*fields).clone();
                    next.clear();
                    fields.set(next);
                }
                || ()
            },
            form.cleared,
        );
    }

    let on_name = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.name = input.value();
            fields.set(next);
        })
    };
    let on_email = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.email = input.value();
            fields.set(next);
        })
    };
    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.message = input.value();
            fields.set(next);
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let submit = form.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit((*fields).clone());
        })
    };

    let on_reset = {
        let reset = form.reset.clone();
        Callback::from(move |_: MouseEvent| reset.emit(()))
    };

    let submitting = form.state.is_submitting();

    let panel = if form.state.phase() == Phase::Succeeded {
        html! {
            <div class="contact-success">
                <div class="success-badge">
                    <Icon name="check-circle" size={40} />
                </div>
                <h3>{"Message Sent!"}</h3>
                <p>{"Thank you for reaching out. We'll get back to you as soon as possible."}</p>
                <button class="send-another" onclick={on_reset}>{"Send Another Message"}</button>
            </div>
        }
    } else {
        html! {
            <form class="contact-form" {onsubmit}>
                <label>
                    <span>{"Your Name"}</span>
                    <input
                        type="text"
                        name="name"
                        placeholder="John Doe"
                        required=true
                        value={fields.name.clone()}
                        oninput={on_name}
                    />
                </label>
                <label>
                    <span>{"Email Address"}</span>
                    <input
                        type="email"
                        name="email"
                        placeholder="john@example.com"
                        required=true
                        value={fields.email.clone()}
                        oninput={on_email}
                    />
                </label>
                <label>
                    <span>{"Message"}</span>
                    <textarea
                        name="message"
                        placeholder="Tell us about your project..."
                        rows="4"
                        required=true
                        value={fields.message.clone()}
                        oninput={on_message}
                    />
                </label>
                {
                    if let Some(message) = form.state.error_message() {
                        html! { <div class="form-error">{message.to_string()}</div> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="form-submit" disabled={submitting}>
                    {
                        if submitting {
                            html! { <><span class="spinner"></span>{"Sending..."}</> }
                        } else {
                            html! { <><Icon name="send" size={20} />{"Send Message"}</> }
                        }
                    }
                </button>
            </form>
        }
    };

    html! {
        <section id="contact" class="contact">
            <style>
                {r#"
                    .contact {
                        padding: 8rem 1.5rem;
                        background: rgba(15, 23, 42, 0.3);
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .contact-info h3 {
                        font-size: 1.5rem;
                        margin: 0 0 1.5rem;
                    }
                    .contact-info > p {
                        color: #94a3b8;
                        line-height: 1.6;
                        margin-bottom: 2rem;
                    }
                    .info-row {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .info-icon, .success-badge {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #818cf8;
                        background: rgba(99, 102, 241, 0.1);
                    }
                    .info-icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.75rem;
                    }
                    .info-label {
                        color: #64748b;
                        font-size: 0.875rem;
                    }
                    .info-value {
                        font-weight: 600;
                    }
                    .socials {
                        padding-top: 2rem;
                        border-top: 1px solid #1e293b;
                        color: #64748b;
                    }
                    .social-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .social-links button {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        border: none;
                        background: #1e293b;
                        color: #cbd5e1;
                        cursor: pointer;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .social-links button:hover {
                        background: #4f46e5;
                    }
                    .contact-panel {
                        background: rgba(15, 23, 42, 0.5);
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid #1e293b;
                    }
                    .contact-form label {
                        display: block;
                        margin-bottom: 1.5rem;
                    }
                    .contact-form label span {
                        display: block;
                        color: #94a3b8;
                        font-size: 0.875rem;
                        margin-bottom: 0.5rem;
                    }
                    .contact-form input, .contact-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        background: #020617;
                        border: 1px solid #1e293b;
                        border-radius: 0.75rem;
                        color: #fff;
                        font: inherit;
                        resize: none;
                    }
                    .contact-form input:focus, .contact-form textarea:focus {
                        outline: none;
                        border-color: #6366f1;
                    }
                    .form-error {
                        color: #f87171;
                        font-size: 0.875rem;
                        background: rgba(239, 68, 68, 0.1);
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .form-submit {
                        width: 100%;
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: #4f46e5;
                        color: #fff;
                        font-weight: 700;
                        cursor: pointer;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                    }
                    .form-submit:disabled {
                        background: #334155;
                        cursor: not-allowed;
                    }
                    .spinner {
                        width: 1.25rem;
                        height: 1.25rem;
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        border-top-color: #fff;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .contact-success {
                        text-align: center;
                        padding: 3rem 0;
                    }
                    .success-badge {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 50%;
                        margin: 0 auto 1.5rem;
                    }
                    .contact-success h3 {
                        font-size: 1.875rem;
                        margin: 0 0 1rem;
                    }
                    .contact-success p {
                        color: #94a3b8;
                        margin-bottom: 2rem;
                    }
                    .send-another {
                        background: none;
                        border: none;
                        color: #818cf8;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    @media (max-width: 1024px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <ScrollReveal>
                <div class="section-heading">
                    <span class="section-eyebrow">{"Get In Touch"}</span>
                    <h2>{"Contact "}<span>{"Us"}</span></h2>
                    <p>
                        {"Ready to start your project? We'd love to hear from you. Send us a message and we'll respond as soon as possible."}
                    </p>
                </div>
            </ScrollReveal>

            <div class="contact-grid">
                <ScrollReveal>
                    <div class="contact-info">
                        <h3>{"Let's Talk"}</h3>
                        <p>
                            {"Whether you have a question about our services, pricing, or just want to say hello, our team is ready to answer all your questions."}
                        </p>
                        { for CONTACT_INFO.iter().map(|(icon, label, value)| html! {
                            <div class="info-row" key={*label}>
                                <div class="info-icon"><Icon name={*icon} size={24} /></div>
                                <div>
                                    <div class="info-label">{*label}</div>
                                    <div class="info-value">{*value}</div>
                                </div>
                            </div>
                        }) }
                        <div class="socials">
                            <p>{"Follow us on social media"}</p>
                            <div class="social-links">
                                { for SOCIALS.iter().map(|social| html! {
                                    <button key={*social} aria-label={*social}>
                                        <Icon name={*social} size={20} />
                                    </button>
                                }) }
                            </div>
                        </div>
                    </div>
                </ScrollReveal>

                <ScrollReveal delay={0.2}>
                    <div class="contact-panel">{panel}</div>
                </ScrollReveal>
            </div>
        </section>
    }
}
