use yew::prelude::*;

use crate::config::BOOKING_URL;
use crate::state::parallax::Parallax;
use crate::state::scroll::{current_offset, ScrollWatcher};

#[function_component(Hero)]
pub fn hero() -> Html {
    let section_ref = use_node_ref();
    let parallax = use_state_eq(|| Parallax::AT_REST);

    {
        let section_ref = section_ref.clone();
        let parallax = parallax.clone();
        use_effect_with_deps(
            move |_| {
                let hero_height = move || {
                    section_ref
                        .cast::<web_sys::Element>()
                        .map(|section| f64::from(section.client_height()))
                        .unwrap_or_default()
                };

                // A reload can restore the page mid-scroll.
                parallax.set(Parallax::restored(current_offset(), hero_height()));

                let watcher = ScrollWatcher::attach(move |offset| {
                    parallax.set(Parallax::at(offset, hero_height()));
                })
                .map_err(|err| log::warn!("hero parallax disabled: {}", err))
                .ok();

                move || drop(watcher)
            },
            (),
        );
    }

    html! {
        <section ref={section_ref} class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-media {
                        position: absolute;
                        inset: 0;
                        will-change: transform;
                    }
                    .hero-media video {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 0 1.5rem;
                        max-width: 64rem;
                    }
                    .hero-content > * {
                        opacity: 0;
                        animation: riseIn 0.8s ease-out forwards;
                    }
                    .hero-eyebrow {
                        display: block;
                        margin-bottom: 1rem;
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 500;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        animation-delay: 0.2s !important;
                    }
                    .hero h1 {
                        font-size: clamp(3rem, 8vw, 6rem);
                        font-weight: 700;
                        line-height: 0.9;
                        letter-spacing: -0.025em;
                        margin: 0 0 1.5rem;
                        color: #fff;
                        animation-delay: 0.4s !important;
                    }
                    .hero h1 span {
                        color: #3d8eff;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #e5e7eb;
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        animation-delay: 0.6s !important;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                        animation-delay: 0.8s !important;
                    }
                    .hero-cta, .hero-secondary {
                        padding: 1rem 2rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        letter-spacing: 0.025em;
                        text-decoration: none;
                        color: #fff;
                        transition: transform 0.2s, background 0.2s;
                    }
                    .hero-cta {
                        background: #004aad;
                    }
                    .hero-cta:hover {
                        background: #003580;
                        transform: scale(1.05);
                    }
                    .hero-secondary {
                        border: 1px solid rgba(255, 255, 255, 0.5);
                    }
                    .hero-secondary:hover {
                        background: rgba(255, 255, 255, 0.1);
                        transform: scale(1.05);
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 10;
                        opacity: 0;
                        animation: fadeIn 0.5s 1.5s forwards;
                    }
                    .scroll-indicator div {
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid rgba(255, 255, 255, 0.5);
                        border-radius: 9999px;
                        display: flex;
                        justify-content: center;
                        padding-top: 0.5rem;
                        box-sizing: border-box;
                        animation: bob 1.5s infinite;
                    }
                    .scroll-indicator span {
                        width: 0.25rem;
                        height: 0.5rem;
                        background: rgba(255, 255, 255, 0.7);
                        border-radius: 9999px;
                    }
                    @keyframes bob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(10px); }
                    }
                "#}
            </style>
            <div class="hero-media" style={parallax.media_style()}>
                <video autoplay={true} loop={true} muted={true} playsinline={true}>
                    <source src="/hero-video.mp4" type="video/mp4" />
                </video>
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content" style={parallax.content_style()}>
                <span class="hero-eyebrow">{"Professional Painting Services"}</span>
                <h1>
                    {"Quality in every coat."}
                    <br />
                    <span>{"Lasting results."}</span>
                </h1>
                <p class="hero-subtitle">
                    {"TruCo Painting delivers professional interior and exterior painting services with attention to detail and a commitment to excellence. Transform your space with a team you can trust."}
                </p>
                <div class="hero-cta-group">
                    <a href={BOOKING_URL} target="_blank" rel="noopener noreferrer" class="hero-cta">
                        {"SCHEDULE ESTIMATE"}
                    </a>
                    <a href="#gallery" class="hero-secondary">
                        {"VIEW OUR WORK"}
                    </a>
                </div>
            </div>

            <div class="scroll-indicator">
                <div><span></span></div>
            </div>
        </section>
    }
}
