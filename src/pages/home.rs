use yew::prelude::*;

use crate::components::gallery::Gallery;
use crate::components::hero::Hero;
use crate::components::navigation::Navigation;
use crate::components::sections::{About, Contact, Footer, Process, Services, Stats};
use crate::components::testimonials::Testimonials;
use crate::state::reveal::{reveal_all, RevealObserver};

pub const PAGE_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        background: #fff;
        color: #111827;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    section {
        scroll-margin-top: 5rem;
    }
    .alt-bg {
        background: #f9fafb;
    }
    .eyebrow {
        color: #004aad;
        font-size: 0.875rem;
        font-weight: 500;
        letter-spacing: 0.3em;
        text-transform: uppercase;
    }
    .muted {
        color: #6b7280;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading h2, .about-copy h2 {
        font-size: clamp(2.25rem, 5vw, 3rem);
        font-weight: 700;
        margin: 1rem 0 0;
    }
    .primary-button {
        display: inline-block;
        background: #004aad;
        color: #fff;
        padding: 1rem 2rem;
        font-weight: 500;
        letter-spacing: 0.025em;
        text-decoration: none;
        transition: background 0.2s, transform 0.2s;
    }
    .primary-button:hover {
        background: #003580;
        transform: scale(1.05);
    }

    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes riseIn {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes zoomIn {
        from { opacity: 0; transform: scale(0.9); }
        to { opacity: 1; transform: scale(1); }
    }
    @keyframes slideFromLeft {
        from { opacity: 0; transform: translateX(-50px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes slideFromRight {
        from { opacity: 0; transform: translateX(50px); }
        to { opacity: 1; transform: translateX(0); }
    }
    .reveal, .reveal-zoom, .reveal-left, .reveal-right {
        opacity: 0;
    }
    .reveal.visible, .reveal-zoom.visible, .reveal-left.visible, .reveal-right.visible {
        animation-duration: 0.6s;
        animation-timing-function: ease-out;
        animation-fill-mode: forwards;
    }
    .reveal.visible { animation-name: riseIn; }
    .reveal-zoom.visible { animation-name: zoomIn; }
    .reveal-left.visible { animation-name: slideFromLeft; animation-duration: 0.8s; }
    .reveal-right.visible { animation-name: slideFromRight; animation-duration: 0.8s; }

    .stats {
        padding: 5rem 1.5rem;
        border-top: 1px solid rgba(0, 0, 0, 0.1);
        border-bottom: 1px solid rgba(0, 0, 0, 0.1);
    }
    .stats-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(3, minmax(0, 1fr));
        gap: 2rem;
        text-align: center;
    }
    .stat-value {
        font-size: clamp(2.25rem, 5vw, 3rem);
        font-weight: 700;
        color: #004aad;
        margin-bottom: 0.5rem;
    }
    .stat-label {
        font-size: 0.875rem;
        color: #6b7280;
        text-transform: uppercase;
        letter-spacing: 0.05em;
    }

    .about, .services, .process, .gallery, .testimonials, .contact {
        padding: 8rem 1.5rem;
    }
    .about-grid, .services-grid, .timeline, .gallery-grid {
        max-width: 80rem;
        margin: 0 auto;
    }
    .about-grid {
        display: grid;
        grid-template-columns: repeat(2, minmax(0, 1fr));
        gap: 4rem;
        align-items: center;
    }
    .about-image {
        position: relative;
    }
    .about-frame {
        position: relative;
        aspect-ratio: 4 / 5;
        background: #f3f4f6;
        overflow: hidden;
    }
    .about-frame img {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .about-tint {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom right, rgba(0, 74, 173, 0.1), transparent);
    }
    .about-accent {
        position: absolute;
        bottom: -1.5rem;
        right: -1.5rem;
        width: 8rem;
        height: 8rem;
        border: 2px solid #004aad;
    }
    .about-paragraphs p {
        color: #4b5563;
        line-height: 1.625;
    }
    .about-signature {
        margin-top: 2rem;
        padding-top: 2rem;
        border-top: 1px solid rgba(0, 0, 0, 0.1);
    }
    .signature-name {
        font-size: 1.5rem;
        font-weight: 700;
    }
    .signature-tagline {
        color: #004aad;
        font-size: 0.875rem;
    }

    .services-grid {
        display: grid;
        grid-template-columns: repeat(2, minmax(0, 1fr));
        gap: 2rem;
    }
    .service-card {
        padding: 2rem;
        background: #fff;
        border: 1px solid rgba(0, 0, 0, 0.1);
        transition: border-color 0.3s;
    }
    .service-card:hover {
        border-color: rgba(0, 74, 173, 0.5);
    }
    .service-badge {
        font-size: 3rem;
        font-weight: 700;
        color: rgba(0, 74, 173, 0.2);
        margin-bottom: 1rem;
        transition: color 0.3s;
    }
    .service-card:hover .service-badge {
        color: rgba(0, 74, 173, 0.4);
    }
    .service-card p, .timeline-text p {
        color: #6b7280;
    }

    .timeline {
        position: relative;
    }
    .timeline-line {
        position: absolute;
        left: 50%;
        top: 0;
        bottom: 0;
        width: 1px;
        background: rgba(0, 0, 0, 0.1);
    }
    .timeline-step {
        display: flex;
        align-items: center;
        gap: 2rem;
        margin-bottom: 3rem;
    }
    .timeline-step.right {
        flex-direction: row-reverse;
    }
    .timeline-text {
        flex: 1;
        text-align: right;
    }
    .timeline-step.right .timeline-text {
        text-align: left;
    }
    .timeline-text h3 {
        font-size: 1.5rem;
        margin: 0 0 0.5rem;
    }
    .step-number {
        color: #004aad;
        font-size: 0.875rem;
        font-weight: 500;
        margin-bottom: 0.5rem;
    }
    .timeline-dot {
        width: 1rem;
        height: 1rem;
        background: #004aad;
        border-radius: 9999px;
        position: relative;
        z-index: 10;
    }
    .timeline-spacer {
        flex: 1;
    }

    .gallery-grid {
        display: grid;
        grid-template-columns: repeat(5, minmax(0, 1fr));
        gap: 1.5rem;
    }
    .gallery-item {
        position: relative;
        aspect-ratio: 4 / 3;
        background: #e5e7eb;
        overflow: hidden;
        cursor: pointer;
    }
    .gallery-item img {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.3s;
    }
    .gallery-item:hover img {
        transform: scale(1.05);
    }
    .gallery-shade {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0);
        transition: background 0.3s;
    }
    .gallery-item:hover .gallery-shade {
        background: rgba(0, 0, 0, 0.2);
    }

    .testimonials .carousel {
        max-width: 80rem;
        margin: 0 auto;
    }

    .contact-inner {
        max-width: 56rem;
        margin: 0 auto;
        text-align: center;
    }
    .contact-intro {
        color: #4b5563;
        max-width: 42rem;
        margin: -2.5rem auto 3rem;
    }
    .contact-grid {
        display: grid;
        grid-template-columns: repeat(3, minmax(0, 1fr));
        gap: 2rem;
    }
    .contact-card {
        padding: 2rem;
        background: #fff;
        border: 1px solid rgba(0, 0, 0, 0.1);
    }
    .contact-icon {
        width: 3.5rem;
        height: 3.5rem;
        margin: 0 auto 1rem;
        background: rgba(0, 74, 173, 0.1);
        color: #004aad;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .contact-icon svg {
        width: 1.5rem;
        height: 1.5rem;
    }
    .contact-label {
        font-size: 0.875rem;
        color: #6b7280;
        margin-bottom: 0.25rem;
    }
    .contact-value {
        font-weight: 700;
        font-size: 1.125rem;
    }
    .contact-cta {
        margin-top: 3rem;
    }
    .contact-cta p {
        color: #6b7280;
    }

    .site-footer {
        padding: 3rem 1.5rem;
        border-top: 1px solid rgba(0, 0, 0, 0.1);
    }
    .footer-inner {
        max-width: 80rem;
        margin: 0 auto;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
    }
    .footer-logo {
        height: 3rem;
        width: auto;
    }
    .footer-copy {
        font-size: 0.875rem;
        color: #6b7280;
    }
    .footer-social a {
        color: #6b7280;
        transition: color 0.2s;
    }
    .footer-social a:hover {
        color: #004aad;
    }
    .social-icon {
        width: 2rem;
        height: 2rem;
    }

    @media (max-width: 1023px) {
        .gallery-grid {
            grid-template-columns: repeat(2, minmax(0, 1fr));
        }
    }
    @media (max-width: 767px) {
        .about-grid, .services-grid, .contact-grid, .gallery-grid {
            grid-template-columns: minmax(0, 1fr);
        }
        .timeline-line, .timeline-dot, .timeline-spacer {
            display: none;
        }
        .timeline-text, .timeline-step.right .timeline-text {
            text-align: center;
        }
        .footer-inner {
            flex-direction: column;
        }
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    // Sections animate in the first time they scroll into view.
    use_effect_with_deps(
        |_| {
            let observer = RevealObserver::attach()
                .map_err(|err| {
                    log::warn!("scroll reveal unavailable, showing everything: {}", err);
                    reveal_all();
                })
                .ok();

            move || drop(observer)
        },
        (),
    );

    html! {
        <main class="landing-page">
            <style>{PAGE_CSS}</style>
            <Navigation />
            <Hero />
            <Stats />
            <About />
            <Services />
            <Process />
            <Gallery />
            <Testimonials />
            <Contact />
            <Footer />
        </main>
    }
}
