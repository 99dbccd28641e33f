use yew::prelude::*;

use crate::components::icons::{Icon, StrokeIcon};
use crate::components::sections::SectionHeading;
use crate::config::TESTIMONIALS_PER_PAGE;
use crate::content::{anchor_id, stagger_style, TESTIMONIALS};
use crate::state::paginator::Paginator;
use crate::style;

const CAROUSEL_CSS: &str = r#"
    .carousel-row {
        display: grid;
        grid-template-columns: repeat(3, minmax(0, 1fr));
        gap: 2rem;
    }
    .testimonial-card {
        padding: 2rem;
        background: #f9fafb;
        border: 1px solid rgba(0, 0, 0, 0.1);
        opacity: 0;
        animation: riseIn 0.4s ease-out forwards;
    }
    .quote-mark {
        font-size: 2.25rem;
        color: #004aad;
        margin-bottom: 1rem;
    }
    .testimonial-card p {
        color: #4b5563;
        line-height: 1.625;
        margin-bottom: 1.5rem;
    }
    .testimonial-name {
        font-weight: 700;
    }
    .carousel-controls {
        display: flex;
        justify-content: center;
        align-items: center;
        gap: 1rem;
        margin-top: 2.5rem;
    }
    .carousel-controls button {
        width: 3rem;
        height: 3rem;
        display: flex;
        align-items: center;
        justify-content: center;
        background: none;
        border: 1px solid rgba(0, 0, 0, 0.2);
        cursor: pointer;
        transition: border-color 0.2s, color 0.2s;
    }
    .carousel-controls button:hover {
        border-color: #004aad;
        color: #004aad;
    }
    .carousel-controls svg {
        width: 1.25rem;
        height: 1.25rem;
    }
    .carousel-counter {
        font-size: 0.875rem;
        color: #6b7280;
    }
    @media (max-width: 767px) {
        .carousel-row {
            grid-template-columns: minmax(0, 1fr);
        }
    }
"#;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let paginator = use_state(|| Paginator::new(TESTIMONIALS.len(), TESTIMONIALS_PER_PAGE));

    let previous = {
        let paginator = paginator.clone();
        Callback::from(move |_: MouseEvent| {
            let page = (*paginator).previous();
            log::debug!("testimonials: page {}", page.page());
            paginator.set(page);
        })
    };
    let next = {
        let paginator = paginator.clone();
        Callback::from(move |_: MouseEvent| {
            let page = (*paginator).next();
            log::debug!("testimonials: page {}", page.page());
            paginator.set(page);
        })
    };

    html! {
        <section id={anchor_id("Testimonials")} class="testimonials">
            <SectionHeading eyebrow="Testimonials" title="What our customers say." />
            <div class={style::scoped("carousel", CAROUSEL_CSS)}>
                <div class="carousel-row">
                    { for paginator.visible(&TESTIMONIALS).iter().enumerate().map(|(i, entry)| html! {
                        <div key={paginator.entry_key(i)} class="testimonial-card" style={stagger_style(i)}>
                            <div class="quote-mark">{"\u{201C}"}</div>
                            <p>{entry.quote}</p>
                            <div class="testimonial-name">{entry.name}</div>
                        </div>
                    }) }
                </div>

                <div class="carousel-controls">
                    <button onclick={previous} aria-label="Previous testimonials">
                        <StrokeIcon icon={Icon::ChevronLeft} />
                    </button>
                    <div class="carousel-counter">{paginator.counter()}</div>
                    <button onclick={next} aria-label="Next testimonials">
                        <StrokeIcon icon={Icon::ChevronRight} />
                    </button>
                </div>
            </div>
        </section>
    }
}
