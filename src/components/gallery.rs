use yew::prelude::*;

use crate::components::icons::{Icon, StrokeIcon};
use crate::components::sections::SectionHeading;
use crate::content::{anchor_id, stagger_style, GALLERY};
use crate::state::lightbox::{Lightbox, Selection};
use crate::style;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let lightbox = use_state(|| Lightbox::new(GALLERY.len()));

    let on_open = {
        let lightbox = lightbox.clone();
        Callback::from(move |index: usize| lightbox.set((*lightbox).open(index)))
    };

    html! {
        <>
            <section id={anchor_id("Gallery")} class="gallery alt-bg">
                <SectionHeading eyebrow="Our Work" title="See the TruCo difference." />
                <div class="gallery-grid">
                    { for GALLERY.iter().enumerate().map(|(i, src)| {
                        let on_open = on_open.clone();
                        html! {
                            <div
                                key={*src}
                                class="gallery-item reveal-zoom"
                                style={stagger_style(i)}
                                onclick={Callback::from(move |_: MouseEvent| on_open.emit(i))}
                            >
                                <img src={*src} alt="Completed painting project" loading="lazy" />
                                <div class="gallery-shade"></div>
                            </div>
                        }
                    }) }
                </div>
            </section>
            <LightboxOverlay lightbox={lightbox} />
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxOverlayProps {
    pub lightbox: UseStateHandle<Lightbox>,
}

const LIGHTBOX_CSS: &str = r#"
    position: fixed;
    inset: 0;
    z-index: 50;
    background: rgba(0, 0, 0, 0.9);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    animation: fadeIn 0.2s ease-out;

    .lightbox-close {
        position: absolute;
        top: 1.5rem;
        right: 1.5rem;
        z-index: 10;
        color: #fff;
        background: none;
        border: none;
        cursor: pointer;
        transition: color 0.2s;
    }
    .lightbox-close:hover {
        color: #004aad;
    }
    .lightbox-close svg {
        width: 2.5rem;
        height: 2.5rem;
    }
    .lightbox-arrow {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        width: 3.5rem;
        height: 3.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        background: rgba(255, 255, 255, 0.2);
        border: none;
        cursor: pointer;
        transition: background 0.2s;
    }
    .lightbox-arrow:hover {
        background: rgba(255, 255, 255, 0.4);
    }
    .lightbox-arrow svg {
        width: 2rem;
        height: 2rem;
    }
    .lightbox-arrow.prev {
        left: 1.5rem;
    }
    .lightbox-arrow.next {
        right: 1.5rem;
    }
    .lightbox-image {
        max-width: 100%;
        max-height: 85vh;
        object-fit: contain;
        animation: zoomIn 0.3s ease-out;
    }
    .lightbox-counter {
        position: absolute;
        bottom: 1.5rem;
        left: 50%;
        transform: translateX(-50%);
        color: #fff;
        font-size: 0.875rem;
    }
"#;

/// Full-screen viewer for the selected gallery image. Renders nothing while
/// the lightbox is closed.
#[function_component(LightboxOverlay)]
pub fn lightbox_overlay(props: &LightboxOverlayProps) -> Html {
    let lightbox = props.lightbox.clone();

    let Selection::Open(index) = lightbox.selection() else {
        return html! {};
    };
    let Some(src) = GALLERY.get(index).copied() else {
        log::error!(
            "lightbox: no gallery image at {} of {}",
            index,
            lightbox.item_count()
        );
        return html! {};
    };

    let close = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| lightbox.set((*lightbox).close()))
    };
    let previous = {
        let lightbox = lightbox.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            lightbox.set((*lightbox).previous());
        })
    };
    let next = {
        let lightbox = lightbox.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            lightbox.set((*lightbox).next());
        })
    };
    // Clicking the photo itself must not reach the backdrop's close handler.
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={style::scoped("lightbox", LIGHTBOX_CSS)} onclick={close.clone()}>
            <button key="close" class="lightbox-close" onclick={close} aria-label="Close">
                <StrokeIcon icon={Icon::Close} />
            </button>

            <button key="previous" class="lightbox-arrow prev" onclick={previous} aria-label="Previous image">
                <StrokeIcon icon={Icon::ChevronLeft} />
            </button>

            // Keyed by index so the zoom-in replays on every step.
            <img
                key={format!("image-{}", index)}
                class="lightbox-image"
                src={src}
                alt="Enlarged project photo"
                onclick={swallow}
            />

            <button key="next" class="lightbox-arrow next" onclick={next} aria-label="Next image">
                <StrokeIcon icon={Icon::ChevronRight} />
            </button>

            <div key="counter" class="lightbox-counter">
                {lightbox.counter().unwrap_or_default()}
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};
    use yew::platform::time::sleep;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct OpenedProps {
        index: usize,
    }

    #[function_component(Opened)]
    fn opened(props: &OpenedProps) -> Html {
        let lightbox = use_state(|| Lightbox::new(GALLERY.len()).open(props.index));
        html! { <LightboxOverlay lightbox={lightbox} /> }
    }

    async fn settle() {
        sleep(Duration::ZERO).await;
    }

    async fn mount_open_at(index: usize) -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document");
        let root = document.create_element("div").expect("root");
        document
            .body()
            .expect("body")
            .append_child(&root)
            .expect("append root");
        yew::Renderer::<Opened>::with_root_and_props(root.clone(), OpenedProps { index }).render();
        settle().await;
        root
    }

    fn find(root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).expect("valid selector")
    }

    fn click(root: &Element, selector: &str) {
        find(root, selector)
            .expect("element rendered")
            .dyn_into::<HtmlElement>()
            .expect("html element")
            .click();
    }

    fn counter_text(root: &Element) -> Option<String> {
        find(root, ".lightbox-counter").and_then(|counter| counter.text_content())
    }

    #[wasm_bindgen_test]
    async fn counter_is_one_indexed() {
        let root = mount_open_at(8).await;
        assert_eq!(counter_text(&root).as_deref(), Some("9 / 9"));
    }

    #[wasm_bindgen_test]
    async fn arrows_and_image_keep_it_open_backdrop_closes() {
        let root = mount_open_at(0).await;

        click(&root, ".lightbox-image");
        settle().await;
        assert!(find(&root, ".lightbox-image").is_some());
        assert_eq!(counter_text(&root).as_deref(), Some("1 / 9"));

        click(&root, ".lightbox-arrow.prev");
        settle().await;
        assert_eq!(counter_text(&root).as_deref(), Some("9 / 9"));

        click(&root, ".lightbox-arrow.next");
        settle().await;
        assert_eq!(counter_text(&root).as_deref(), Some("1 / 9"));

        click(&root, ".lightbox");
        settle().await;
        assert!(find(&root, ".lightbox").is_none());
    }
}
