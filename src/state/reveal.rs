use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::DomError;

/// Classes that start hidden and animate once their element scrolls into view.
pub const REVEAL_CLASSES: [&str; 4] = ["reveal", "reveal-zoom", "reveal-left", "reveal-right"];

/// Added to a reveal element the first time it intersects the viewport.
pub const VISIBLE_CLASS: &str = "visible";

/// Share of the element that must be on screen before it plays.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Pulls the bottom edge up so elements start just after they clear it.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// `.reveal, .reveal-zoom, ...`
pub fn reveal_selector() -> String {
    REVEAL_CLASSES
        .iter()
        .map(|class| format!(".{}", class))
        .collect::<Vec<_>>()
        .join(", ")
}

fn reveal_targets() -> Result<Vec<Element>, DomError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(DomError::NoWindow)?;
    let nodes = document
        .query_selector_all(&reveal_selector())
        .map_err(|err| DomError::Observer(format!("{:?}", err)))?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn mark_visible(element: &Element) {
    if let Err(err) = element.class_list().add_1(VISIBLE_CLASS) {
        log::warn!("reveal: could not mark element visible: {:?}", err);
    }
}

/// Shows every reveal element at once. Used when no observer can be set up,
/// so nothing stays hidden.
pub fn reveal_all() {
    match reveal_targets() {
        Ok(targets) => targets.iter().for_each(mark_visible),
        Err(err) => log::error!("reveal: {}", err),
    }
}

/// An `IntersectionObserver` over every reveal element on the page.
///
/// Each element is revealed once and then unobserved. Dropping the handle
/// disconnects the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn attach() -> Result<Self, DomError> {
        let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    mark_visible(&target);
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| DomError::Observer(format!("{:?}", err)))?;

        let targets = reveal_targets()?;
        for target in &targets {
            observer.observe(target);
        }
        log::debug!("reveal observer watching {} elements", targets.len());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        log::debug!("reveal observer disconnected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_covers_every_reveal_class() {
        assert_eq!(
            reveal_selector(),
            ".reveal, .reveal-zoom, .reveal-left, .reveal-right"
        );
    }

    #[test]
    fn reveal_css_waits_for_the_visible_class() {
        let css = crate::pages::home::PAGE_CSS;
        for class in REVEAL_CLASSES {
            assert!(
                css.contains(&format!(".{}.{}", class, VISIBLE_CLASS)),
                "no animation rule gated on .{}.{}",
                class,
                VISIBLE_CLASS
            );
        }
        // Hidden until revealed, and no keyframe runs on the bare class.
        assert!(!css.contains(".reveal { animation-name"));
    }
}
