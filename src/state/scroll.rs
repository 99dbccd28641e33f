use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::config::SCROLL_THRESHOLD;
use crate::error::DomError;

/// Whether the page has scrolled far enough for the compact nav.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

pub fn current_offset() -> Result<f64, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    window
        .scroll_y()
        .map_err(|err| DomError::ScrollOffset(format!("{:?}", err)))
}

/// A live `scroll` listener on the window.
///
/// The listener is removed when the watcher is dropped, so a component keeps
/// it alive by moving it into its effect destructor.
pub struct ScrollWatcher {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollWatcher {
    /// Calls `on_scroll` with the vertical offset on every scroll event.
    pub fn attach<F>(mut on_scroll: F) -> Result<Self, DomError>
    where
        F: FnMut(f64) + 'static,
    {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let reader = window.clone();

        let callback = Closure::wrap(Box::new(move || match reader.scroll_y() {
            Ok(offset) => on_scroll(offset),
            Err(err) => log::warn!("scroll watcher: could not read offset: {:?}", err),
        }) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|err| DomError::Listener {
                event: "scroll",
                reason: format!("{:?}", err),
            })?;

        log::debug!("scroll watcher attached");
        Ok(Self { window, callback })
    }
}

impl Drop for ScrollWatcher {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("scroll watcher: could not detach listener: {:?}", err);
        } else {
            log::debug!("scroll watcher detached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_flips_strictly_past_the_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(51.0));
        assert!(!is_scrolled(49.0));
    }

    #[test]
    fn flag_has_no_memory() {
        let offsets = [0.0, 120.0, 50.0, 300.0, 10.0];
        let flags: Vec<bool> = offsets.iter().copied().map(is_scrolled).collect();
        assert_eq!(flags, vec![false, true, false, true, false]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fire_scroll() {
        let window = web_sys::window().expect("window");
        let event = Event::new("scroll").expect("scroll event");
        window.dispatch_event(&event).expect("dispatch");
    }

    #[wasm_bindgen_test]
    fn listener_runs_once_per_event_until_dropped() {
        let calls = Rc::new(Cell::new(0u32));
        let watcher = {
            let calls = calls.clone();
            ScrollWatcher::attach(move |_| calls.set(calls.get() + 1)).expect("attach")
        };

        fire_scroll();
        assert_eq!(calls.get(), 1);
        fire_scroll();
        assert_eq!(calls.get(), 2);

        drop(watcher);
        fire_scroll();
        assert_eq!(calls.get(), 2);
    }
}
