use super::wrap::{step_back, step_forward};

/// Which gallery image, if any, is shown enlarged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Closed,
    Open(usize),
}

/// Lightbox over a gallery of `len` items.
///
/// Every transition returns a new value so the component can hand it straight
/// to `UseStateHandle::set`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    selection: Selection,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            selection: Selection::Closed,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn item_count(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> Option<usize> {
        match self.selection {
            Selection::Open(index) => Some(index),
            Selection::Closed => None,
        }
    }

    /// Opens on `index`. Indices outside the gallery leave the state alone.
    #[must_use]
    pub fn open(self, index: usize) -> Self {
        if index >= self.len {
            log::warn!("lightbox: ignoring open({}) on {} items", index, self.len);
            return self;
        }
        Self {
            selection: Selection::Open(index),
            ..self
        }
    }

    #[must_use]
    pub fn close(self) -> Self {
        Self {
            selection: Selection::Closed,
            ..self
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self.selection {
            Selection::Open(index) => Self {
                selection: Selection::Open(step_forward(index, self.len)),
                ..self
            },
            Selection::Closed => self,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self.selection {
            Selection::Open(index) => Self {
                selection: Selection::Open(step_back(index, self.len)),
                ..self
            },
            Selection::Closed => self,
        }
    }

    /// 1-indexed position label, e.g. `"3 / 9"`. `None` while closed.
    pub fn counter(&self) -> Option<String> {
        self.current()
            .map(|index| format!("{} / {}", index + 1, self.len))
    }
}

// proptest is a host-only dev-dependency.
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_closed() {
        let lightbox = Lightbox::new(9);
        assert_eq!(lightbox.selection(), Selection::Closed);
        assert_eq!(lightbox.counter(), None);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let lightbox = Lightbox::new(9).open(0).previous();
        assert_eq!(lightbox.selection(), Selection::Open(8));
        assert_eq!(lightbox.counter().as_deref(), Some("9 / 9"));
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let lightbox = Lightbox::new(9).open(8).next();
        assert_eq!(lightbox.current(), Some(0));
    }

    #[test]
    fn navigation_is_a_no_op_while_closed() {
        let lightbox = Lightbox::new(9);
        assert_eq!(lightbox.next(), lightbox);
        assert_eq!(lightbox.previous(), lightbox);
        assert_eq!(lightbox.close(), lightbox);
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let lightbox = Lightbox::new(9).open(9);
        assert_eq!(lightbox.selection(), Selection::Closed);

        let lightbox = Lightbox::new(9).open(2).open(42);
        assert_eq!(lightbox.current(), Some(2));
    }

    fn open_lightbox() -> impl Strategy<Value = (usize, usize)> {
        (1usize..40).prop_flat_map(|len| (Just(len), 0..len))
    }

    proptest! {
        #[test]
        fn next_then_previous_round_trips((len, index) in open_lightbox()) {
            let opened = Lightbox::new(len).open(index);
            prop_assert_eq!(opened.next().previous(), opened);
            prop_assert_eq!(opened.previous().next(), opened);
        }

        #[test]
        fn len_steps_close_the_cycle((len, index) in open_lightbox()) {
            let opened = Lightbox::new(len).open(index);
            let cycled = (0..len).fold(opened, |lightbox, _| lightbox.next());
            prop_assert_eq!(cycled, opened);
        }

        #[test]
        fn open_then_close((len, index) in open_lightbox()) {
            let opened = Lightbox::new(len).open(index);
            prop_assert_eq!(opened.selection(), Selection::Open(index));
            prop_assert_eq!(opened.close().selection(), Selection::Closed);
        }
    }
}
