use std::ops::Range;

use super::wrap::{step_back, step_forward};

/// Page-at-a-time window over a list of `len` entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    len: usize,
    page_size: usize,
    page: usize,
}

impl Paginator {
    pub fn new(len: usize, page_size: usize) -> Self {
        debug_assert!(page_size > 0, "page size must be positive");
        Self {
            len,
            page_size,
            page: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Never zero: an empty list still has one (empty) page.
    pub fn total_pages(&self) -> usize {
        self.len.div_ceil(self.page_size).max(1)
    }

    /// Entry indices shown on the current page, clamped to the list.
    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.len);
        let end = (start + self.page_size).min(self.len);
        start..end
    }

    pub fn visible<'a, T>(&self, entries: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        let end = range.end.min(entries.len());
        &entries[range.start.min(end)..end]
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self {
            page: step_forward(self.page, self.total_pages()),
            ..self
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self {
            page: step_back(self.page, self.total_pages()),
            ..self
        }
    }

    /// 1-indexed page label, e.g. `"1 / 2"`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.page + 1, self.total_pages())
    }

    /// Render key for the entry at `position` on the current page. Changes with
    /// the page so the cards are rebuilt and their entry animation replays.
    pub fn entry_key(&self, position: usize) -> String {
        format!("{}-{}", self.page, position)
    }
}

// proptest is a host-only dev-dependency.
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::content::TESTIMONIALS;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn six_testimonials_make_two_pages() {
        let paginator = Paginator::new(TESTIMONIALS.len(), 3);
        assert_eq!(paginator.total_pages(), 2);
        assert_eq!(paginator.visible(&TESTIMONIALS), &TESTIMONIALS[0..3]);
        assert_eq!(paginator.counter(), "1 / 2");

        let second = paginator.next();
        assert_eq!(second.visible(&TESTIMONIALS), &TESTIMONIALS[3..6]);
        assert_eq!(second.counter(), "2 / 2");
    }

    #[test]
    fn next_from_last_page_wraps_to_first() {
        let paginator = Paginator::new(TESTIMONIALS.len(), 3).next().next();
        assert_eq!(paginator.page(), 0);
        assert_eq!(paginator.visible(&TESTIMONIALS), &TESTIMONIALS[0..3]);
    }

    #[test]
    fn previous_from_first_page_wraps_to_last() {
        let paginator = Paginator::new(7, 3).previous();
        assert_eq!(paginator.page(), 2);
        assert_eq!(paginator.visible_range(), 6..7);
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let paginator = Paginator::new(0, 3);
        assert_eq!(paginator.total_pages(), 1);
        assert_eq!(paginator.visible_range(), 0..0);
        assert_eq!(paginator.next().page(), 0);
        assert_eq!(paginator.counter(), "1 / 1");
    }

    #[test]
    fn entry_keys_change_with_the_page() {
        let paginator = Paginator::new(6, 3);
        assert_eq!(paginator.entry_key(1), "0-1");
        assert_eq!(paginator.next().entry_key(1), "1-1");
    }

    proptest! {
        #[test]
        fn visible_window_stays_in_bounds(len in 0usize..60, page_size in 1usize..8, steps in 0usize..20) {
            let paginator = (0..steps).fold(Paginator::new(len, page_size), |p, _| p.next());
            let range = paginator.visible_range();
            prop_assert!(range.len() <= page_size);
            prop_assert!(range.end <= len);
            prop_assert!(paginator.page() < paginator.total_pages());
        }

        #[test]
        fn total_pages_steps_return_to_first(len in 0usize..60, page_size in 1usize..8) {
            let start = Paginator::new(len, page_size);
            let cycled = (0..start.total_pages()).fold(start, |p, _| p.next());
            prop_assert_eq!(cycled.page(), 0);
        }

        #[test]
        fn previous_undoes_next(len in 0usize..60, page_size in 1usize..8, steps in 0usize..20) {
            let paginator = (0..steps).fold(Paginator::new(len, page_size), |p, _| p.next());
            prop_assert_eq!(paginator.next().previous(), paginator);
        }
    }
}
