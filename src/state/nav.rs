use std::rc::Rc;

use yew::Reducible;

/// Navigation bar state. The scroll flag is fed in from the scroll watcher;
/// the menu flag is owned by the hamburger and the mobile links.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    #[must_use]
    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    /// Following any nav link closes the mobile menu.
    #[must_use]
    pub fn select_item(self) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }

    #[must_use]
    pub fn with_scrolled(self, scrolled: bool) -> Self {
        Self { scrolled, ..self }
    }

    pub fn bar_class(&self) -> &'static str {
        if self.scrolled {
            "top-nav compact"
        } else {
            "top-nav"
        }
    }

    pub fn burger_class(&self) -> &'static str {
        if self.menu_open {
            "burger-menu open"
        } else {
            "burger-menu"
        }
    }
}

pub enum NavAction {
    ToggleMenu,
    SelectItem,
    Scrolled(bool),
}

// Reducer form so the long-lived scroll closure never writes back a stale
// copy of the menu flag.
impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        let next = match action {
            NavAction::ToggleMenu => self.toggle_menu(),
            NavAction::SelectItem => self.select_item(),
            NavAction::Scrolled(scrolled) => self.with_scrolled(scrolled),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_expanded_and_closed() {
        let nav = NavState::default();
        assert!(!nav.scrolled);
        assert!(!nav.menu_open);
        assert_eq!(nav.bar_class(), "top-nav");
    }

    #[test]
    fn hamburger_toggles_the_menu() {
        let nav = NavState::default().toggle_menu();
        assert!(nav.menu_open);
        assert_eq!(nav.burger_class(), "burger-menu open");
        assert!(!nav.toggle_menu().menu_open);
    }

    #[test]
    fn selecting_an_item_closes_the_open_menu() {
        let nav = NavState::default().toggle_menu().select_item();
        assert!(!nav.menu_open);
        assert!(!NavState::default().select_item().menu_open);
    }

    #[test]
    fn scroll_flag_only_touches_the_style() {
        let nav = NavState::default().toggle_menu().with_scrolled(true);
        assert!(nav.menu_open);
        assert_eq!(nav.bar_class(), "top-nav compact");
    }

    #[test]
    fn reducer_keeps_the_same_state_when_nothing_changes() {
        let nav = Rc::new(NavState::default());
        let same = nav.clone().reduce(NavAction::Scrolled(false));
        assert!(Rc::ptr_eq(&nav, &same));

        let open = nav.reduce(NavAction::ToggleMenu).reduce(NavAction::Scrolled(true));
        assert_eq!(*open, NavState { scrolled: true, menu_open: true });
        assert!(!open.reduce(NavAction::SelectItem).menu_open);
    }
}
