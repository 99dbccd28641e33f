use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum Icon {
    ChevronLeft,
    ChevronRight,
    Close,
    Phone,
    Mail,
    MapPin,
}

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::ChevronLeft => &["M15 19l-7-7 7-7"],
            Icon::ChevronRight => &["M9 5l7 7-7 7"],
            Icon::Close => &["M6 18L18 6M6 6l12 12"],
            Icon::Phone => &["M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z"],
            Icon::Mail => &["M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"],
            Icon::MapPin => &[
                "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z",
                "M15 11a3 3 0 11-6 0 3 3 0 016 0z",
            ],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StrokeIconProps {
    pub icon: Icon,
}

/// Outline icon drawn with the current text colour.
#[function_component(StrokeIcon)]
pub fn stroke_icon(props: &StrokeIconProps) -> Html {
    html! {
        <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
            { for props.icon.paths().iter().map(|d| html! {
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={*d} />
            }) }
        </svg>
    }
}

#[function_component(FacebookIcon)]
pub fn facebook_icon() -> Html {
    html! {
        <svg class="social-icon" fill="currentColor" viewBox="0 0 24 24">
            <path d="M22.675 0h-21.35c-.732 0-1.325.593-1.325 1.325v21.351c0 .731.593 1.324 1.325 1.324h11.495v-9.294h-3.128v-3.622h3.128v-2.671c0-3.1 1.893-4.788 4.659-4.788 1.325 0 2.463.099 2.795.143v3.24l-1.918.001c-1.504 0-1.795.715-1.795 1.763v2.313h3.587l-.467 3.622h-3.12v9.293h6.116c.73 0 1.323-.593 1.323-1.325v-21.35c0-.732-.593-1.325-1.325-1.325z" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_draws_something() {
        let icons = [
            Icon::ChevronLeft,
            Icon::ChevronRight,
            Icon::Close,
            Icon::Phone,
            Icon::Mail,
            Icon::MapPin,
        ];
        for icon in icons {
            assert!(!icon.paths().is_empty());
            assert!(icon.paths().iter().all(|d| d.starts_with('M')));
        }
        assert_eq!(Icon::MapPin.paths().len(), 2);
    }
}
