use yew::prelude::*;

use crate::config::{BOOKING_URL, BUSINESS_NAME, LOGO_SRC};
use crate::content::{anchor_href, NAV_ITEMS};
use crate::state::nav::{NavAction, NavState};
use crate::state::scroll::{current_offset, is_scrolled, ScrollWatcher};

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let nav = use_reducer_eq(NavState::default);

    {
        let nav = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                // A reload can restore the page mid-scroll.
                match current_offset() {
                    Ok(offset) => nav.dispatch(NavAction::Scrolled(is_scrolled(offset))),
                    Err(err) => log::warn!("navigation: {}", err),
                }

                let watcher = ScrollWatcher::attach(move |offset| {
                    nav.dispatch(NavAction::Scrolled(is_scrolled(offset)));
                })
                .map_err(|err| log::error!("navigation: {}", err))
                .ok();

                move || drop(watcher)
            },
            (),
        );
    }

    let toggle_menu = {
        let nav = nav.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::ToggleMenu);
        })
    };

    let select_item = {
        let nav = nav.dispatcher();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::SelectItem))
    };

    html! {
        <nav class={nav.bar_class()}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 0.5rem 0;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(12px);
                        transition: all 0.3s ease;
                        animation: navDrop 0.5s ease-out;
                    }
                    .top-nav.compact {
                        padding: 0.25rem 0;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    @keyframes navDrop {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo img {
                        height: 8rem;
                        width: auto;
                        margin: -1rem 0;
                        transition: transform 0.2s;
                    }
                    .nav-logo:hover img {
                        transform: scale(1.02);
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #4b5563;
                        text-decoration: none;
                        transition: color 0.2s, transform 0.2s;
                        display: inline-block;
                    }
                    .nav-link:hover {
                        color: #000;
                        transform: translateY(-2px);
                    }
                    .nav-cta {
                        background: #004aad;
                        color: #fff;
                        padding: 0.75rem 1.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: background 0.2s;
                    }
                    .nav-cta:hover {
                        background: #003580;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 1.5rem;
                        height: 2px;
                        background: #1f2937;
                        transition: all 0.3s;
                    }
                    .burger-menu span:nth-child(2) {
                        margin: 0.25rem 0;
                    }
                    .burger-menu.open span:nth-child(1) {
                        transform: translateY(6px) rotate(45deg);
                    }
                    .burger-menu.open span:nth-child(2) {
                        opacity: 0;
                    }
                    .burger-menu.open span:nth-child(3) {
                        transform: translateY(-6px) rotate(-45deg);
                    }
                    .mobile-menu {
                        display: none;
                        background: #fff;
                        border-top: 1px solid #f3f4f6;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        padding: 1rem 1.5rem;
                        animation: fadeDown 0.2s ease-out;
                    }
                    .mobile-menu a {
                        display: block;
                        font-size: 1.125rem;
                        color: #374151;
                        text-decoration: none;
                        margin-bottom: 1rem;
                    }
                    .mobile-menu a:hover {
                        color: #004aad;
                    }
                    .mobile-menu a.nav-cta {
                        color: #fff;
                        text-align: center;
                        margin-bottom: 0;
                    }
                    @keyframes fadeDown {
                        from { opacity: 0; transform: translateY(-10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (max-width: 767px) {
                        .nav-links, .nav-content > .nav-cta {
                            display: none;
                        }
                        .burger-menu {
                            display: flex;
                        }
                        .mobile-menu {
                            display: block;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <img src={LOGO_SRC} alt={BUSINESS_NAME} />
                </a>

                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a key={*item} href={anchor_href(item)} class="nav-link">{*item}</a>
                    }) }
                </div>

                <a href={BOOKING_URL} target="_blank" rel="noopener noreferrer" class="nav-cta">
                    {"Schedule Estimate"}
                </a>

                <button class={nav.burger_class()} onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            {
                if nav.menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_ITEMS.iter().map(|item| html! {
                                <a key={*item} href={anchor_href(item)} onclick={select_item.clone()}>
                                    {*item}
                                </a>
                            }) }
                            <a href={BOOKING_URL} target="_blank" rel="noopener noreferrer" class="nav-cta">
                                {"Schedule Estimate"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
