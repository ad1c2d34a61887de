use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;
use yew_router::prelude::*;

use super::LanguageToggle;
use crate::components::ui::{Button, ButtonSize, Icon, IconKind};
use crate::config;
use crate::i18n::{use_translation, Namespace};
use crate::routes::Route;

/// What the navbar looks like: solid once the page has scrolled, and the
/// mobile menu open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavChrome {
    pub scrolled: bool,
    pub menu_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChromeEvent {
    /// Current vertical scroll offset in pixels.
    Scroll(f64),
    ToggleMenu,
    RouteChanged,
}

impl NavChrome {
    pub fn next(self, event: ChromeEvent) -> Self {
        match event {
            ChromeEvent::Scroll(y) => Self {
                scrolled: y > config::SCROLL_THRESHOLD_PX,
                ..self
            },
            ChromeEvent::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            ChromeEvent::RouteChanged => Self {
                menu_open: false,
                ..self
            },
        }
    }
}

impl Reducible for NavChrome {
    type Action = ChromeEvent;

    // Handing back the same Rc keeps scroll events below the threshold
    // from re-rendering the bar.
    fn reduce(self: Rc<Self>, action: ChromeEvent) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// `/` only matches itself; every other link also owns its sub-paths.
pub fn is_active(link: &Route, path: &str) -> bool {
    let target = link.to_path();
    if target == "/" {
        path == "/"
    } else {
        path == target || path.starts_with(&format!("{target}/"))
    }
}

const LINKS: [(Route, &str); 4] = [
    (Route::Home, "nav.home"),
    (Route::Services, "nav.services"),
    (Route::About, "nav.about"),
    (Route::Contact, "nav.contact"),
];

#[function_component(Navbar)]
pub fn navbar() -> HtmlResult {
    let t = use_translation(Namespace::Common)?;
    let chrome = use_reducer_eq(NavChrome::default);
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    {
        let chrome = chrome.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(y) = web_sys::window().and_then(|window| window.scroll_y().ok()) {
                chrome.dispatch(ChromeEvent::Scroll(y));
            }
        });
    }

    {
        let chrome = chrome.clone();
        use_effect_with_deps(
            move |_| {
                chrome.dispatch(ChromeEvent::RouteChanged);
                || ()
            },
            path.clone(),
        );
    }

    let toggle_menu = {
        let chrome = chrome.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            chrome.dispatch(ChromeEvent::ToggleMenu);
        })
    };

    let links = |class: &'static str| -> Html {
        LINKS
            .iter()
            .map(|(route, key)| {
                let active = is_active(route, &path);
                html! {
                    <Link<Route>
                        to={route.clone()}
                        classes={classes!(class, active.then_some("is-active"))}
                    >
                        { t.t(key) }
                    </Link<Route>>
                }
            })
            .collect::<Html>()
    };

    let menu_label = if chrome.menu_open { t.t("nav.closeMenu") } else { t.t("nav.openMenu") };

    Ok(html! {
        <header class={classes!("navbar", chrome.scrolled.then_some("navbar--scrolled"))}>
            <nav class="container navbar__inner" aria-label="Main">
                <Link<Route> to={Route::Home} classes="navbar__logo">
                    <span class="navbar__logo-mark">{"Rumeli"}</span>
                    <span class="navbar__logo-text">{"SimplifAI"}</span>
                </Link<Route>>

                <div class="navbar__links">
                    { links("navbar__link") }
                </div>

                <div class="navbar__actions">
                    <LanguageToggle />
                    <Button to={Route::Contact} size={ButtonSize::Sm}>{ t.t("nav.cta") }</Button>
                </div>

                <button
                    class="navbar__burger"
                    aria-label={menu_label}
                    aria-expanded={chrome.menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <Icon kind={if chrome.menu_open { IconKind::Close } else { IconKind::Menu }} />
                </button>
            </nav>

            if chrome.menu_open {
                <div class="navbar__mobile">
                    { links("navbar__mobile-link") }
                    <div class="navbar__mobile-actions">
                        <LanguageToggle />
                        <Button to={Route::Contact} size={ButtonSize::Md} class="w-full">
                            { t.t("nav.cta") }
                        </Button>
                    </div>
                </div>
            }
        </header>
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[ChromeEvent]) -> Vec<NavChrome> {
        let mut state = Rc::new(NavChrome::default());
        let mut changes = Vec::new();
        for event in events {
            let next = state.clone().reduce(*event);
            if !Rc::ptr_eq(&next, &state) {
                changes.push(*next);
            }
            state = next;
        }
        changes
    }

    #[test]
    fn scroll_crossing_changes_state_once() {
        let changes = run(&[
            ChromeEvent::Scroll(0.0),
            ChromeEvent::Scroll(20.0),
            ChromeEvent::Scroll(21.0),
            ChromeEvent::Scroll(300.0),
            ChromeEvent::Scroll(600.0),
        ]);
        assert_eq!(
            changes,
            vec![NavChrome {
                scrolled: true,
                menu_open: false
            }]
        );
    }

    #[test]
    fn scrolling_back_to_top_clears_background() {
        let changes = run(&[ChromeEvent::Scroll(50.0), ChromeEvent::Scroll(10.0)]);
        assert_eq!(changes.len(), 2);
        assert!(!changes[1].scrolled);
    }

    #[test]
    fn route_change_closes_open_menu() {
        let open = NavChrome::default().next(ChromeEvent::ToggleMenu);
        assert!(open.menu_open);
        let closed = open.next(ChromeEvent::RouteChanged);
        assert!(!closed.menu_open);
        assert_eq!(run(&[ChromeEvent::RouteChanged]), vec![]);
    }

    #[test]
    fn menu_state_is_independent_of_scroll() {
        let state = NavChrome::default()
            .next(ChromeEvent::ToggleMenu)
            .next(ChromeEvent::Scroll(100.0));
        assert!(state.menu_open && state.scrolled);
    }

    #[test]
    fn home_matches_exactly_others_by_prefix() {
        assert!(is_active(&Route::Home, "/"));
        assert!(!is_active(&Route::Home, "/about"));
        assert!(is_active(&Route::Services, "/services"));
        assert!(is_active(&Route::Services, "/services/ai"));
        assert!(!is_active(&Route::Services, "/servicesx"));
    }
}
