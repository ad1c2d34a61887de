//! Page chrome: navigation, footer and the frame around every route.

mod footer;
mod language_toggle;
mod loader;
mod navbar;

pub use footer::Footer;
pub use language_toggle::LanguageToggle;
pub use loader::{PageLoader, PageLoaderProps, ScrollToTop};
pub use navbar::{is_active, ChromeEvent, NavChrome, Navbar};

use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{self, hover_stylesheet};
use crate::components::motion::{Reveal, Trigger};
use crate::i18n::{use_translation, Namespace};
use crate::routes::{switch, Route};

#[function_component(Layout)]
pub fn layout() -> HtmlResult {
    let t = use_translation(Namespace::Common)?;
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    Ok(html! {
        <>
            <style>{ hover_stylesheet() }</style>
            <a href="#main-content" class="skip-link">{ t.t("a11y.skipToContent") }</a>
            <ScrollToTop />
            <Navbar />
            <main id="main-content" class="main">
                // Keyed on the path so each page replays its entrance.
                <Reveal key={path} preset={animation::PAGE_TRANSITION} trigger={Trigger::Mount}>
                    <Switch<Route> render={switch} />
                </Reveal>
            </main>
            <Footer />
        </>
    })
}
