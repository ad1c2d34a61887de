use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::{use_translation, Namespace};
use crate::routes::Route;

#[function_component(Footer)]
pub fn footer() -> HtmlResult {
    let t = use_translation(Namespace::Common)?;
    let year = Local::now().year();

    Ok(html! {
        <footer class="footer">
            <div class="container footer__inner">
                <div class="footer__brand">
                    <Link<Route> to={Route::Home} classes="footer__logo">
                        {"Rumeli Simplify.AI"}
                    </Link<Route>>
                    <p class="footer__tagline">{ t.t("footer.tagline") }</p>
                </div>
                <nav class="footer__links">
                    <Link<Route> to={Route::Services} classes="footer__link">{ t.t("nav.services") }</Link<Route>>
                    <Link<Route> to={Route::About} classes="footer__link">{ t.t("nav.about") }</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="footer__link">{ t.t("nav.contact") }</Link<Route>>
                </nav>
                <p class="footer__copy">
                    { format!("© {} Rumeli SimplifAI. {}", year, t.t("footer.rights")) }
                </p>
            </div>
        </footer>
    })
}
