use yew::prelude::*;

use crate::components::ui::{Button, ButtonVariant, Section};
use crate::i18n::{use_translation, Namespace};
use crate::routes::Route;

#[function_component(NotFound)]
pub fn not_found() -> HtmlResult {
    let t = use_translation(Namespace::Common)?;

    Ok(html! {
        <div class="page page--not-found">
            <Section>
                <div class="not-found">
                    <p class="not-found__code">{"404"}</p>
                    <h1 class="not-found__title">{ t.t("notFound.title") }</h1>
                    <p class="not-found__text">{ t.t("notFound.message") }</p>
                    <Button to={Route::Home} variant={ButtonVariant::Outline}>{ t.t("notFound.back") }</Button>
                </div>
            </Section>
        </div>
    })
}
