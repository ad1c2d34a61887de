use yew::prelude::*;

use crate::i18n::{use_i18n, use_translation, Language, Namespace};

/// `common` key holding the toggle label for `language`.
fn label_key(language: Language) -> String {
    format!("language.{}", language.code())
}

#[function_component(LanguageToggle)]
pub fn language_toggle() -> HtmlResult {
    let i18n = use_i18n();
    let t = use_translation(Namespace::Common)?;
    let current = i18n.language();

    Ok(html! {
        <div class="lang-toggle" role="group" aria-label="Language">
            { for Language::ALL.into_iter().map(|language| {
                let onclick = {
                    let i18n = i18n.clone();
                    Callback::from(move |_: MouseEvent| i18n.set_language(language))
                };
                let active = language == current;
                html! {
                    <button
                        type="button"
                        class={classes!("lang-toggle__option", active.then_some("is-active"))}
                        aria-pressed={active.to_string()}
                        lang={language.code()}
                        title={language.native_name()}
                        {onclick}
                    >
                        { t.t(&label_key(language)) }
                    </button>
                }
            }) }
        </div>
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_come_from_the_language_group() {
        assert_eq!(label_key(Language::Tr), "language.tr");
        assert_eq!(label_key(Language::En), "language.en");
    }
}
