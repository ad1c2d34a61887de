//! Checks the shipped locale files with the same parser the site uses.
//!
//! Every bundle must parse without schema warnings, both languages must
//! define the same keys with the same shapes, and every key a page reads
//! has to be there.

use std::collections::BTreeSet;

use simplifai_site::i18n::{Language, LocaleBundle, LocaleValue, Namespace};

fn source(language: Language, namespace: Namespace) -> &'static str {
    macro_rules! bundle {
        ($lang:literal, $ns:literal) => {
            include_str!(concat!("../public/locales/", $lang, "/", $ns, ".json"))
        };
    }
    match (language, namespace) {
        (Language::Tr, Namespace::Common) => bundle!("tr", "common"),
        (Language::Tr, Namespace::Home) => bundle!("tr", "home"),
        (Language::Tr, Namespace::About) => bundle!("tr", "about"),
        (Language::Tr, Namespace::Services) => bundle!("tr", "services"),
        (Language::Tr, Namespace::Solutions) => bundle!("tr", "solutions"),
        (Language::Tr, Namespace::Contact) => bundle!("tr", "contact"),
        (Language::Tr, Namespace::Accelerate) => bundle!("tr", "accelerate"),
        (Language::En, Namespace::Common) => bundle!("en", "common"),
        (Language::En, Namespace::Home) => bundle!("en", "home"),
        (Language::En, Namespace::About) => bundle!("en", "about"),
        (Language::En, Namespace::Services) => bundle!("en", "services"),
        (Language::En, Namespace::Solutions) => bundle!("en", "solutions"),
        (Language::En, Namespace::Contact) => bundle!("en", "contact"),
        (Language::En, Namespace::Accelerate) => bundle!("en", "accelerate"),
    }
}

fn load(language: Language, namespace: Namespace) -> LocaleBundle {
    let (bundle, warnings) = LocaleBundle::parse(language, namespace, source(language, namespace))
        .unwrap_or_else(|e| panic!("{language}/{namespace}: {e}"));
    assert!(
        warnings.is_empty(),
        "{language}/{namespace} has unusable values: {warnings:?}"
    );
    bundle
}

#[test]
fn every_bundle_parses_cleanly() {
    for language in Language::ALL {
        for namespace in Namespace::ALL {
            let bundle = load(language, namespace);
            assert!(!bundle.is_empty(), "{language}/{namespace} is empty");
        }
    }
}

#[test]
fn languages_define_the_same_keys_and_shapes() {
    let mut failures = Vec::new();

    for namespace in Namespace::ALL {
        let tr = load(Language::Tr, namespace);
        let en = load(Language::En, namespace);
        let tr_keys: BTreeSet<&str> = tr.keys().collect();
        let en_keys: BTreeSet<&str> = en.keys().collect();

        for key in tr_keys.symmetric_difference(&en_keys) {
            failures.push(format!("{namespace}: `{key}` exists in only one language"));
        }
        for key in tr_keys.intersection(&en_keys) {
            let (a, b) = (tr.get(key).map(LocaleValue::kind), en.get(key).map(LocaleValue::kind));
            if a != b {
                failures.push(format!("{namespace}: `{key}` is {a:?} in tr but {b:?} in en"));
            }
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Text,
    List,
    Records,
}

/// Every key a component reads, grouped by the component that reads it.
const PAGE_KEYS: &[(Namespace, &str, Shape)] = &[
    // Layout, Navbar, Footer, LanguageToggle
    (Namespace::Common, "a11y.skipToContent", Shape::Text),
    (Namespace::Common, "nav.home", Shape::Text),
    (Namespace::Common, "nav.services", Shape::Text),
    (Namespace::Common, "nav.about", Shape::Text),
    (Namespace::Common, "nav.contact", Shape::Text),
    (Namespace::Common, "nav.cta", Shape::Text),
    (Namespace::Common, "nav.openMenu", Shape::Text),
    (Namespace::Common, "nav.closeMenu", Shape::Text),
    (Namespace::Common, "footer.tagline", Shape::Text),
    (Namespace::Common, "footer.rights", Shape::Text),
    (Namespace::Common, "language.tr", Shape::Text),
    (Namespace::Common, "language.en", Shape::Text),
    // NotFound
    (Namespace::Common, "notFound.title", Shape::Text),
    (Namespace::Common, "notFound.message", Shape::Text),
    (Namespace::Common, "notFound.back", Shape::Text),
    // Home
    (Namespace::Home, "hero.title", Shape::Text),
    (Namespace::Home, "hero.subtitle", Shape::Text),
    (Namespace::Home, "hero.cta", Shape::Text),
    (Namespace::Home, "approach.title", Shape::Text),
    (Namespace::Home, "approach.subtitle", Shape::Text),
    (Namespace::Home, "approach.cards", Shape::Records),
    (Namespace::Home, "why.title", Shape::Text),
    (Namespace::Home, "why.reasons", Shape::Records),
    (Namespace::Home, "partners.title", Shape::Text),
    // About
    (Namespace::About, "hero.title", Shape::Text),
    (Namespace::About, "hero.subtitle", Shape::Text),
    (Namespace::About, "whoWeAre.title", Shape::Text),
    (Namespace::About, "whoWeAre.intro", Shape::Text),
    (Namespace::About, "whoWeAre.description", Shape::Text),
    (Namespace::About, "belief.title", Shape::Text),
    (Namespace::About, "belief.main", Shape::Text),
    (Namespace::About, "belief.description", Shape::Text),
    (Namespace::About, "belief.extended", Shape::Text),
    (Namespace::About, "whatWeDo.title", Shape::Text),
    (Namespace::About, "whatWeDo.items", Shape::Records),
    // Services
    (Namespace::Services, "hero.title", Shape::Text),
    (Namespace::Services, "hero.subtitle", Shape::Text),
    (Namespace::Services, "hero.description", Shape::Text),
    (Namespace::Services, "services", Shape::Records),
    (Namespace::Services, "cta.text", Shape::Text),
    (Namespace::Services, "cta.button", Shape::Text),
    // SolutionSwitcher
    (Namespace::Solutions, "switcher.title", Shape::Text),
    (Namespace::Solutions, "cards", Shape::Records),
    // Simplify
    (Namespace::Solutions, "simplify.hero.title", Shape::Text),
    (Namespace::Solutions, "simplify.hero.subtitle", Shape::Text),
    (Namespace::Solutions, "simplify.hero.description", Shape::Text),
    (Namespace::Solutions, "simplify.hero.cta", Shape::Text),
    (Namespace::Solutions, "simplify.intro.title", Shape::Text),
    (Namespace::Solutions, "simplify.intro.description", Shape::Text),
    (Namespace::Solutions, "simplify.whatWeDo.title", Shape::Text),
    (Namespace::Solutions, "simplify.whatWeDo.subtitle", Shape::Text),
    (Namespace::Solutions, "simplify.whatWeDo.items", Shape::Records),
    (Namespace::Solutions, "simplify.impact.title", Shape::Text),
    (Namespace::Solutions, "simplify.impact.items", Shape::List),
    (Namespace::Solutions, "simplify.impact.metrics", Shape::Records),
    (Namespace::Solutions, "simplify.footer.main", Shape::Text),
    (Namespace::Solutions, "simplify.footer.cta", Shape::Text),
    (Namespace::Solutions, "simplify.footer.button", Shape::Text),
    // Intellify
    (Namespace::Solutions, "smartify.hero.title", Shape::Text),
    (Namespace::Solutions, "smartify.hero.subtitle", Shape::Text),
    (Namespace::Solutions, "smartify.hero.description", Shape::Text),
    (Namespace::Solutions, "smartify.intro.title", Shape::Text),
    (Namespace::Solutions, "smartify.intro.description", Shape::Text),
    (Namespace::Solutions, "smartify.intro.conclusion", Shape::Text),
    (Namespace::Solutions, "smartify.purpose.title", Shape::Text),
    (Namespace::Solutions, "smartify.purpose.text", Shape::Text),
    (Namespace::Solutions, "smartify.whatWeDo.title", Shape::Text),
    (Namespace::Solutions, "smartify.whatWeDo.items", Shape::Records),
    (Namespace::Solutions, "smartify.impact.title", Shape::Text),
    (Namespace::Solutions, "smartify.impact.items", Shape::List),
    (Namespace::Solutions, "smartify.approach.title", Shape::Text),
    (Namespace::Solutions, "smartify.approach.main", Shape::Text),
    (Namespace::Solutions, "smartify.approach.conclusion", Shape::Text),
    (Namespace::Solutions, "smartify.methodology.title", Shape::Text),
    (Namespace::Solutions, "smartify.methodology.subtitle", Shape::Text),
    (Namespace::Solutions, "smartify.methodology.stages", Shape::Records),
    (Namespace::Solutions, "smartify.methodology.footer", Shape::Text),
    (Namespace::Common, "buttons.startTogether", Shape::Text),
    // Accelerate
    (Namespace::Accelerate, "hero.title", Shape::Text),
    (Namespace::Accelerate, "hero.subtitle", Shape::Text),
    (Namespace::Accelerate, "hero.intro", Shape::Text),
    (Namespace::Accelerate, "purpose.title", Shape::Text),
    (Namespace::Accelerate, "purpose.description", Shape::Text),
    (Namespace::Accelerate, "whatWeDo.title", Shape::Text),
    (Namespace::Accelerate, "whatWeDo.items", Shape::Records),
    (Namespace::Accelerate, "impact.title", Shape::Text),
    (Namespace::Accelerate, "impact.items", Shape::List),
    (Namespace::Accelerate, "impact.metricsLabel", Shape::Text),
    (Namespace::Accelerate, "impact.metrics", Shape::Records),
    (Namespace::Accelerate, "perspective.title", Shape::Text),
    (Namespace::Accelerate, "perspective.text", Shape::Text),
    (Namespace::Accelerate, "cta.title", Shape::Text),
    (Namespace::Accelerate, "cta.button", Shape::Text),
    // Contact (per-field labels and placeholders are checked separately)
    (Namespace::Contact, "hero.title", Shape::Text),
    (Namespace::Contact, "hero.subtitle", Shape::Text),
    (Namespace::Contact, "info.title", Shape::Text),
    (Namespace::Contact, "info.description", Shape::Text),
    (Namespace::Contact, "info.email.label", Shape::Text),
    (Namespace::Contact, "info.phone.label", Shape::Text),
    (Namespace::Contact, "info.address.label", Shape::Text),
    (Namespace::Contact, "info.address.value", Shape::Text),
    (Namespace::Contact, "form.required", Shape::Text),
    (Namespace::Contact, "form.sending", Shape::Text),
    (Namespace::Contact, "form.submit", Shape::Text),
    (Namespace::Contact, "form.success.title", Shape::Text),
    (Namespace::Contact, "form.success.message", Shape::Text),
    (Namespace::Contact, "form.success.again", Shape::Text),
];

fn shape_of(value: &LocaleValue) -> Shape {
    match value {
        LocaleValue::Text(_) | LocaleValue::Html(_) => Shape::Text,
        LocaleValue::List(_) => Shape::List,
        LocaleValue::Records(_) => Shape::Records,
    }
}

#[test]
fn page_keys_resolve_in_both_languages() {
    for language in Language::ALL {
        for (namespace, key, shape) in PAGE_KEYS {
            let bundle = load(language, *namespace);
            let value = bundle
                .get(key)
                .unwrap_or_else(|| panic!("{language}/{namespace}: missing `{key}`"));
            assert_eq!(shape_of(value), *shape, "{language}/{namespace}: `{key}`");
            match value {
                LocaleValue::Text(s) | LocaleValue::Html(s) => assert!(!s.trim().is_empty()),
                LocaleValue::List(items) => assert!(!items.is_empty()),
                LocaleValue::Records(records) => assert!(!records.is_empty()),
            }
        }
    }
}

#[test]
fn every_contact_field_has_a_label_and_placeholder() {
    for language in Language::ALL {
        let bundle = load(language, Namespace::Contact);
        for field in ["name", "email", "company", "subject", "message"] {
            for key in [format!("form.{field}"), format!("form.{field}Placeholder")] {
                assert!(
                    matches!(bundle.get(&key), Some(LocaleValue::Text(s)) if !s.trim().is_empty()),
                    "{language}/contact: missing `{key}`"
                );
            }
        }
    }
}

#[test]
fn solution_cards_name_the_three_lines() {
    for language in Language::ALL {
        let bundle = load(language, Namespace::Solutions);
        let Some(LocaleValue::Records(cards)) = bundle.get("cards") else {
            panic!("{language}: solution cards missing");
        };
        let ids: Vec<_> = cards.iter().filter_map(|c| c.id.as_deref()).collect();
        assert_eq!(ids, ["simplify", "accelerate", "intellify"]);
    }
}

#[test]
fn hero_copy_with_markup_is_kept_as_html() {
    let bundle = load(Language::Tr, Namespace::Home);
    assert!(matches!(bundle.get("hero.title"), Some(LocaleValue::Html(_))));
    assert!(matches!(bundle.get("hero.subtitle"), Some(LocaleValue::Text(_))));
}
