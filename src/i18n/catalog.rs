use std::collections::HashMap;
use std::rc::Rc;

use super::{Language, LocaleBundle, LocaleValue, Namespace};

#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Loading,
    Ready(Rc<LocaleBundle>),
    Failed,
}

impl Slot {
    fn is_settled(&self) -> bool {
        !matches!(self, Slot::Loading)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    Found { language: Language, value: &'a LocaleValue },
    Missing,
}

/// Session cache of every bundle requested so far.
#[derive(Debug)]
pub struct Catalog {
    fallback: Language,
    slots: HashMap<(Language, Namespace), Slot>,
}

impl Catalog {
    pub fn new(fallback: Language) -> Self {
        Self {
            fallback,
            slots: HashMap::new(),
        }
    }

    pub fn fallback(&self) -> Language {
        self.fallback
    }

    /// Languages consulted for `language`, in lookup order.
    pub fn lookup_chain(&self, language: Language) -> Vec<Language> {
        if language == self.fallback {
            vec![language]
        } else {
            vec![language, self.fallback]
        }
    }

    pub fn slot(&self, language: Language, namespace: Namespace) -> Option<&Slot> {
        self.slots.get(&(language, namespace))
    }

    /// Marks the pair as loading. Returns `false` when it was already
    /// requested, so only the first caller issues a fetch.
    pub fn begin_load(&mut self, language: Language, namespace: Namespace) -> bool {
        if self.slots.contains_key(&(language, namespace)) {
            return false;
        }
        self.slots.insert((language, namespace), Slot::Loading);
        true
    }

    pub fn insert(&mut self, bundle: LocaleBundle) {
        self.slots
            .insert((bundle.language, bundle.namespace), Slot::Ready(Rc::new(bundle)));
    }

    pub fn mark_failed(&mut self, language: Language, namespace: Namespace) {
        self.slots.insert((language, namespace), Slot::Failed);
    }

    pub fn is_settled(&self, language: Language, namespace: Namespace) -> bool {
        self.slot(language, namespace).map_or(false, Slot::is_settled)
    }

    /// True once every language in the lookup chain has either loaded or
    /// failed for this namespace.
    pub fn is_ready(&self, language: Language, namespace: Namespace) -> bool {
        self.lookup_chain(language)
            .into_iter()
            .all(|lang| self.is_settled(lang, namespace))
    }

    /// Pairs in the lookup chain that have never been requested.
    pub fn unrequested(&self, language: Language, namespace: Namespace) -> Vec<Language> {
        self.lookup_chain(language)
            .into_iter()
            .filter(|lang| self.slot(*lang, namespace).is_none())
            .collect()
    }

    pub fn resolve(&self, language: Language, namespace: Namespace, key: &str) -> Resolved<'_> {
        for lang in self.lookup_chain(language) {
            if let Some(Slot::Ready(bundle)) = self.slot(lang, namespace) {
                if let Some(value) = bundle.get(key) {
                    return Resolved::Found { language: lang, value };
                }
            }
        }
        Resolved::Missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(language: Language, pairs: &[(&str, &str)]) -> LocaleBundle {
        let mut bundle = LocaleBundle::new(language, Namespace::Common);
        for (key, text) in pairs {
            bundle.insert(*key, LocaleValue::Text(text.to_string()));
        }
        bundle
    }

    fn text<'a>(resolved: Resolved<'a>) -> Option<&'a str> {
        match resolved {
            Resolved::Found { value: LocaleValue::Text(s), .. } => Some(s),
            _ => None,
        }
    }

    #[test]
    fn resolves_exact_then_fallback_then_missing() {
        let mut catalog = Catalog::new(Language::En);
        catalog.insert(bundle(Language::Tr, &[("nav.home", "Ana Sayfa")]));
        catalog.insert(bundle(Language::En, &[("nav.home", "Home"), ("nav.about", "About")]));

        assert_eq!(text(catalog.resolve(Language::Tr, Namespace::Common, "nav.home")), Some("Ana Sayfa"));
        assert_eq!(text(catalog.resolve(Language::Tr, Namespace::Common, "nav.about")), Some("About"));
        assert_eq!(catalog.resolve(Language::Tr, Namespace::Common, "nav.blog"), Resolved::Missing);
    }

    #[test]
    fn switching_language_needs_no_refetch() {
        let mut catalog = Catalog::new(Language::En);
        catalog.insert(bundle(Language::Tr, &[("nav.home", "Ana Sayfa")]));
        catalog.insert(bundle(Language::En, &[("nav.home", "Home")]));

        assert!(catalog.is_ready(Language::Tr, Namespace::Common));
        assert!(catalog.is_ready(Language::En, Namespace::Common));
        assert_eq!(text(catalog.resolve(Language::En, Namespace::Common, "nav.home")), Some("Home"));
        assert!(!catalog.begin_load(Language::En, Namespace::Common));
    }

    #[test]
    fn in_flight_requests_are_deduplicated() {
        let mut catalog = Catalog::new(Language::En);
        assert_eq!(catalog.unrequested(Language::Tr, Namespace::Home), vec![Language::Tr, Language::En]);
        assert!(catalog.begin_load(Language::Tr, Namespace::Home));
        assert!(!catalog.begin_load(Language::Tr, Namespace::Home));
        assert_eq!(catalog.unrequested(Language::Tr, Namespace::Home), vec![Language::En]);
        assert!(!catalog.is_ready(Language::Tr, Namespace::Home));
    }

    #[test]
    fn failed_bundle_settles_and_falls_through() {
        let mut catalog = Catalog::new(Language::En);
        catalog.begin_load(Language::Tr, Namespace::Common);
        catalog.mark_failed(Language::Tr, Namespace::Common);
        let mut en = LocaleBundle::new(Language::En, Namespace::Common);
        en.insert("nav.home", LocaleValue::Text("Home".into()));
        catalog.insert(en);

        assert!(catalog.is_ready(Language::Tr, Namespace::Common));
        assert_eq!(
            catalog.resolve(Language::Tr, Namespace::Common, "nav.home"),
            Resolved::Found {
                language: Language::En,
                value: &LocaleValue::Text("Home".into())
            }
        );
    }

    #[test]
    fn fallback_language_only_waits_on_itself() {
        let mut catalog = Catalog::new(Language::En);
        catalog.insert(LocaleBundle::new(Language::En, Namespace::Contact));
        assert!(catalog.is_ready(Language::En, Namespace::Contact));
        assert!(!catalog.is_ready(Language::Tr, Namespace::Contact));
    }
}
