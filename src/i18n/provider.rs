use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, error, info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew::suspense::{Suspension, SuspensionHandle, SuspensionResult};

use super::loader::fetch_bundle;
use super::value::strip_markup;
use super::{Catalog, ContentRecord, Language, LocaleValue, Namespace, Resolved};
use crate::config;

type Waiters = HashMap<(Language, Namespace), Vec<SuspensionHandle>>;

#[derive(Default, PartialEq)]
struct Revision(u64);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Revision(self.0.wrapping_add(1)))
    }
}

/// Locale state shared through context: the active language, the session
/// catalog, and a revision bumped whenever a bundle settles so consumers
/// re-render.
#[derive(Clone)]
pub struct I18n {
    language: Language,
    revision: u64,
    catalog: Rc<RefCell<Catalog>>,
    waiters: Rc<RefCell<Waiters>>,
    on_language: Callback<Language>,
    on_settled: Callback<()>,
    live: bool,
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && self.revision == other.revision
            && Rc::ptr_eq(&self.catalog, &other.catalog)
    }
}

impl I18n {
    /// A handle with no provider behind it: nothing is fetched and every
    /// lookup echoes its key.
    pub fn detached() -> Self {
        Self {
            language: config::DEFAULT_LANGUAGE,
            revision: 0,
            catalog: Rc::new(RefCell::new(Catalog::new(config::FALLBACK_LANGUAGE))),
            waiters: Rc::default(),
            on_language: Callback::noop(),
            on_settled: Callback::noop(),
            live: false,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&self, language: Language) {
        self.on_language.emit(language);
    }

    pub fn translator(&self, namespace: Namespace) -> Translator {
        Translator::new(self.catalog.clone(), self.language, namespace)
    }

    /// Returns a translator once every language in the lookup chain has
    /// settled for `namespace`, suspending the caller until then.
    pub fn ensure(&self, namespace: Namespace) -> SuspensionResult<Translator> {
        if self.live {
            let unrequested = self.catalog.borrow().unrequested(self.language, namespace);
            for language in unrequested {
                self.request(language, namespace);
            }

            let blocking = {
                let catalog = self.catalog.borrow();
                catalog
                    .lookup_chain(self.language)
                    .into_iter()
                    .find(|lang| !catalog.is_settled(*lang, namespace))
            };

            if let Some(language) = blocking {
                let (suspension, handle) = Suspension::new();
                self.waiters
                    .borrow_mut()
                    .entry((language, namespace))
                    .or_default()
                    .push(handle);
                return Err(suspension);
            }
        }

        Ok(self.translator(namespace))
    }

    fn request(&self, language: Language, namespace: Namespace) {
        if !self.catalog.borrow_mut().begin_load(language, namespace) {
            return;
        }
        debug!("Requesting locale bundle {}/{}", language, namespace);

        let catalog = self.catalog.clone();
        let waiters = self.waiters.clone();
        let on_settled = self.on_settled.clone();
        spawn_local(async move {
            match fetch_bundle(language, namespace).await {
                Ok((bundle, warnings)) => {
                    for warning in &warnings {
                        warn!(
                            "Locale bundle {}/{}: dropped `{}` ({})",
                            language, namespace, warning.key, warning.reason
                        );
                    }
                    info!(
                        "Loaded locale bundle {}/{} ({} keys)",
                        language,
                        namespace,
                        bundle.len()
                    );
                    catalog.borrow_mut().insert(bundle);
                }
                Err(err) => {
                    error!("Failed to load locale bundle {}/{}: {}", language, namespace, err);
                    catalog.borrow_mut().mark_failed(language, namespace);
                }
            }

            let handles = waiters
                .borrow_mut()
                .remove(&(language, namespace))
                .unwrap_or_default();
            for handle in handles {
                handle.resume();
            }
            on_settled.emit(());
        });
    }
}

/// Key lookups for one namespace in the language active at render time.
#[derive(Clone)]
pub struct Translator {
    catalog: Rc<RefCell<Catalog>>,
    language: Language,
    namespace: Namespace,
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && self.namespace == other.namespace
            && Rc::ptr_eq(&self.catalog, &other.catalog)
    }
}

impl Translator {
    pub fn new(catalog: Rc<RefCell<Catalog>>, language: Language, namespace: Namespace) -> Self {
        Self {
            catalog,
            language,
            namespace,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn lookup<T>(&self, key: &str, pick: impl FnOnce(&LocaleValue) -> Option<T>) -> Option<T> {
        let catalog = self.catalog.borrow();
        match catalog.resolve(self.language, self.namespace, key) {
            Resolved::Found { value, .. } => {
                let picked = pick(value);
                if picked.is_none() {
                    debug!("{}:{} holds {}, not the requested shape", self.namespace, key, value.kind());
                }
                picked
            }
            Resolved::Missing => {
                debug!("Missing translation {}:{} ({})", self.namespace, key, self.language);
                None
            }
        }
    }

    /// Plain text for `key`, or the key itself when nothing usable exists.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key, |value| match value {
            LocaleValue::Text(s) | LocaleValue::Html(s) => Some(s.clone()),
            _ => None,
        })
        .unwrap_or_else(|| key.to_string())
    }

    pub fn list(&self, key: &str) -> Vec<String> {
        self.lookup(key, |value| match value {
            LocaleValue::List(items) => Some(items.clone()),
            _ => None,
        })
        .unwrap_or_default()
    }

    pub fn records(&self, key: &str) -> Vec<ContentRecord> {
        self.lookup(key, |value| match value {
            LocaleValue::Records(records) => Some(records.clone()),
            _ => None,
        })
        .unwrap_or_default()
    }

    /// Renders `key` with its inline markup intact.
    pub fn html(&self, key: &str) -> Html {
        inject_markup(&self.t(key))
    }
}

fn inject_markup(raw: &str) -> Html {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.create_element("span").ok());

    match element {
        Some(element) => {
            element.set_inner_html(raw);
            Html::VRef(element.into())
        }
        None => html! { { strip_markup(raw) } },
    }
}

#[derive(Properties, PartialEq)]
pub struct I18nProviderProps {
    /// Starting language. Without one the provider reads `<html lang>`.
    #[prop_or_default]
    pub language: Option<Language>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(I18nProvider)]
pub fn i18n_provider(props: &I18nProviderProps) -> Html {
    let explicit = props.language;
    let language = use_state(move || initial_language(explicit, document_language().as_deref()));
    let revision = use_reducer(Revision::default);
    let catalog = use_mut_ref(|| Catalog::new(config::FALLBACK_LANGUAGE));
    let waiters = use_mut_ref(Waiters::new);

    let on_language = {
        let language = language.clone();
        Callback::from(move |next: Language| {
            if *language != next {
                info!("Switching language {} -> {}", *language, next);
                language.set(next);
            }
        })
    };

    let on_settled = {
        let dispatcher = revision.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(()))
    };

    let i18n = I18n {
        language: *language,
        revision: revision.0,
        catalog,
        waiters,
        on_language,
        on_settled,
        live: true,
    };

    {
        let i18n = i18n.clone();
        use_effect_with_deps(
            move |language: &Language| {
                let chain = i18n.catalog.borrow().lookup_chain(*language);
                for namespace in config::PRELOAD_NAMESPACES {
                    for lang in &chain {
                        i18n.request(*lang, *namespace);
                    }
                }
                set_document_language(*language);
                || ()
            },
            *language,
        );
    }

    html! {
        <ContextProvider<I18n> context={i18n}>
            { for props.children.iter() }
        </ContextProvider<I18n>>
    }
}

/// Explicit choice first, then the page's declared language, then the
/// site default. Unsupported codes are ignored.
pub fn initial_language(explicit: Option<Language>, document_lang: Option<&str>) -> Language {
    explicit
        .or_else(|| document_lang.and_then(Language::from_code))
        .unwrap_or(config::DEFAULT_LANGUAGE)
}

fn document_root() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
}

fn document_language() -> Option<String> {
    document_root().and_then(|root| root.get_attribute("lang"))
}

fn set_document_language(language: Language) {
    if let Some(root) = document_root() {
        if let Err(err) = root.set_attribute("lang", language.code()) {
            debug!("Could not set <html lang={}>: {:?}", language, err);
        }
    }
}

#[hook]
pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or_else(|| {
        warn!("No I18nProvider above this component, translations will echo keys");
        I18n::detached()
    })
}

/// Suspends until `namespace` is loaded for the active language (and its
/// fallback), then hands out a translator for it.
#[hook]
pub fn use_translation(namespace: Namespace) -> SuspensionResult<Translator> {
    let i18n = use_i18n();
    i18n.ensure(namespace)
}
