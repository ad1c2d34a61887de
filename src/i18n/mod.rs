//! Locale loading and key resolution.
//!
//! Bundles live under `public/locales/{language}/{namespace}.json` and are
//! fetched lazily, one (language, namespace) pair at a time. Every fetched
//! bundle is flattened into dot-path keys and validated into [`LocaleValue`]s
//! before it enters the [`Catalog`]. Lookups go exact language, then the
//! fallback language, then echo the key.
//!
//! Components never talk to the catalog directly; they pull a [`Translator`]
//! out of the [`I18nProvider`] context with [`use_translation`], which
//! suspends the component until the namespace is available.

mod bundle;
mod catalog;
mod error;
mod loader;
mod provider;
mod value;

pub use bundle::{LocaleBundle, SchemaWarning};
pub use catalog::{Catalog, Resolved, Slot};
pub use error::LocaleError;
pub use provider::{
    initial_language, use_i18n, use_translation, I18n, I18nProvider, I18nProviderProps, Translator,
};
pub use value::{ContentRecord, LocaleValue};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Tr,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Tr, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }

    /// Accepts bare codes and region-tagged forms (`en-US`, `tr_TR`), as
    /// found in `<html lang>`.
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "tr" => Some(Language::Tr),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Native name, used as the toggle's accessible label.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Tr => "Türkçe",
            Language::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    Common,
    Home,
    About,
    Services,
    Solutions,
    Contact,
    Accelerate,
}

impl Namespace {
    pub const ALL: [Namespace; 7] = [
        Namespace::Common,
        Namespace::Home,
        Namespace::About,
        Namespace::Services,
        Namespace::Solutions,
        Namespace::Contact,
        Namespace::Accelerate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Common => "common",
            Namespace::Home => "home",
            Namespace::About => "about",
            Namespace::Services => "services",
            Namespace::Solutions => "solutions",
            Namespace::Contact => "contact",
            Namespace::Accelerate => "accelerate",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.as_str() == name)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
