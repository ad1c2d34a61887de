use crate::i18n::{Language, Namespace};

/// Pixel offset after which the navbar switches to its solid background.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Simulated round trip of the contact form.
pub const SUBMIT_DELAY_MS: u32 = 1_000;

pub const CONTACT_EMAIL: &str = "info@simplifai.com";
pub const CONTACT_PHONE: &str = "+90 (212) 000 00 00";

pub const DEFAULT_LANGUAGE: Language = Language::Tr;
pub const FALLBACK_LANGUAGE: Language = Language::En;

/// Namespaces requested for both languages as soon as the app boots.
pub const PRELOAD_NAMESPACES: &[Namespace] = &[
    Namespace::Common,
    Namespace::Home,
    Namespace::About,
    Namespace::Services,
    Namespace::Solutions,
];

/// Root-relative, so bundles come from whatever origin served the app
/// (`trunk serve` on any port, or the release host).
pub const LOAD_PATH: &str = "/locales/{lng}/{ns}.json";

pub fn bundle_url(language: Language, namespace: Namespace) -> String {
    LOAD_PATH
        .replace("{lng}", language.code())
        .replace("{ns}", namespace.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_url_follows_load_path() {
        assert_eq!(bundle_url(Language::En, Namespace::Accelerate), "/locales/en/accelerate.json");
        assert_eq!(bundle_url(Language::Tr, Namespace::Common), "/locales/tr/common.json");
    }

    #[test]
    fn default_and_fallback_differ() {
        assert_ne!(DEFAULT_LANGUAGE, FALLBACK_LANGUAGE);
    }
}
