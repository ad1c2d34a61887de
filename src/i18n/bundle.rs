use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::{Language, LocaleError, LocaleValue, Namespace};

/// A key the parser dropped, with the reason it could not be used.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaWarning {
    pub key: String,
    pub reason: String,
}

/// All translations of one namespace in one language, keyed by dot path.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleBundle {
    pub language: Language,
    pub namespace: Namespace,
    entries: BTreeMap<String, LocaleValue>,
}

impl LocaleBundle {
    pub fn new(language: Language, namespace: Namespace) -> Self {
        Self {
            language,
            namespace,
            entries: BTreeMap::new(),
        }
    }

    /// Parses a bundle document. Values with an unusable shape are skipped
    /// and reported back instead of failing the whole bundle.
    pub fn parse(
        language: Language,
        namespace: Namespace,
        source: &str,
    ) -> Result<(Self, Vec<SchemaWarning>), LocaleError> {
        let root: Value = serde_json::from_str(source)
            .map_err(|source| LocaleError::Parse { namespace, source })?;
        let Value::Object(root) = root else {
            return Err(LocaleError::NotAnObject { namespace });
        };

        let mut bundle = Self::new(language, namespace);
        let mut warnings = Vec::new();
        bundle.flatten("", root, &mut warnings);
        Ok((bundle, warnings))
    }

    fn flatten(&mut self, prefix: &str, object: Map<String, Value>, warnings: &mut Vec<SchemaWarning>) {
        for (name, value) in object {
            let key = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}.{name}")
            };
            match value {
                Value::Object(inner) => self.flatten(&key, inner, warnings),
                other => match LocaleValue::from_json(other) {
                    Ok(value) => {
                        self.entries.insert(key, value);
                    }
                    Err(reason) => warnings.push(SchemaWarning { key, reason }),
                },
            }
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: LocaleValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&LocaleValue> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME_EN: &str = r#"{
        "hero": {
            "title": "Make <span class=\"accent\">AI</span> simple",
            "subtitle": "We help teams adopt AI.",
            "cta": "Explore services"
        },
        "why": {
            "title": "Why SimplifAI?",
            "reasons": [{ "id": "fast", "text": "Fast results" }]
        },
        "impact": ["Less manual work", "Clear ownership"],
        "broken": 12,
        "empty": {}
    }"#;

    #[test]
    fn nested_objects_flatten_to_dot_paths() {
        let (bundle, warnings) = LocaleBundle::parse(Language::En, Namespace::Home, HOME_EN).unwrap();
        assert!(matches!(bundle.get("hero.title"), Some(LocaleValue::Html(_))));
        assert_eq!(
            bundle.get("hero.cta"),
            Some(&LocaleValue::Text("Explore services".into()))
        );
        assert!(matches!(bundle.get("why.reasons"), Some(LocaleValue::Records(r)) if r.len() == 1));
        assert!(matches!(bundle.get("impact"), Some(LocaleValue::List(l)) if l.len() == 2));
        assert_eq!(bundle.get("hero"), None);
        assert_eq!(bundle.len(), 6);

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "broken");
    }

    #[test]
    fn top_level_must_be_an_object() {
        let err = LocaleBundle::parse(Language::Tr, Namespace::Common, "[1, 2]").unwrap_err();
        assert!(matches!(err, LocaleError::NotAnObject { namespace: Namespace::Common }));

        let err = LocaleBundle::parse(Language::Tr, Namespace::Common, "{ nope").unwrap_err();
        assert!(matches!(err, LocaleError::Parse { .. }));
    }
}
