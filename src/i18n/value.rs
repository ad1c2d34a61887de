use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One validated entry of a locale bundle.
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleValue {
    Text(String),
    /// Copy that carries inline markup (`<strong>`, `<br/>`) and has to be
    /// injected as HTML rather than escaped.
    Html(String),
    List(Vec<String>),
    Records(Vec<ContentRecord>),
}

impl LocaleValue {
    pub fn kind(&self) -> &'static str {
        match self {
            LocaleValue::Text(_) => "text",
            LocaleValue::Html(_) => "html",
            LocaleValue::List(_) => "list",
            LocaleValue::Records(_) => "records",
        }
    }

    /// Classifies a non-object JSON value. Objects are flattened by the
    /// bundle parser before they get here.
    pub(crate) fn from_json(value: Value) -> Result<Self, String> {
        match value {
            Value::String(s) => {
                if contains_markup(&s) {
                    Ok(LocaleValue::Html(s))
                } else {
                    Ok(LocaleValue::Text(s))
                }
            }
            Value::Array(items) => classify_array(items),
            Value::Null => Err("null is not a translation".to_string()),
            Value::Bool(_) => Err("booleans are not translations".to_string()),
            Value::Number(_) => Err("numbers must be quoted".to_string()),
            Value::Object(_) => Err("nested object reached the classifier".to_string()),
        }
    }
}

fn classify_array(items: Vec<Value>) -> Result<LocaleValue, String> {
    if items.iter().all(Value::is_string) {
        let strings = items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect();
        return Ok(LocaleValue::List(strings));
    }

    if items.iter().all(Value::is_object) {
        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let record = serde_json::from_value::<ContentRecord>(item)
                .map_err(|e| format!("record #{index}: {e}"))?;
            records.push(record);
        }
        return Ok(LocaleValue::Records(records));
    }

    Err("arrays must hold only strings or only objects".to_string())
}

/// A tag opener: `<` followed by a letter or `/`, closed somewhere later.
pub(crate) fn contains_markup(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'<'
            && bytes
                .get(i + 1)
                .map_or(false, |next| next.is_ascii_alphabetic() || *next == b'/')
            && s[i..].contains('>')
    })
}

/// Drops tags and keeps the text between them. `<br>` becomes a space.
pub(crate) fn strip_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find('<') {
        let opens_tag = rest[start + 1..]
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_alphabetic() || c == '/');
        let Some(len) = rest[start..].find('>').filter(|_| opens_tag) else {
            out.push_str(&rest[..=start]);
            rest = &rest[start + 1..];
            continue;
        };
        out.push_str(&rest[..start]);
        let tag = &rest[start + 1..start + len];
        if tag.trim_end_matches('/').trim().eq_ignore_ascii_case("br") {
            out.push(' ');
        }
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    out
}

/// Card, feature, stat and stage items share this shape. Every field is
/// optional here; each block checks the fields it actually needs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub text: Option<String>,
    pub value: Option<String>,
    pub label: Option<String>,
    #[serde(alias = "iconType")]
    pub icon: Option<String>,
    pub link: Option<String>,
    pub link_to: Option<String>,
    pub color: Option<String>,
}

impl ContentRecord {
    pub fn id_or(&self, index: usize) -> String {
        self.id.clone().unwrap_or_else(|| index.to_string())
    }

    /// `(title, description)` when both are present and non-blank.
    pub fn title_and_description(&self) -> Option<(&str, &str)> {
        Some((non_blank(&self.title)?, non_blank(&self.description)?))
    }

    /// `(value, label)` when both are present and non-blank.
    pub fn value_and_label(&self) -> Option<(&str, &str)> {
        Some((non_blank(&self.value)?, non_blank(&self.label)?))
    }

    pub fn text(&self) -> Option<&str> {
        non_blank(&self.text)
    }

    pub fn title(&self) -> Option<&str> {
        non_blank(&self.title)
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
