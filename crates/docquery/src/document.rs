//! Generic nested documents.
//!
//! A [`Document`] is the store-neutral shape a filter renders into: maps
//! keyed by field names or operator tokens, arrays, and typed scalars.

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::Result;
use crate::value::{List, Value};

/// Ordered key/value map inside a [`Document`].
pub type Map = IndexMap<String, Document>;

/// A rendered filter, sort, or record document.
///
/// Map equality ignores key order.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    DateTime(DateTime<Utc>),
    String(String),
    /// Regular expression with its option flags (e.g. `i`).
    Regex { pattern: String, options: String },
    Array(Vec<Document>),
    Map(Map),
}

impl Document {
    /// The empty map, which as a filter matches every record.
    pub fn empty() -> Self {
        Document::Map(Map::new())
    }

    /// A map holding a single entry.
    pub fn entry(key: impl Into<String>, value: Document) -> Self {
        let mut map = Map::new();
        map.insert(key.into(), value);
        Document::Map(map)
    }

    /// Returns the map, if this document is one.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Document::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the array, if this document is one.
    pub fn as_array(&self) -> Option<&[Document]> {
        match self {
            Document::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up a key when this document is a map.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Returns `true` for an empty map.
    pub fn is_empty_map(&self) -> bool {
        matches!(self, Document::Map(map) if map.is_empty())
    }

    /// Converts into a JSON value.
    ///
    /// Timestamps become RFC 3339 strings, regexes become
    /// `{"pattern": .., "options": ..}` and non-finite floats become null.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            Document::Null => Json::Null,
            Document::Bool(b) => Json::Bool(*b),
            Document::Int(n) => Json::from(*n),
            Document::Float(n) => serde_json::Number::from_f64(*n)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            Document::DateTime(t) => Json::String(format_datetime(t)),
            Document::String(s) => Json::String(s.clone()),
            Document::Regex { pattern, options } => serde_json::json!({
                "pattern": pattern,
                "options": options,
            }),
            Document::Array(items) => Json::Array(items.iter().map(Document::to_json).collect()),
            Document::Map(map) => Json::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

fn format_datetime(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl From<&Value> for Document {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(*b),
            Value::Int(n) => Document::Int(*n),
            Value::Float(n) => Document::Float(*n),
            Value::Timestamp(t) => Document::DateTime(*t),
            Value::String(s) => Document::String(s.clone()),
            Value::List(list) => Document::from(list),
        }
    }
}

impl From<&List> for Document {
    fn from(list: &List) -> Self {
        let items = match list {
            List::Bool(v) => v.iter().copied().map(Document::Bool).collect(),
            List::Int(v) => v.iter().copied().map(Document::Int).collect(),
            List::Float(v) => v.iter().copied().map(Document::Float).collect(),
            List::Timestamp(v) => v.iter().copied().map(Document::DateTime).collect(),
            List::String(v) => v.iter().cloned().map(Document::String).collect(),
        };
        Document::Array(items)
    }
}

impl From<serde_json::Value> for Document {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Document::Null,
            Json::Bool(b) => Document::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Document::Int(i),
                // u64 beyond i64::MAX and fractional numbers
                None => Document::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Document::String(s),
            Json::Array(items) => Document::Array(items.into_iter().map(Document::from).collect()),
            Json::Object(map) => Document::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Document::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Document::Null => serializer.serialize_unit(),
            Document::Bool(b) => serializer.serialize_bool(*b),
            Document::Int(n) => serializer.serialize_i64(*n),
            Document::Float(n) => serializer.serialize_f64(*n),
            Document::DateTime(t) => serializer.serialize_str(&format_datetime(t)),
            Document::String(s) => serializer.serialize_str(s),
            Document::Regex { pattern, options } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("pattern", pattern)?;
                map.serialize_entry("options", options)?;
                map.end()
            }
            Document::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Document::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Marshals any serializable value into a [`Document`].
///
/// Used to turn records and update payloads into documents that can be
/// handed to the store next to a rendered filter.
pub fn to_document<T: Serialize + ?Sized>(value: &T) -> Result<Document> {
    let json = serde_json::to_value(value)?;
    Ok(Document::from(json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn empty_is_an_empty_map() {
        assert!(Document::empty().is_empty_map());
        assert_eq!(Document::empty().to_json(), json!({}));
        assert!(!Document::Array(Vec::new()).is_empty_map());
    }

    #[test]
    fn entry_and_get() {
        let doc = Document::entry("sku", Document::entry("eq", Document::from(&Value::from("A"))));
        assert_eq!(
            doc.get("sku").and_then(|d| d.get("eq")),
            Some(&Document::String("A".to_string()))
        );
        assert_eq!(doc.get("missing"), None);
    }

    #[test]
    fn map_equality_ignores_order() {
        let mut a = Map::new();
        a.insert("x".to_string(), Document::Int(1));
        a.insert("y".to_string(), Document::Int(2));
        let mut b = Map::new();
        b.insert("y".to_string(), Document::Int(2));
        b.insert("x".to_string(), Document::Int(1));
        assert_eq!(Document::Map(a), Document::Map(b));
    }

    #[test]
    fn scalars_to_json() {
        let t = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(Document::DateTime(t).to_json(), json!("2024-01-02T03:04:05Z"));
        assert_eq!(Document::Float(f64::NAN).to_json(), json!(null));
        assert_eq!(
            Document::Regex {
                pattern: "^WSH".to_string(),
                options: "i".to_string()
            }
            .to_json(),
            json!({"pattern": "^WSH", "options": "i"})
        );
    }

    #[test]
    fn list_to_array() {
        let doc = Document::from(&Value::List(List::Int(vec![1, 2, 3])));
        assert_eq!(doc.to_json(), json!([1, 2, 3]));
    }

    #[test]
    fn serialize_matches_to_json() {
        let doc = Document::entry(
            "qty",
            Document::entry("in", Document::Array(vec![Document::Int(1), Document::Float(2.5)])),
        );
        let serialized = serde_json::to_value(&doc).unwrap();
        assert_eq!(serialized, doc.to_json());
    }

    #[test]
    fn marshal_struct() {
        #[derive(serde::Serialize)]
        struct Product {
            sku: String,
            price: f64,
            stock: u32,
            tags: Vec<&'static str>,
        }

        let doc = to_document(&Product {
            sku: "WSH01".to_string(),
            price: 49.99,
            stock: 3,
            tags: vec!["sale"],
        })
        .unwrap();

        assert_eq!(doc.get("sku"), Some(&Document::String("WSH01".to_string())));
        assert_eq!(doc.get("price"), Some(&Document::Float(49.99)));
        assert_eq!(doc.get("stock"), Some(&Document::Int(3)));
        assert_eq!(
            doc.get("tags"),
            Some(&Document::Array(vec![Document::String("sale".to_string())]))
        );
    }

    #[test]
    fn marshal_failure() {
        // JSON object keys must be strings
        let mut bad = BTreeMap::new();
        bad.insert(vec![1u8], 1);
        assert!(to_document(&bad).is_err());
    }
}
