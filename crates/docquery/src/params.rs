//! Request parameter multimap.
//!
//! [`Params`] holds decoded `key=value` pairs from a URL query string.
//! A key may repeat; its values keep their input order.

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;

use crate::error::{CriteriaError, Result};

/// Decoded request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, Vec<String>>,
}

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Params::default()
    }

    /// Decodes a URL query string such as `index=0&sort[]=-price`.
    ///
    /// Pairs are separated by `&`; empty pairs are skipped. `+` decodes to
    /// a space and `%XX` to the escaped byte. A `;` separator, a malformed
    /// escape, or a non-UTF-8 result fails the whole query.
    pub fn parse(query: &str) -> Result<Self> {
        let mut params = Params::new();
        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }
            if pair.contains(';') {
                return Err(CriteriaError::InvalidSeparator);
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            params.append(unescape(key)?, unescape(value)?);
        }
        Ok(params)
    }

    /// Adds a value under `key`, after any existing ones.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Returns the first value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value of `key`.
    pub fn get_all(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterates over distinct keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.append(key, value);
        }
        params
    }
}

/// Decodes one query component.
fn unescape(component: &str) -> Result<String> {
    let bytes = component.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                let end = (i + 3).min(bytes.len());
                return Err(CriteriaError::InvalidEscape {
                    escape: String::from_utf8_lossy(&bytes[i..end]).into_owned(),
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    let spaced = component.replace('+', " ");
    let decoded = percent_decode_str(&spaced).decode_utf8()?;
    Ok(decoded.into_owned())
}
