//! Criteria configuration.
//!
//! [`CriteriaConfig`] names the pagination and sort parameters and sets
//! the defaults applied while composing criteria. It can be built in code
//! or loaded from JSON; missing keys take their default values.
//!
//! ```
//! use docquery::CriteriaConfig;
//!
//! let config = CriteriaConfig::from_json(r#"{"default_size": 50, "index_key": "page"}"#).unwrap();
//! assert_eq!(config.default_size, 50);
//! assert_eq!(config.index_key, "page");
//! assert_eq!(config.size_key, "size");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CriteriaError, Result};

/// Page size used when the request gives none (or a non-positive one).
pub const DEFAULT_SIZE: u64 = 20;

/// Parameter names and defaults used when composing criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaConfig {
    /// Parameter holding the number of records to skip.
    pub index_key: String,
    /// Parameter holding the page size.
    pub size_key: String,
    /// Repeatable plain sort parameter.
    pub sort_key: String,
    /// Repeatable array-form sort parameter; wins over `sort_key`.
    pub sort_array_key: String,
    /// Page size applied when the request gives none.
    pub default_size: i64,
    /// Option flags attached to parsed `regex` / `like` conditions.
    pub regex_options: String,
}

impl Default for CriteriaConfig {
    fn default() -> Self {
        CriteriaConfig {
            index_key: "index".to_string(),
            size_key: "size".to_string(),
            sort_key: "sort".to_string(),
            sort_array_key: "sort[]".to_string(),
            default_size: DEFAULT_SIZE as i64,
            regex_options: "i".to_string(),
        }
    }
}

impl CriteriaConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        CriteriaConfig::default()
    }

    /// Loads a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| CriteriaError::InvalidConfig(e.to_string()))
    }

    pub fn index_key(mut self, key: impl Into<String>) -> Self {
        self.index_key = key.into();
        self
    }

    pub fn size_key(mut self, key: impl Into<String>) -> Self {
        self.size_key = key.into();
        self
    }

    pub fn sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_key = key.into();
        self
    }

    pub fn sort_array_key(mut self, key: impl Into<String>) -> Self {
        self.sort_array_key = key.into();
        self
    }

    pub fn default_size(mut self, size: i64) -> Self {
        self.default_size = size;
        self
    }

    pub fn regex_options(mut self, options: impl Into<String>) -> Self {
        self.regex_options = options.into();
        self
    }

    /// The configured default page size, or [`DEFAULT_SIZE`] when the
    /// configured value is not positive.
    pub fn effective_default_size(&self) -> u64 {
        u64::try_from(self.default_size)
            .ok()
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_SIZE)
    }
}
