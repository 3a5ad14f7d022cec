//! Criteria composition.
//!
//! A [`Criteria`] bundles everything a store needs for one find request:
//! the rendered filter, the orderings and the pagination
//! bounds. It is assembled once per request and not modified afterwards.

use serde::Serialize;
use tracing::debug;

use crate::config::{CriteriaConfig, DEFAULT_SIZE};
use crate::document::Document;
use crate::error::Result;
use crate::ordering::{sort_document, sort_from_params, OrderBy};
use crate::pagination::{resolve_index, resolve_size, FindOptions};
use crate::params::Params;
use crate::parser::to_filter_with;

/// Filter, sort and pagination for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criteria {
    filter: Document,
    sort: Option<Vec<OrderBy>>,
    index: u64,
    size: u64,
}

impl Criteria {
    /// Decodes a raw query string and composes criteria for the filter
    /// group called `filter_name`.
    ///
    /// Fails only when the query string itself cannot be decoded.
    ///
    /// ```
    /// use docquery::Criteria;
    ///
    /// let criteria = Criteria::from_query(
    ///     "index=20&size=20&sort[]=sku&sort[]=-amount\
    ///      &filters[0][0][field]=sku&filters[0][0][value]=ABC&filters[0][0][condition]=eq",
    ///     "filters",
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(criteria.index(), 20);
    /// assert_eq!(criteria.sort().map(|s| s.len()), Some(2));
    /// assert!(criteria.filter().get("sku").is_some());
    /// ```
    pub fn from_query(query: &str, filter_name: &str) -> Result<Self> {
        let params = Params::parse(query)?;
        Ok(Criteria::from_params(&params, filter_name))
    }

    /// Composes criteria from decoded parameters with the default
    /// configuration.
    pub fn from_params(params: &Params, filter_name: &str) -> Self {
        Criteria::from_params_with(params, filter_name, &CriteriaConfig::default())
    }

    /// Composes criteria from decoded parameters.
    pub fn from_params_with(params: &Params, filter_name: &str, config: &CriteriaConfig) -> Self {
        let index = resolve_index(params.get(&config.index_key));
        let size = resolve_size(params.get(&config.size_key), config.effective_default_size());
        let sort = sort_from_params(params, config);
        let filter = to_filter_with(params, filter_name, config).render();

        debug!(
            "composed criteria for {filter_name}: index={index} size={size} sort_fields={}",
            sort.as_ref().map_or(0, Vec::len)
        );

        Criteria::new(filter, sort, index, size)
    }

    /// Bundles already prepared parts, e.g. a filter from the fluent
    /// builder. A `size` of `0` is replaced by the default page size.
    pub fn new(filter: Document, sort: Option<Vec<OrderBy>>, index: u64, size: u64) -> Self {
        Criteria {
            filter,
            sort,
            index,
            size: if size == 0 { DEFAULT_SIZE } else { size },
        }
    }

    /// The rendered filter document.
    pub fn filter(&self) -> &Document {
        &self.filter
    }

    /// The orderings, if the request asked for any.
    pub fn sort(&self) -> Option<&[OrderBy]> {
        self.sort.as_deref()
    }

    /// Number of records to skip.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Number of records to return; always positive.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The orderings as a `{field: 1 | -1}` document.
    pub fn sort_document(&self) -> Option<Document> {
        self.sort.as_deref().map(sort_document)
    }

    /// Skip, limit and sort options for a store find operation.
    pub fn find_options(&self) -> FindOptions {
        FindOptions {
            skip: self.index,
            limit: self.size,
            sort: self.sort_document(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CriteriaError;
    use crate::ordering::Dir;
    use serde_json::json;

    #[test]
    fn compose_from_query() {
        let criteria = Criteria::from_query(
            "index=20&size=5&sort[]=sku&sort[]=-amount\
             &filters[0][0][field]=sku&filters[0][0][value]=ABC&filters[0][0][condition]=eq",
            "filters",
        )
        .unwrap();

        assert_eq!(criteria.index(), 20);
        assert_eq!(criteria.size(), 5);
        assert_eq!(
            criteria.sort(),
            Some(&[OrderBy::asc("sku"), OrderBy::new("amount", Dir::Desc)][..])
        );
        assert_eq!(criteria.filter().to_json(), json!({"sku": {"eq": "ABC"}}));
    }

    #[test]
    fn decode_failure_is_returned() {
        assert!(matches!(
            Criteria::from_query("filters[0][0][value]=%zz", "filters"),
            Err(CriteriaError::InvalidEscape { .. })
        ));
    }

    #[test]
    fn defaults_when_empty() {
        let criteria = Criteria::from_params(&Params::new(), "filters");
        assert_eq!(criteria.index(), 0);
        assert_eq!(criteria.size(), 20);
        assert_eq!(criteria.sort(), None);
        assert!(criteria.filter().is_empty_map());
        assert_eq!(criteria.sort_document(), None);
    }

    #[test]
    fn custom_config() {
        let params: Params = [("page", "3"), ("limit", "0"), ("order", "-date")]
            .into_iter()
            .collect();
        let config = CriteriaConfig::new()
            .index_key("page")
            .size_key("limit")
            .sort_key("order")
            .default_size(50);

        let criteria = Criteria::from_params_with(&params, "filters", &config);
        assert_eq!(criteria.index(), 3);
        assert_eq!(criteria.size(), 50);
        assert_eq!(criteria.sort(), Some(&[OrderBy::desc("date")][..]));
    }

    #[test]
    fn find_options_from_criteria() {
        let params: Params = [("index", "4"), ("size", "2"), ("sort", "-qty")]
            .into_iter()
            .collect();
        let options = Criteria::from_params(&params, "filters").find_options();
        assert_eq!(options.skip, 4);
        assert_eq!(options.limit, 2);
        assert_eq!(options.sort.map(|d| d.to_json()), Some(json!({"qty": -1})));
    }

    #[test]
    fn new_replaces_zero_size() {
        let criteria = Criteria::new(Document::empty(), None, 0, 0);
        assert_eq!(criteria.size(), 20);
    }

    #[test]
    fn serializes() {
        let params: Params = [("sort", "sku")].into_iter().collect();
        let criteria = Criteria::from_params(&params, "filters");
        assert_eq!(
            serde_json::to_value(&criteria).unwrap(),
            json!({
                "filter": {},
                "sort": [{"field": "sku", "dir": "asc"}],
                "index": 0,
                "size": 20
            })
        );
    }
}
