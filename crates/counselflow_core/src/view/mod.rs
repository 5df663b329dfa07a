//! List view transform shared by every management page.
//!
//! # Responsibility
//! - Derive the visible subset and order of one record collection from the
//!   page's filter state (search text, categorical selections, sort key).
//! - Parse filter state from display strings entered by a user.
//!
//! # Invariants
//! - Output borrows from input; no record is fabricated or duplicated.
//! - Every output record matches the search text and every active selection.
//! - Sorting is stable, so ties keep input order and re-sorting is a no-op.
//! - An empty search string matches every record.

use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

mod compliance;
mod contract;
mod dispute;
mod entity;
mod matter;
mod policy;
mod risk;
mod task;
mod vendor;

pub use compliance::{ComplianceFilter, ComplianceSort};
pub use contract::{ContractFilter, ContractSort};
pub use dispute::{DisputeFilter, DisputeSort};
pub use entity::{EntityFilter, EntitySort};
pub use matter::{MatterFilter, MatterSort};
pub use policy::{PolicyFilter, PolicySort};
pub use risk::{RiskFilter, RiskSort};
pub use task::{TaskFilter, TaskSort};
pub use vendor::{VendorFilter, VendorSort};

/// Display string of the "no constraint" selection.
pub const ALL_LABEL: &str = "All";

labeled_enum! {
    /// Record collection a list view operates on.
    pub enum Domain {
        Contracts => "contracts",
        Matters => "matters",
        Entities => "entities",
        Tasks => "tasks",
        Risks => "risks",
        Disputes => "disputes",
        Policies => "policies",
        Vendors => "vendors",
        Compliance => "compliance",
    }
}

pub type ViewResult<T> = Result<T, ViewError>;

/// Error for filter state that cannot be applied to a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    UnknownField {
        domain: Domain,
        field: String,
    },
    InvalidValue {
        domain: Domain,
        field: &'static str,
        value: String,
    },
    UnknownSortKey {
        domain: Domain,
        key: String,
        expected: Vec<&'static str>,
    },
    MalformedFilter(String),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField { domain, field } => {
                write!(f, "{domain} has no filter named `{field}`")
            }
            Self::InvalidValue {
                domain,
                field,
                value,
            } => write!(f, "`{value}` is not a valid {domain} {field}"),
            Self::UnknownSortKey {
                domain,
                key,
                expected,
            } => write!(
                f,
                "unknown {domain} sort key `{key}`; expected {}",
                expected.join("|")
            ),
            Self::MalformedFilter(text) => {
                write!(f, "filter `{text}` must be written as field=value")
            }
        }
    }
}

impl Error for ViewError {}

/// Value of one categorical filter: the "All" sentinel or an exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Whether a record field value passes this selection.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Parses `All` (any case) as the sentinel, anything else with `parse`.
    ///
    /// Returns `None` when `parse` rejects a non-sentinel value.
    pub fn parse_with(value: &str, parse: impl FnOnce(&str) -> Option<T>) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case(ALL_LABEL) {
            return Some(Self::All);
        }
        parse(value).map(Self::Only)
    }
}

impl<T: Display> Display for Selection<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_LABEL),
            Self::Only(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Orients a natural ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A record type that can be shown in a filtered, sorted list.
pub trait Listable: Sized {
    /// One `Selection` per categorical filter of the page.
    type Filter: Debug + Clone + Default + PartialEq;
    /// Closed set of sort keys offered by the page.
    type SortKey: Debug + Copy + Eq + Display + 'static;

    const DOMAIN: Domain;
    /// Names accepted by [`Listable::set_filter`] and [`facet_values`].
    const FILTER_FIELDS: &'static [&'static str];

    /// Text fields searched by the page's search box.
    fn search_fields(&self) -> Vec<&str>;

    fn matches_filter(&self, filter: &Self::Filter) -> bool;

    /// Natural ascending order of `self` and `other` under `key`.
    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;

    fn sort_keys() -> &'static [Self::SortKey];

    fn direction(key: Self::SortKey) -> SortDirection;

    /// Key a page sorts by before the user picks one.
    ///
    /// `None` for pages that show records in stored order.
    fn default_sort() -> Option<Self::SortKey>;

    fn sort_key_label(key: Self::SortKey) -> &'static str;

    /// Updates one selection of `filter` from its display string.
    fn set_filter(filter: &mut Self::Filter, field: &str, value: &str) -> ViewResult<()>;

    /// Display values `self` holds for filter `field`.
    ///
    /// Only called with a name from [`Listable::FILTER_FIELDS`].
    fn facet_labels(&self, field: &str) -> Vec<&str>;

    fn parse_sort_key(text: &str) -> ViewResult<Self::SortKey> {
        let trimmed = text.trim();
        Self::sort_keys()
            .iter()
            .copied()
            .find(|key| Self::sort_key_label(*key).eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ViewError::UnknownSortKey {
                domain: Self::DOMAIN,
                key: trimmed.to_string(),
                expected: Self::sort_keys()
                    .iter()
                    .map(|key| Self::sort_key_label(*key))
                    .collect(),
            })
    }

    /// Whether `needle` occurs, ignoring case, in any search field.
    fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Filter state of one list page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F, K> {
    pub search: String,
    pub filter: F,
    /// `None` keeps input order.
    pub sort: Option<K>,
}

impl<F: Default, K> Default for ListQuery<F, K> {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: F::default(),
            sort: None,
        }
    }
}

impl<F: Default, K> ListQuery<F, K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filter(mut self, filter: F) -> Self {
        self.filter = filter;
        self
    }

    pub fn sorted_by(mut self, key: K) -> Self {
        self.sort = Some(key);
        self
    }
}

/// Query type for record type `R`.
pub type QueryFor<R> = ListQuery<<R as Listable>::Filter, <R as Listable>::SortKey>;

/// Builds a query from user-entered strings.
///
/// `filters` are `field=value` pairs; `All` clears a selection.
///
/// # Errors
/// - `MalformedFilter` when a filter has no `=`.
/// - `UnknownField` / `InvalidValue` when a selection cannot be parsed.
/// - `UnknownSortKey` when `sort` names no key of `R`.
pub fn parse_query<R: Listable>(
    search: &str,
    filters: &[String],
    sort: Option<&str>,
) -> ViewResult<QueryFor<R>> {
    let mut query = QueryFor::<R>::new().with_search(search);
    for text in filters {
        let (field, value) = text
            .split_once('=')
            .ok_or_else(|| ViewError::MalformedFilter(text.clone()))?;
        R::set_filter(&mut query.filter, field.trim(), value.trim())?;
    }
    if let Some(sort) = sort {
        query.sort = Some(R::parse_sort_key(sort)?);
    }
    Ok(query)
}

/// Applies search, selections and sort to `records`.
pub fn apply_list_view<'a, R: Listable>(records: &'a [R], query: &QueryFor<R>) -> Vec<&'a R> {
    let mut visible: Vec<&R> = records
        .iter()
        .filter(|record| record.matches_search(&query.search))
        .filter(|record| record.matches_filter(&query.filter))
        .collect();

    if let Some(key) = query.sort {
        let direction = R::direction(key);
        visible.sort_by(|a, b| direction.apply(a.compare_by(b, key)));
    }

    visible
}

/// Distinct values of filter `field` in first-seen order.
///
/// Feeds a page's filter select; the `All` option is not included.
pub fn facet_values<R: Listable>(records: &[R], field: &str) -> ViewResult<Vec<String>> {
    let field = R::FILTER_FIELDS
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(field.trim()))
        .ok_or_else(|| ViewError::UnknownField {
            domain: R::DOMAIN,
            field: field.to_string(),
        })?;

    let mut values: Vec<String> = Vec::new();
    for record in records {
        for label in record.facet_labels(field) {
            if !values.iter().any(|seen| seen == label) {
                values.push(label.to_string());
            }
        }
    }
    Ok(values)
}

/// Case-insensitive text order with a byte-wise tie break.
pub(crate) fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Parses one categorical selection or reports which value was rejected.
pub(crate) fn parse_selection<T>(
    domain: Domain,
    field: &'static str,
    value: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> ViewResult<Selection<T>> {
    Selection::parse_with(value, parse).ok_or_else(|| ViewError::InvalidValue {
        domain,
        field,
        value: value.to_string(),
    })
}

pub(crate) fn unknown_field(domain: Domain, field: &str) -> ViewError {
    ViewError::UnknownField {
        domain,
        field: field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{compare_text, Selection, SortDirection};
    use std::cmp::Ordering;

    #[test]
    fn all_sentinel_parses_in_any_case() {
        let parsed = Selection::<u8>::parse_with("ALL", |_| None);
        assert_eq!(parsed, Some(Selection::All));
        let parsed = Selection::parse_with("7", |text| text.parse::<u8>().ok());
        assert_eq!(parsed, Some(Selection::Only(7)));
        assert_eq!(Selection::<u8>::parse_with("x", |_| None), None);
    }

    #[test]
    fn selection_admits() {
        assert!(Selection::<u8>::All.is_all());
        assert!(!Selection::Only(3).is_all());
        assert!(Selection::All.admits(&3));
        assert!(Selection::Only(3).admits(&3));
        assert!(!Selection::Only(3).admits(&4));
    }

    #[test]
    fn descending_reverses_natural_order() {
        assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
    }

    #[test]
    fn text_order_ignores_case_first() {
        assert_eq!(compare_text("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_text("Apple", "apple"), Ordering::Less);
        assert_eq!(compare_text("same", "same"), Ordering::Equal);
    }
}
