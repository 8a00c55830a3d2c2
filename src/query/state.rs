//! Per-view query state and the combined page pipeline

use crate::core::error::QueryError;
use crate::core::record::Queryable;
use crate::query::counts::count_by_dimension;
use crate::query::filter::{DimensionFilter, FilterValue, filter_by_category};
use crate::query::search::{SearchSpec, apply_search};
use crate::query::sort::{SortSpec, sort_records};
use indexmap::IndexMap;

/// Everything a list view owns about its current query, as one value
///
/// Views recompute their visible rows from this plus the base collection on
/// every change (keystroke, tab switch, header click) instead of mutating
/// rendered rows in place. The state is discarded on navigation.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    pub search: SearchSpec,

    /// Active categorical predicates, ANDed; pages keep exactly one
    pub filters: Vec<DimensionFilter>,

    /// `None` keeps the base collection's order
    pub sort: Option<SortSpec>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search spec
    pub fn with_search(mut self, search: SearchSpec) -> Self {
        self.search = search;
        self
    }

    /// Set the search term, keeping every declared field searchable
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.search.term = term.into();
        self
    }

    /// Add a categorical predicate
    pub fn with_filter(mut self, dimension: impl Into<String>, value: FilterValue) -> Self {
        self.filters.push(DimensionFilter::new(dimension, value));
        self
    }

    /// Set the sort spec
    pub fn sorted_by(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// What the engine hands back to the view
#[derive(Debug, Clone)]
pub struct QueryOutput<T> {
    /// Ordered rows, to be rendered verbatim without re-sorting
    pub rows: Vec<T>,

    /// Universe counts per declared dimension, for chip and tab labels
    pub counts: IndexMap<&'static str, IndexMap<&'static str, usize>>,
}

impl<T> QueryOutput<T> {
    /// True when the view should render its "No records found" placeholder
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Run the full page pipeline: search, then categorical filters, then sort
///
/// Search and category filtering commute, so their order here is a
/// performance choice, not a semantic one. Counts are always derived from
/// the unfiltered base collection for every declared dimension, no matter
/// which predicates are active.
pub fn run_query<T: Queryable>(
    base: &[T],
    state: &QueryState,
) -> Result<QueryOutput<T>, QueryError> {
    let mut rows = apply_search(base, &state.search)?;
    for filter in &state.filters {
        rows = filter_by_category(&rows, &filter.dimension, &filter.value)?;
    }
    if let Some(sort) = &state.sort {
        rows = sort_records(&rows, &sort.field, sort.direction)?;
    }

    let mut counts = IndexMap::with_capacity(T::dimensions().len());
    for dimension in T::dimensions() {
        counts.insert(*dimension, count_by_dimension(base, dimension)?);
    }

    tracing::debug!(
        entity_type = T::entity_type(),
        base = base.len(),
        visible = rows.len(),
        "query recomputed"
    );

    Ok(QueryOutput { rows, counts })
}
