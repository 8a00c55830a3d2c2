//! Record capability traits driving the query engine
//!
//! Every portal entity is a flat record with a stable string id. The three
//! capability traits declare, per entity type, which fields the engine may
//! search, partition, and sort on. Unknown names are configuration errors
//! surfaced by the engine, never silent identities.

use crate::core::field::SortKey;

/// Base trait for all records in the store.
///
/// Records are immutable for the lifetime of a page view; the store hands
/// out clones and shared slices, never mutable access.
pub trait Record: Clone + Send + Sync + 'static {
    /// The entity type name (e.g., "ticket", "asset")
    fn entity_type() -> &'static str;

    /// Get the stable unique identifier for this record
    fn id(&self) -> &str;
}

/// Records with free-text fields the search box can match against.
pub trait Searchable: Record {
    /// Names of the text-bearing fields search may test
    fn search_fields() -> &'static [&'static str];

    /// Get the text of one searchable field
    ///
    /// Returns `None` when the name is not declared in
    /// [`Searchable::search_fields`].
    fn text_value(&self, field: &str) -> Option<&str>;
}

/// Records with categorical dimensions used for filter tabs and chips.
pub trait Categorized: Record {
    /// Names of the categorical dimensions of this entity type
    fn dimensions() -> &'static [&'static str];

    /// The closed enumeration behind a dimension, in chip display order
    ///
    /// Returns `None` when the dimension is not declared.
    fn dimension_values(dimension: &str) -> Option<&'static [&'static str]>;

    /// This record's value for a dimension
    ///
    /// Returns `None` when the dimension is not declared.
    fn dimension_value(&self, dimension: &str) -> Option<&'static str>;
}

/// Records with sortable columns.
pub trait Sortable: Record {
    /// Names of the sortable fields of this entity type
    fn sort_fields() -> &'static [&'static str];

    /// Typed sort key for one field
    ///
    /// Returns `None` when the field is not declared in
    /// [`Sortable::sort_fields`]. Every key produced for one field shares a
    /// single [`SortKey`] variant.
    fn sort_key(&self, field: &str) -> Option<SortKey>;
}

/// Everything a list page needs from its records.
pub trait Queryable: Searchable + Categorized + Sortable {}

impl<T: Searchable + Categorized + Sortable> Queryable for T {}
