//! The client-side query engine: search, filtering, sorting, derived counts
//!
//! One parametrized engine replaces the near-identical filter-tab, search,
//! and sort pipelines that every list page would otherwise reimplement. An
//! entity type configures the engine entirely through the capability traits
//! in [`crate::core::record`]; the engine itself holds no state and every
//! operation is a pure function of its inputs.

pub mod counts;
pub mod filter;
pub mod search;
pub mod sort;
pub mod state;

pub use counts::count_by_dimension;
pub use filter::{ALL, DimensionFilter, FilterValue, filter_by_category};
pub use search::{SearchSpec, filter_by_search};
pub use sort::{Direction, SortSpec, sort_records};
pub use state::{QueryOutput, QueryState, run_query};
