//! Core module containing fundamental traits and types

pub mod error;
pub mod field;
pub mod record;

pub use error::{PortalError, QueryError, SeedError, StoreError};
pub use field::{FieldFormat, SortKey};
pub use record::{Categorized, Queryable, Record, Searchable, Sortable};
