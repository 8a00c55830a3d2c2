//! # portal-rs
//!
//! Typed record store and client-side query engine behind a customer-portal
//! demo dashboard.
//!
//! ## Features
//!
//! - **One engine, five pages**: search, categorical filtering, sorting, and
//!   chip counts are a single parametrized pipeline instead of per-page copies
//! - **Capability traits**: each entity type declares its searchable fields,
//!   filter dimensions, and sortable columns; unknown names fail fast
//! - **Explicit rank tables**: status and priority sort in board order, never
//!   alphabetically
//! - **Universe counts**: chip labels count the base collection, untouched by
//!   the active search or filters
//! - **Total cross-reference resolution**: a dangling assignee renders as
//!   "Unassigned", never as an error or a blank cell
//! - **Seed-validated store**: collections load once from YAML and are checked
//!   against the domain contract before any page sees them
//!
//! ## Quick Start
//!
//! ```rust
//! use portal::prelude::*;
//!
//! let store = RecordStore::builtin()?;
//!
//! // The tickets page: search box, status tabs, sortable columns
//! let state = QueryState::new()
//!     .with_term("export")
//!     .with_filter("status", FilterValue::All)
//!     .sorted_by(SortSpec::desc("updated_at"));
//!
//! let page = run_query(store.tickets(), &state)?;
//! for ticket in &page.rows {
//!     let assignee = store
//!         .user_by_id(&ticket.assignee_id)
//!         .display_or(UNASSIGNED, |user| user.name.as_str());
//!     println!("{} {} {}", ticket.id, ticket.title, assignee);
//! }
//! # Ok::<(), portal::PortalError>(())
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod format;
pub mod query;
pub mod store;

pub use crate::core::error::{PortalError, QueryError, SeedError, StoreError};

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        error::{PortalError, QueryError, SeedError, StoreError},
        field::{FieldFormat, SortKey},
        record::{Categorized, Queryable, Record, Searchable, Sortable},
    };

    // === Macros ===
    pub use crate::dimension_enum;

    // === Query Engine ===
    pub use crate::query::{
        ALL, DimensionFilter, Direction, FilterValue, QueryOutput, QueryState, SearchSpec,
        SortSpec, count_by_dimension, filter_by_category, filter_by_search, run_query,
        sort_records,
    };

    // === Entities ===
    pub use crate::entities::{
        Asset, AssetCategory, AssetStatus, Contract, ContractStatus, Document, DocumentType,
        Organization, Plan, Project, ProjectStatus, Ticket, TicketPriority, TicketStatus, User,
        UserRole, contract_value_total,
    };

    // === Store ===
    pub use crate::store::{
        DASH, IdIndex, NO_RECORDS, RecordStore, Resolved, UNASSIGNED, UNKNOWN,
    };

    // === Config ===
    pub use crate::config::PortalSeed;

    // === Formatters ===
    pub use crate::format::{
        format_currency, format_date, format_file_size, format_relative_date,
    };

    // === External dependencies ===
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
