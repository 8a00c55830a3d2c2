//! Typed error handling for portal-rs
//!
//! # Error Categories
//!
//! - [`QueryError`]: configuration errors raised by the query engine
//! - [`StoreError`]: seed-contract violations caught while building the store
//! - [`SeedError`]: seed acquisition failures (file read, YAML parse)
//!
//! Data absence is deliberately not represented here. A dangling
//! cross-reference resolves to [`crate::store::Resolved::Missing`] and an
//! empty result set is an ordinary empty vector; both are normal view states
//! rendered with placeholders.

use std::fmt;

/// The main error type for portal-rs
///
/// Each variant wraps the specific error type for that category so callers
/// can match on the condition they care about.
#[derive(Debug)]
pub enum PortalError {
    /// Query-engine configuration errors
    Query(QueryError),

    /// Record-store contract violations
    Store(StoreError),

    /// Seed loading errors
    Seed(SeedError),
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::Query(e) => write!(f, "{}", e),
            PortalError::Store(e) => write!(f, "{}", e),
            PortalError::Seed(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PortalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PortalError::Query(e) => Some(e),
            PortalError::Store(e) => Some(e),
            PortalError::Seed(e) => Some(e),
        }
    }
}

impl PortalError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PortalError::Query(e) => e.error_code(),
            PortalError::Store(e) => e.error_code(),
            PortalError::Seed(e) => e.error_code(),
        }
    }
}

impl From<QueryError> for PortalError {
    fn from(e: QueryError) -> Self {
        PortalError::Query(e)
    }
}

impl From<StoreError> for PortalError {
    fn from(e: StoreError) -> Self {
        PortalError::Store(e)
    }
}

impl From<SeedError> for PortalError {
    fn from(e: SeedError) -> Self {
        PortalError::Seed(e)
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Configuration errors from the query engine
///
/// Every variant is a programming error in the calling view: a name was
/// requested that the entity type never declared. The engine fails fast on
/// these rather than silently returning an identity or empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A search field not declared by the entity type
    UnknownSearchField {
        entity_type: &'static str,
        field: String,
    },

    /// A filter dimension not declared by the entity type
    UnknownDimension {
        entity_type: &'static str,
        dimension: String,
    },

    /// A filter value outside the dimension's enumeration
    UnknownDimensionValue {
        entity_type: &'static str,
        dimension: String,
        value: String,
    },

    /// A sort field not declared by the entity type
    UnknownSortField {
        entity_type: &'static str,
        field: String,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::UnknownSearchField { entity_type, field } => {
                write!(f, "unknown search field '{}' for '{}'", field, entity_type)
            }
            QueryError::UnknownDimension {
                entity_type,
                dimension,
            } => {
                write!(f, "unknown dimension '{}' for '{}'", dimension, entity_type)
            }
            QueryError::UnknownDimensionValue {
                entity_type,
                dimension,
                value,
            } => {
                write!(
                    f,
                    "value '{}' is not a member of dimension '{}' on '{}'",
                    value, dimension, entity_type
                )
            }
            QueryError::UnknownSortField { entity_type, field } => {
                write!(f, "unknown sort field '{}' for '{}'", field, entity_type)
            }
        }
    }
}

impl std::error::Error for QueryError {}

impl QueryError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::UnknownSearchField { .. } => "UNKNOWN_SEARCH_FIELD",
            QueryError::UnknownDimension { .. } => "UNKNOWN_DIMENSION",
            QueryError::UnknownDimensionValue { .. } => "UNKNOWN_DIMENSION_VALUE",
            QueryError::UnknownSortField { .. } => "UNKNOWN_SORT_FIELD",
        }
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Seed-contract violations caught while building the record store
///
/// The store validates the seed once at load time; the query engine itself
/// never validates domain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Two records of one entity type share an id
    DuplicateId {
        entity_type: &'static str,
        id: String,
    },

    /// A field value fails its declared format (id, email, url)
    InvalidField {
        entity_type: &'static str,
        id: String,
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateId { entity_type, id } => {
                write!(f, "duplicate id '{}' in '{}' collection", id, entity_type)
            }
            StoreError::InvalidField {
                entity_type,
                id,
                field,
                value,
            } => {
                write!(
                    f,
                    "invalid {} '{}' on {} '{}'",
                    field, value, entity_type, id
                )
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl StoreError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::DuplicateId { .. } => "DUPLICATE_ID",
            StoreError::InvalidField { .. } => "INVALID_FIELD",
        }
    }
}

// =============================================================================
// Seed Errors
// =============================================================================

/// Seed acquisition failures
#[derive(Debug)]
pub enum SeedError {
    /// The seed file could not be read
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The seed document is not valid YAML for the expected shape
    Parse(serde_yaml::Error),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Read { path, source } => {
                write!(f, "failed to read seed file '{}': {}", path, source)
            }
            SeedError::Parse(e) => write!(f, "failed to parse seed document: {}", e),
        }
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeedError::Read { source, .. } => Some(source),
            SeedError::Parse(e) => Some(e),
        }
    }
}

impl SeedError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SeedError::Read { .. } => "SEED_READ",
            SeedError::Parse(_) => "SEED_PARSE",
        }
    }
}
