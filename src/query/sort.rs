//! Comparator-dispatch sorting

use crate::core::error::QueryError;
use crate::core::record::Sortable;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Apply this direction to an ascending comparison result
    ///
    /// Descending is the uniform negation of the ascending comparator, so a
    /// direction toggle on a tie-heavy field is exactly the ascending order
    /// reversed, not an independently computed order.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    }

    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// The (field, direction) pair owned by a list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: Direction,
}

impl SortSpec {
    /// Ascending sort on `field`
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    /// Descending sort on `field`
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }

    /// Column-header click rule
    ///
    /// Clicking the active column flips its direction; clicking a new column
    /// sorts it ascending.
    pub fn toggled(current: Option<&SortSpec>, field: &str) -> SortSpec {
        match current {
            Some(spec) if spec.field == field => SortSpec {
                field: spec.field.clone(),
                direction: spec.direction.flipped(),
            },
            _ => SortSpec::asc(field),
        }
    }
}

/// Return a new vector of `records` ordered by `field` in `direction`
///
/// Dispatch goes through the field's [`crate::core::field::SortKey`]: text
/// fields collate case-insensitively, ranked enumerations use their explicit
/// rank table, dates compare as instants. The sort is stable, so equal keys
/// keep the base collection's relative order, and the input is never
/// mutated.
pub fn sort_records<T: Sortable>(
    records: &[T],
    field: &str,
    direction: Direction,
) -> Result<Vec<T>, QueryError> {
    if !T::sort_fields().iter().any(|known| *known == field) {
        return Err(QueryError::UnknownSortField {
            entity_type: T::entity_type(),
            field: field.to_string(),
        });
    }

    let mut keyed = Vec::with_capacity(records.len());
    for record in records {
        let key = record
            .sort_key(field)
            .ok_or_else(|| QueryError::UnknownSortField {
                entity_type: T::entity_type(),
                field: field.to_string(),
            })?;
        keyed.push((key, record.clone()));
    }

    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.compare(b)));

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}
