//! Derived per-dimension counts for filter chip labels

use crate::core::error::QueryError;
use crate::core::record::Categorized;
use crate::query::filter::ALL;
use indexmap::IndexMap;

/// Count the base collection per member of `dimension`
///
/// The map starts with the [`ALL`] sentinel (full collection size), then
/// every enumeration member in declaration order, zero-filled. Callers pass
/// the unfiltered base collection, never the visible subset: chip labels
/// show universe counts and stay put while the user types or switches tabs.
pub fn count_by_dimension<T: Categorized>(
    records: &[T],
    dimension: &str,
) -> Result<IndexMap<&'static str, usize>, QueryError> {
    let members =
        T::dimension_values(dimension).ok_or_else(|| QueryError::UnknownDimension {
            entity_type: T::entity_type(),
            dimension: dimension.to_string(),
        })?;

    let mut counts = IndexMap::with_capacity(members.len() + 1);
    counts.insert(ALL, records.len());
    for member in members {
        counts.insert(*member, 0);
    }
    for record in records {
        if let Some(value) = record.dimension_value(dimension) {
            if let Some(slot) = counts.get_mut(value) {
                *slot += 1;
            }
        }
    }

    Ok(counts)
}
