//! Categorical filter predicates

use crate::core::error::QueryError;
use crate::core::record::Categorized;

/// The sentinel value accepting every record, shown as the "All" tab
pub const ALL: &str = "all";

/// One tab or chip selection on a dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// No constraint
    All,

    /// Keep records whose dimension equals this enumeration member
    Is(String),
}

impl FilterValue {
    /// Parse the tab-state wire form: the [`ALL`] sentinel or a member value
    pub fn from_tab(value: &str) -> Self {
        if value == ALL {
            FilterValue::All
        } else {
            FilterValue::Is(value.to_string())
        }
    }
}

/// A dimension paired with its active selection
///
/// Pages keep exactly one of these per view; the engine ANDs any number of
/// them, so multi-select composition needs no structural change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionFilter {
    pub dimension: String,
    pub value: FilterValue,
}

impl DimensionFilter {
    pub fn new(dimension: impl Into<String>, value: FilterValue) -> Self {
        Self {
            dimension: dimension.into(),
            value,
        }
    }

    /// The unconstrained selection for a dimension
    pub fn all(dimension: impl Into<String>) -> Self {
        Self::new(dimension, FilterValue::All)
    }

    /// An equality selection on a dimension
    pub fn is(dimension: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(dimension, FilterValue::Is(value.into()))
    }
}

/// Keep the records whose `dimension` attribute equals `value`
///
/// [`FilterValue::All`] is the identity. Matching is exact equality against
/// the enumeration member, nothing partial or fuzzy, and relative order is
/// preserved. Both the dimension and a non-sentinel value are validated
/// against the declared enumeration and fail fast when unknown.
pub fn filter_by_category<T: Categorized>(
    records: &[T],
    dimension: &str,
    value: &FilterValue,
) -> Result<Vec<T>, QueryError> {
    let members =
        T::dimension_values(dimension).ok_or_else(|| QueryError::UnknownDimension {
            entity_type: T::entity_type(),
            dimension: dimension.to_string(),
        })?;

    match value {
        FilterValue::All => Ok(records.to_vec()),
        FilterValue::Is(wanted) => {
            if !members.iter().any(|member| *member == wanted.as_str()) {
                return Err(QueryError::UnknownDimensionValue {
                    entity_type: T::entity_type(),
                    dimension: dimension.to_string(),
                    value: wanted.clone(),
                });
            }
            Ok(records
                .iter()
                .filter(|record| record.dimension_value(dimension) == Some(wanted.as_str()))
                .cloned()
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tab_parses_the_sentinel() {
        assert_eq!(FilterValue::from_tab("all"), FilterValue::All);
        assert_eq!(
            FilterValue::from_tab("open"),
            FilterValue::Is("open".to_string())
        );
    }

    #[test]
    fn test_constructors() {
        let filter = DimensionFilter::is("status", "open");
        assert_eq!(filter.dimension, "status");
        assert_eq!(filter.value, FilterValue::Is("open".to_string()));

        let filter = DimensionFilter::all("priority");
        assert_eq!(filter.value, FilterValue::All);
    }
}
