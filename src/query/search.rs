//! Free-text search over record collections

use crate::core::error::QueryError;
use crate::core::record::Searchable;

/// The search half of a page's query state: the box contents plus the fields
/// it tests
#[derive(Debug, Clone, Default)]
pub struct SearchSpec {
    /// Current contents of the search box
    pub term: String,

    /// Fields to test; empty means every declared searchable field
    pub fields: Vec<&'static str>,

    /// Trim the term before matching
    ///
    /// Off by default: the portal pages match leading/trailing whitespace
    /// literally, and chip counts were tuned around that behavior.
    pub trim_term: bool,
}

impl SearchSpec {
    /// Spec testing `term` against every declared searchable field
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            fields: Vec::new(),
            trim_term: false,
        }
    }

    /// Restrict matching to the listed fields
    pub fn in_fields(mut self, fields: &[&'static str]) -> Self {
        self.fields = fields.to_vec();
        self
    }

    /// Trim leading/trailing whitespace off the term before matching
    pub fn trimmed(mut self) -> Self {
        self.trim_term = true;
        self
    }

    fn effective_term(&self) -> &str {
        if self.trim_term {
            self.term.trim()
        } else {
            &self.term
        }
    }
}

/// Keep the records where at least one listed field contains `term`,
/// case-insensitively.
///
/// The empty term is the identity. Relative order is always preserved:
/// filtering never reorders. Listed fields are validated against
/// [`Searchable::search_fields`] before any matching happens.
pub fn filter_by_search<T: Searchable>(
    records: &[T],
    term: &str,
    fields: &[&str],
) -> Result<Vec<T>, QueryError> {
    for field in fields {
        if !T::search_fields().iter().any(|known| known == field) {
            return Err(QueryError::UnknownSearchField {
                entity_type: T::entity_type(),
                field: (*field).to_string(),
            });
        }
    }

    if term.is_empty() {
        return Ok(records.to_vec());
    }

    let needle = term.to_lowercase();
    Ok(records
        .iter()
        .filter(|record| {
            fields.iter().any(|field| {
                record
                    .text_value(field)
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
        })
        .cloned()
        .collect())
}

/// Apply a [`SearchSpec`], defaulting to every declared field
pub(crate) fn apply_search<T: Searchable>(
    records: &[T],
    spec: &SearchSpec,
) -> Result<Vec<T>, QueryError> {
    if spec.fields.is_empty() {
        filter_by_search(records, spec.effective_term(), T::search_fields())
    } else {
        filter_by_search(records, spec.effective_term(), &spec.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Ticket, TicketPriority, TicketStatus};

    fn ticket(id: &str, title: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            status: TicketStatus::Open,
            priority: TicketPriority::Medium,
            assignee_id: "USR-001".to_string(),
            reporter_id: "USR-002".to_string(),
            project_id: "PRJ-001".to_string(),
            organization_id: "ORG-001".to_string(),
            created_at: "2025-06-01T10:00:00Z".parse().unwrap(),
            updated_at: "2025-06-02T10:00:00Z".parse().unwrap(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_empty_term_is_identity() {
        let records = vec![ticket("TCK-1001", "Login bug"), ticket("TCK-1002", "Export")];
        let result = filter_by_search(&records, "", &["title"]).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "TCK-1001");
        assert_eq!(result[1].id, "TCK-1002");
    }

    #[test]
    fn test_substring_match_is_case_insensitive_and_order_preserving() {
        let records = vec![
            ticket("TCK-1001", "Login bug"),
            ticket("TCK-1002", "Export fails"),
            ticket("TCK-1003", "Bug in export"),
        ];
        let result = filter_by_search(&records, "bug", &["title"]).unwrap();
        let titles: Vec<&str> = result.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Login bug", "Bug in export"]);
    }

    #[test]
    fn test_id_field_matches() {
        let records = vec![ticket("TCK-1042", "Unrelated")];
        let result = filter_by_search(&records, "1042", &["title", "id"]).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_whitespace_term_is_literal() {
        let records = vec![
            ticket("TCK-1001", "Login bug"),
            ticket("TCK-1002", "Login"),
        ];
        // " bug" only matches titles containing the leading space
        let result = filter_by_search(&records, " bug", &["title"]).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "TCK-1001");
    }

    #[test]
    fn test_trimmed_spec_drops_surrounding_whitespace() {
        let records = vec![ticket("TCK-1001", "Login bug")];
        let spec = SearchSpec::new("  bug  ").in_fields(&["title"]).trimmed();
        let result = apply_search(&records, &spec).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_unknown_field_fails_fast() {
        let records = vec![ticket("TCK-1001", "Login bug")];
        let err = filter_by_search(&records, "bug", &["description"]).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_SEARCH_FIELD");
    }

    #[test]
    fn test_unknown_field_fails_even_on_empty_collection() {
        let records: Vec<Ticket> = Vec::new();
        let err = filter_by_search(&records, "", &["nope"]).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_SEARCH_FIELD");
    }
}
