//! Client contracts

use crate::core::field::SortKey;
use crate::core::record::{Categorized, Record, Searchable, Sortable};
use crate::dimension_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

dimension_enum! {
    /// Contract lifecycle state
    ContractStatus {
        Draft => ("draft", "Draft", 0),
        Active => ("active", "Active", 1),
        Expiring => ("expiring", "Expiring", 2),
        Expired => ("expired", "Expired", 3),
        Terminated => ("terminated", "Terminated", 4),
    }
}

/// A client agreement with a monetary value and a validity period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub id: String,
    pub title: String,
    pub client_name: String,
    pub status: ContractStatus,
    pub value: f64,
    pub organization_id: String,
    pub project_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewal_date: Option<DateTime<Utc>>,
}

/// Summed value of a visible subset, for the summary card above the grid
pub fn contract_value_total(contracts: &[Contract]) -> f64 {
    contracts.iter().map(|contract| contract.value).sum()
}

impl Record for Contract {
    fn entity_type() -> &'static str {
        "contract"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Contract {
    fn search_fields() -> &'static [&'static str] {
        &["title", "client_name"]
    }

    fn text_value(&self, field: &str) -> Option<&str> {
        match field {
            "title" => Some(&self.title),
            "client_name" => Some(&self.client_name),
            _ => None,
        }
    }
}

impl Categorized for Contract {
    fn dimensions() -> &'static [&'static str] {
        &["status"]
    }

    fn dimension_values(dimension: &str) -> Option<&'static [&'static str]> {
        match dimension {
            "status" => Some(ContractStatus::STRS),
            _ => None,
        }
    }

    fn dimension_value(&self, dimension: &str) -> Option<&'static str> {
        match dimension {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl Sortable for Contract {
    fn sort_fields() -> &'static [&'static str] {
        &["title", "status", "value", "end_date"]
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "title" => Some(SortKey::text(&self.title)),
            "status" => Some(SortKey::Rank(self.status.rank())),
            "value" => Some(SortKey::Float(self.value)),
            "end_date" => Some(SortKey::Timestamp(self.end_date)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(id: &str, value: f64) -> Contract {
        Contract {
            id: id.to_string(),
            title: format!("Agreement {id}"),
            client_name: "Acme Corp".to_string(),
            status: ContractStatus::Active,
            value,
            organization_id: "ORG-001".to_string(),
            project_id: "PRJ-001".to_string(),
            start_date: "2025-01-01T00:00:00Z".parse().unwrap(),
            end_date: "2025-12-31T00:00:00Z".parse().unwrap(),
            renewal_date: None,
        }
    }

    #[test]
    fn test_value_total_sums_the_subset_it_is_given() {
        let contracts = vec![contract("CTR-001", 48_000.0), contract("CTR-002", 12_500.0)];
        assert_eq!(contract_value_total(&contracts), 60_500.0);
        assert_eq!(contract_value_total(&contracts[..1]), 48_000.0);
        assert_eq!(contract_value_total(&[]), 0.0);
    }

    #[test]
    fn test_renewal_date_is_optional() {
        let yaml = r#"
id: CTR-003
title: Support Retainer
client_name: Northwind
status: draft
value: 24000
organization_id: ORG-002
project_id: PRJ-002
start_date: "2025-07-01T00:00:00Z"
end_date: "2026-06-30T00:00:00Z"
"#;
        let parsed: Contract = serde_yaml::from_str(yaml).unwrap();
        assert!(parsed.renewal_date.is_none());
    }
}
