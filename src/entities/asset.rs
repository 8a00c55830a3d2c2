//! Tracked organization assets

use crate::core::field::SortKey;
use crate::core::record::{Categorized, Record, Searchable, Sortable};
use crate::dimension_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

dimension_enum! {
    /// Asset category tabs
    AssetCategory {
        Hardware => ("hardware", "Hardware", 0),
        Software => ("software", "Software", 1),
        Network => ("network", "Network", 2),
        Server => ("server", "Server", 3),
        Peripheral => ("peripheral", "Peripheral", 4),
    }
}

dimension_enum! {
    /// Asset operational state
    AssetStatus {
        Operational => ("operational", "Operational", 0),
        Maintenance => ("maintenance", "Maintenance", 1),
        Decommissioned => ("decommissioned", "Decommissioned", 2),
        Pending => ("pending", "Pending", 3),
    }
}

/// A tracked piece of hardware, software, or infrastructure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub category: AssetCategory,
    pub status: AssetStatus,
    pub organization_id: String,
    /// Unset or dangling renders as "—"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub purchase_date: DateTime<Utc>,
    pub warranty_end: DateTime<Utc>,
    pub value: f64,
    pub location: String,
    pub serial_number: String,
}

impl Record for Asset {
    fn entity_type() -> &'static str {
        "asset"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Asset {
    fn search_fields() -> &'static [&'static str] {
        &["name"]
    }

    fn text_value(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            _ => None,
        }
    }
}

impl Categorized for Asset {
    fn dimensions() -> &'static [&'static str] {
        &["category", "status"]
    }

    fn dimension_values(dimension: &str) -> Option<&'static [&'static str]> {
        match dimension {
            "category" => Some(AssetCategory::STRS),
            "status" => Some(AssetStatus::STRS),
            _ => None,
        }
    }

    fn dimension_value(&self, dimension: &str) -> Option<&'static str> {
        match dimension {
            "category" => Some(self.category.as_str()),
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl Sortable for Asset {
    fn sort_fields() -> &'static [&'static str] {
        &["name", "category", "status", "value", "warranty_end"]
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "name" => Some(SortKey::text(&self.name)),
            "category" => Some(SortKey::Rank(self.category.rank())),
            "status" => Some(SortKey::Rank(self.status.rank())),
            "value" => Some(SortKey::Float(self.value)),
            "warranty_end" => Some(SortKey::Timestamp(self.warranty_end)),
            _ => None,
        }
    }
}
