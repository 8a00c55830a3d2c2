//! Client projects

use crate::core::field::SortKey;
use crate::core::record::{Categorized, Record, Searchable, Sortable};
use crate::dimension_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

dimension_enum! {
    /// Project lifecycle state
    ProjectStatus {
        Planning => ("planning", "Planning", 0),
        Active => ("active", "Active", 1),
        OnHold => ("on_hold", "On Hold", 2),
        Completed => ("completed", "Completed", 3),
    }
}

/// A client project with budget and progress tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub organization_id: String,
    /// May dangle; views render "Unassigned" for an unresolved manager
    pub manager_id: String,
    /// Completion percentage, 0–100
    pub progress: u8,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub budget: f64,
    pub spent: f64,
}

impl Project {
    /// Whole-percent budget utilization
    ///
    /// Zero-budget projects report 0 rather than dividing by zero.
    pub fn budget_percent(&self) -> u32 {
        if self.budget > 0.0 {
            ((self.spent / self.budget) * 100.0).round() as u32
        } else {
            0
        }
    }
}

impl Record for Project {
    fn entity_type() -> &'static str {
        "project"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Project {
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

impl Categorized for Project {
    fn dimensions() -> &'static [&'static str] {
        &["status"]
    }

    fn dimension_values(dimension: &str) -> Option<&'static [&'static str]> {
        match dimension {
            "status" => Some(ProjectStatus::STRS),
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

impl Sortable for Project {
    fn sort_fields() -> &'static [&'static str] {
        &["name", "status", "progress", "start_date"]
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "name" => Some(SortKey::text(&self.name)),
            "status" => Some(SortKey::Rank(self.status.rank())),
            "progress" => Some(SortKey::Integer(i64::from(self.progress))),
            "start_date" => Some(SortKey::Timestamp(self.start_date)),
            _ => None,
        }
    }
}
