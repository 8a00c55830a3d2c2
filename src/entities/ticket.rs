//! Support tickets

use crate::core::field::SortKey;
use crate::core::record::{Categorized, Record, Searchable, Sortable};
use crate::dimension_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

dimension_enum! {
    /// Ticket workflow state. Rank order is the board order.
    TicketStatus {
        Open => ("open", "Open", 0),
        InProgress => ("in_progress", "In Progress", 1),
        Waiting => ("waiting", "Waiting", 2),
        Resolved => ("resolved", "Resolved", 3),
        Closed => ("closed", "Closed", 4),
    }
}

dimension_enum! {
    /// Ticket urgency. Critical sorts first, not alphabetically.
    TicketPriority {
        Critical => ("critical", "Critical", 0),
        High => ("high", "High", 1),
        Medium => ("medium", "Medium", 2),
        Low => ("low", "Low", 3),
    }
}

/// A support ticket raised against a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    /// May dangle; views render "Unassigned" for an unresolved assignee
    pub assignee_id: String,
    pub reporter_id: String,
    pub project_id: String,
    pub organization_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Record for Ticket {
    fn entity_type() -> &'static str {
        "ticket"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Ticket {
    fn search_fields() -> &'static [&'static str] {
        &["title", "id"]
    }

    fn text_value(&self, field: &str) -> Option<&str> {
        match field {
            "title" => Some(&self.title),
            "id" => Some(&self.id),
            _ => None,
        }
    }
}

impl Categorized for Ticket {
    fn dimensions() -> &'static [&'static str] {
        &["status", "priority"]
    }

    fn dimension_values(dimension: &str) -> Option<&'static [&'static str]> {
        match dimension {
            "status" => Some(TicketStatus::STRS),
            "priority" => Some(TicketPriority::STRS),
            _ => None,
        }
    }

    fn dimension_value(&self, dimension: &str) -> Option<&'static str> {
        match dimension {
            "status" => Some(self.status.as_str()),
            "priority" => Some(self.priority.as_str()),
            _ => None,
        }
    }
}

impl Sortable for Ticket {
    fn sort_fields() -> &'static [&'static str] {
        &["id", "title", "status", "priority", "updated_at"]
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "id" => Some(SortKey::text(&self.id)),
            "title" => Some(SortKey::text(&self.title)),
            "status" => Some(SortKey::Rank(self.status.rank())),
            "priority" => Some(SortKey::Rank(self.priority.rank())),
            "updated_at" => Some(SortKey::Timestamp(self.updated_at)),
            _ => None,
        }
    }
}
