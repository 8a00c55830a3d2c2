//! Project documents

use crate::core::field::SortKey;
use crate::core::record::{Categorized, Record, Searchable, Sortable};
use crate::dimension_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

dimension_enum! {
    /// Document classification used by the type filter dropdown
    DocumentType {
        Invoice => ("invoice", "Invoice", 0),
        Report => ("report", "Report", 1),
        Contract => ("contract", "Contract", 2),
        Proposal => ("proposal", "Proposal", 3),
        Sow => ("sow", "SOW", 4),
        Other => ("other", "Other", 5),
    }
}

/// An uploaded file attached to a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// May dangle; views render "—" for an unresolved project
    pub project_id: String,
    /// May dangle; views render "Unknown" for an unresolved uploader
    pub uploaded_by_id: String,
    pub organization_id: String,
    /// File size in bytes
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    pub url: String,
}

impl Record for Document {
    fn entity_type() -> &'static str {
        "document"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Document {
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

impl Categorized for Document {
    fn dimensions() -> &'static [&'static str] {
        &["type"]
    }

    fn dimension_values(dimension: &str) -> Option<&'static [&'static str]> {
        match dimension {
            "type" => Some(DocumentType::STRS),
            _ => None,
        }
    }

    fn dimension_value(&self, dimension: &str) -> Option<&'static str> {
        match dimension {
            "type" => Some(self.doc_type.as_str()),
            _ => None,
        }
    }
}

impl Sortable for Document {
    fn sort_fields() -> &'static [&'static str] {
        &["name", "type", "size", "uploaded_at"]
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "name" => Some(SortKey::text(&self.name)),
            "type" => Some(SortKey::Rank(self.doc_type.rank())),
            "size" => Some(SortKey::Integer(self.size as i64)),
            "uploaded_at" => Some(SortKey::Timestamp(self.uploaded_at)),
            _ => None,
        }
    }
}
