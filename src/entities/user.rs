//! Portal users

use crate::core::record::Record;
use crate::dimension_enum;
use serde::{Deserialize, Serialize};

dimension_enum! {
    /// Access level within an organization
    UserRole {
        Admin => ("admin", "Admin"),
        Viewer => ("viewer", "Viewer"),
    }
}

/// A portal user; the target of assignee, reporter, manager, and uploader
/// cross-references
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub organization_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Record for User {
    fn entity_type() -> &'static str {
        "user"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
