//! Customer organizations

use crate::core::record::Record;
use crate::dimension_enum;
use serde::{Deserialize, Serialize};

dimension_enum! {
    /// Subscription plan
    Plan {
        Starter => ("starter", "Starter"),
        Professional => ("professional", "Professional"),
        Enterprise => ("enterprise", "Enterprise"),
    }
}

/// A customer organization owning users, projects, and assets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub plan: Plan,
    pub domain: String,
}

impl Record for Organization {
    fn entity_type() -> &'static str {
        "organization"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
