//! Seed configuration loading

use crate::core::error::SeedError;
use crate::entities::{Asset, Contract, Document, Organization, Project, Ticket, User};
use serde::{Deserialize, Serialize};

/// The static data set the record store is built from
///
/// Loaded once at process start and handed to
/// [`crate::store::RecordStore::from_seed`]; nothing mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalSeed {
    pub organizations: Vec<Organization>,
    pub users: Vec<User>,
    pub tickets: Vec<Ticket>,
    pub projects: Vec<Project>,
    pub documents: Vec<Document>,
    pub contracts: Vec<Contract>,
    pub assets: Vec<Asset>,
}

impl PortalSeed {
    /// Load a seed from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load a seed from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SeedError> {
        serde_yaml::from_str(yaml).map_err(SeedError::Parse)
    }

    /// The seed shipped with the crate
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_yaml_str(include_str!("default_portal.yaml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_seed_parses() {
        let seed = PortalSeed::builtin().unwrap();

        assert!(!seed.organizations.is_empty());
        assert!(!seed.users.is_empty());
        assert!(!seed.tickets.is_empty());
        assert!(!seed.projects.is_empty());
        assert!(!seed.documents.is_empty());
        assert!(!seed.contracts.is_empty());
        assert!(!seed.assets.is_empty());
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let err = PortalSeed::from_yaml_str("organizations: [").unwrap_err();
        assert_eq!(err.error_code(), "SEED_PARSE");
    }

    #[test]
    fn test_out_of_enumeration_value_is_a_parse_error() {
        let seed = r#"
organizations: []
users: []
tickets:
  - id: TCK-9001
    title: Bad status
    description: ""
    status: reopened
    priority: low
    assignee_id: USR-001
    reporter_id: USR-001
    project_id: PRJ-001
    organization_id: ORG-001
    created_at: "2025-06-01T00:00:00Z"
    updated_at: "2025-06-01T00:00:00Z"
projects: []
documents: []
contracts: []
assets: []
"#;
        let err = PortalSeed::from_yaml_str(seed).unwrap_err();
        assert_eq!(err.error_code(), "SEED_PARSE");
    }
}
