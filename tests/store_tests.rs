//! Integration tests for seed loading, store validation, and cross-reference
//! resolution.

use portal::prelude::*;
use std::io::Write;

const MINIMAL_SEED: &str = r#"
organizations:
  - id: ORG-001
    name: Meridian Systems
    plan: enterprise
    domain: meridian-systems.com
users:
  - id: USR-001
    name: Dana Whitfield
    email: dana.whitfield@meridian-systems.com
    role: admin
    organization_id: ORG-001
tickets:
  - id: TCK-1001
    title: Login page rejects valid credentials
    description: Session cookie is dropped on redirect.
    status: open
    priority: critical
    assignee_id: USR-001
    reporter_id: USR-001
    project_id: PRJ-001
    organization_id: ORG-001
    created_at: "2025-05-20T09:15:00Z"
    updated_at: "2025-06-02T14:30:00Z"
    tags: [auth]
projects:
  - id: PRJ-001
    name: Portal Revamp
    description: Front-end rebuild.
    status: active
    organization_id: ORG-001
    manager_id: USR-001
    progress: 62
    start_date: "2025-01-15T00:00:00Z"
    end_date: "2025-09-30T00:00:00Z"
    budget: 180000
    spent: 97000
documents: []
contracts: []
assets: []
"#;

#[test]
fn seed_round_trips_through_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MINIMAL_SEED.as_bytes()).unwrap();

    let seed = PortalSeed::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(seed.tickets.len(), 1);
    assert_eq!(seed.tickets[0].status, TicketStatus::Open);

    let store = RecordStore::from_seed(seed).unwrap();
    assert_eq!(store.tickets().len(), 1);
}

#[test]
fn missing_seed_file_is_a_read_error() {
    let err = PortalSeed::from_yaml_file("/nonexistent/portal.yaml").unwrap_err();
    assert_eq!(err.error_code(), "SEED_READ");
}

#[test]
fn duplicate_ids_are_rejected() {
    let seed_yaml = MINIMAL_SEED.replace(
        "users:",
        r#"users:
  - id: USR-001
    name: Impostor
    email: impostor@meridian-systems.com
    role: viewer
    organization_id: ORG-001"#,
    );

    let seed = PortalSeed::from_yaml_str(&seed_yaml).unwrap();
    let err = RecordStore::from_seed(seed).unwrap_err();
    assert_eq!(
        err,
        StoreError::DuplicateId {
            entity_type: "user",
            id: "USR-001".to_string(),
        }
    );
}

#[test]
fn malformed_ids_are_rejected() {
    let seed_yaml = MINIMAL_SEED.replace("id: TCK-1001", "id: ticket-one");
    let seed = PortalSeed::from_yaml_str(&seed_yaml).unwrap();

    let err = RecordStore::from_seed(seed).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_FIELD");
}

#[test]
fn invalid_user_email_is_rejected() {
    let seed_yaml = MINIMAL_SEED.replace(
        "email: dana.whitfield@meridian-systems.com",
        "email: not-an-email",
    );
    let seed = PortalSeed::from_yaml_str(&seed_yaml).unwrap();

    let err = RecordStore::from_seed(seed).unwrap_err();
    assert_eq!(
        err,
        StoreError::InvalidField {
            entity_type: "user",
            id: "USR-001".to_string(),
            field: "email",
            value: "not-an-email".to_string(),
        }
    );
}

#[test]
fn builtin_store_loads_and_indexes() {
    let store = RecordStore::builtin().unwrap();

    assert!(store.tickets().len() >= 10);
    assert!(store.projects().len() >= 5);
    assert!(!store.documents().is_empty());
    assert!(!store.contracts().is_empty());
    assert!(!store.assets().is_empty());

    // Every project/organization reference in the builtin data resolves
    for ticket in store.tickets() {
        assert!(store.project_by_id(&ticket.project_id).record().is_some());
        assert!(
            store
                .organization_by_id(&ticket.organization_id)
                .record()
                .is_some()
        );
    }
    for document in store.documents() {
        assert!(store.user_by_id(&document.uploaded_by_id).record().is_some());
    }
}

#[test]
fn dangling_assignee_resolves_to_the_unassigned_placeholder() {
    let store = RecordStore::builtin().unwrap();

    let orphaned: Vec<&Ticket> = store
        .tickets()
        .iter()
        .filter(|ticket| store.user_by_id(&ticket.assignee_id).is_missing())
        .collect();

    // The builtin data ships exactly one deliberately dangling assignee
    assert_eq!(orphaned.len(), 1);
    let name = store
        .user_by_id(&orphaned[0].assignee_id)
        .display_or(UNASSIGNED, |user| user.name.as_str());
    assert_eq!(name, "Unassigned");
}

#[test]
fn unset_asset_assignment_renders_a_dash() {
    let store = RecordStore::builtin().unwrap();

    let unassigned = store
        .assets()
        .iter()
        .find(|asset| asset.assigned_to.is_none())
        .unwrap();

    let display = match unassigned.assigned_to.as_deref() {
        Some(id) => store.user_by_id(id).display_or(DASH, |user| user.name.as_str()),
        None => DASH,
    };
    assert_eq!(display, "—");
}

#[test]
fn store_collections_keep_seed_order() {
    let store = RecordStore::builtin().unwrap();

    let ids: Vec<&str> = store.tickets().iter().take(3).map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["TCK-1001", "TCK-1002", "TCK-1003"]);
}
