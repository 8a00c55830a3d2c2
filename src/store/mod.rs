//! In-memory record store and cross-reference resolution
//!
//! The store is built once from a seed, validated, and never mutated. Every
//! page reads the same shared base collections; per-view query state lives
//! in the presentation layer, not here.

use crate::config::PortalSeed;
use crate::core::error::{PortalError, StoreError};
use crate::core::field::FieldFormat;
use crate::core::record::Record;
use crate::entities::{Asset, Contract, Document, Organization, Project, Ticket, User};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Placeholder for a dangling assignee or manager reference
pub const UNASSIGNED: &str = "Unassigned";

/// Placeholder for a dangling uploader reference
pub const UNKNOWN: &str = "Unknown";

/// Placeholder where a missing reference renders as a dash
pub const DASH: &str = "—";

/// Placeholder row shown for an empty result set
pub const NO_RECORDS: &str = "No records found";

/// Read-only lookup index from record id to record
#[derive(Debug, Clone)]
pub struct IdIndex<T: Record> {
    inner: HashMap<String, T>,
}

impl<T: Record> IdIndex<T> {
    /// Build the index, rejecting duplicate ids
    pub fn from_records(records: &[T]) -> Result<Self, StoreError> {
        let mut inner = HashMap::with_capacity(records.len());
        for record in records {
            if inner
                .insert(record.id().to_string(), record.clone())
                .is_some()
            {
                return Err(StoreError::DuplicateId {
                    entity_type: T::entity_type(),
                    id: record.id().to_string(),
                });
            }
        }
        Ok(Self { inner })
    }

    /// Resolve a foreign id
    ///
    /// Total: absence is a value ([`Resolved::Missing`]), never an error.
    pub fn resolve(&self, id: &str) -> Resolved<'_, T> {
        match self.inner.get(id) {
            Some(record) => Resolved::Found(record),
            None => Resolved::Missing,
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.inner.get(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Outcome of a cross-reference lookup
///
/// `Missing` is the explicit unresolved marker. Views render a placeholder
/// for it; a blank cell cannot leak out of [`Resolved::display_or`].
#[derive(Debug)]
pub enum Resolved<'a, T> {
    Found(&'a T),
    Missing,
}

// Copy regardless of T: the Found variant only holds a reference
impl<T> Clone for Resolved<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Resolved<'_, T> {}

impl<'a, T> Resolved<'a, T> {
    /// The referenced record, if the reference resolved
    pub fn record(self) -> Option<&'a T> {
        match self {
            Resolved::Found(record) => Some(record),
            Resolved::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Resolved::Missing)
    }

    /// Project a display string out of the record, or the placeholder
    pub fn display_or(self, placeholder: &'a str, project: impl Fn(&'a T) -> &'a str) -> &'a str {
        match self {
            Resolved::Found(record) => project(record),
            Resolved::Missing => placeholder,
        }
    }
}

// Every portal id reads PREFIX-NUMBER, e.g. TCK-1042
fn portal_id_format() -> &'static FieldFormat {
    static FORMAT: OnceLock<FieldFormat> = OnceLock::new();
    FORMAT.get_or_init(|| FieldFormat::Custom(Regex::new(r"^[A-Z]{3}-\d{3,}$").unwrap()))
}

/// The immutable base collections behind every portal page
#[derive(Debug, Clone)]
pub struct RecordStore {
    organizations: Vec<Organization>,
    users: Vec<User>,
    tickets: Vec<Ticket>,
    projects: Vec<Project>,
    documents: Vec<Document>,
    contracts: Vec<Contract>,
    assets: Vec<Asset>,
    organizations_by_id: IdIndex<Organization>,
    users_by_id: IdIndex<User>,
    projects_by_id: IdIndex<Project>,
}

impl RecordStore {
    /// Build the store from a seed, enforcing the supplier contract
    ///
    /// Enumeration membership is already guaranteed by deserialization; this
    /// checks id format and uniqueness per entity type, plus user email and
    /// document url formats. Collection order is preserved: it is the base
    /// order every page starts from.
    pub fn from_seed(seed: PortalSeed) -> Result<Self, StoreError> {
        check_collection(&seed.organizations)?;
        check_collection(&seed.users)?;
        check_collection(&seed.tickets)?;
        check_collection(&seed.projects)?;
        check_collection(&seed.documents)?;
        check_collection(&seed.contracts)?;
        check_collection(&seed.assets)?;

        for user in &seed.users {
            if !FieldFormat::Email.validate(&user.email) {
                return Err(StoreError::InvalidField {
                    entity_type: User::entity_type(),
                    id: user.id.clone(),
                    field: "email",
                    value: user.email.clone(),
                });
            }
        }
        for document in &seed.documents {
            if !FieldFormat::Url.validate(&document.url) {
                return Err(StoreError::InvalidField {
                    entity_type: Document::entity_type(),
                    id: document.id.clone(),
                    field: "url",
                    value: document.url.clone(),
                });
            }
        }

        let organizations_by_id = IdIndex::from_records(&seed.organizations)?;
        let users_by_id = IdIndex::from_records(&seed.users)?;
        let projects_by_id = IdIndex::from_records(&seed.projects)?;

        tracing::info!(
            organizations = seed.organizations.len(),
            users = seed.users.len(),
            tickets = seed.tickets.len(),
            projects = seed.projects.len(),
            documents = seed.documents.len(),
            contracts = seed.contracts.len(),
            assets = seed.assets.len(),
            "record store loaded"
        );

        Ok(Self {
            organizations: seed.organizations,
            users: seed.users,
            tickets: seed.tickets,
            projects: seed.projects,
            documents: seed.documents,
            contracts: seed.contracts,
            assets: seed.assets,
            organizations_by_id,
            users_by_id,
            projects_by_id,
        })
    }

    /// The data set shipped with the crate
    pub fn builtin() -> Result<Self, PortalError> {
        let seed = PortalSeed::builtin()?;
        Ok(Self::from_seed(seed)?)
    }

    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Resolve a user cross-reference (assignee, reporter, manager, uploader)
    pub fn user_by_id(&self, id: &str) -> Resolved<'_, User> {
        self.users_by_id.resolve(id)
    }

    /// Resolve a project cross-reference
    pub fn project_by_id(&self, id: &str) -> Resolved<'_, Project> {
        self.projects_by_id.resolve(id)
    }

    /// Resolve an organization cross-reference
    pub fn organization_by_id(&self, id: &str) -> Resolved<'_, Organization> {
        self.organizations_by_id.resolve(id)
    }
}

// Id format plus uniqueness for one collection
fn check_collection<T: Record>(records: &[T]) -> Result<(), StoreError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !portal_id_format().validate(record.id()) {
            return Err(StoreError::InvalidField {
                entity_type: T::entity_type(),
                id: record.id().to_string(),
                field: "id",
                value: record.id().to_string(),
            });
        }
        if !seen.insert(record.id().to_string()) {
            return Err(StoreError::DuplicateId {
                entity_type: T::entity_type(),
                id: record.id().to_string(),
            });
        }
    }
    Ok(())
}
