//! Domain record types and their categorical enumerations

pub mod asset;
pub mod contract;
pub mod document;
pub mod macros;
pub mod organization;
pub mod project;
pub mod ticket;
pub mod user;

pub use asset::{Asset, AssetCategory, AssetStatus};
pub use contract::{Contract, ContractStatus, contract_value_total};
pub use document::{Document, DocumentType};
pub use organization::{Organization, Plan};
pub use project::{Project, ProjectStatus};
pub use ticket::{Ticket, TicketPriority, TicketStatus};
pub use user::{User, UserRole};
