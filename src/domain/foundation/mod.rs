//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, error types and the event
//! infrastructure shared by the rest of the domain.

mod errors;
mod events;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{OrganizationId, ProjectId, UserId};
pub use timestamp::Timestamp;
