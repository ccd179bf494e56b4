//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, event envelopes)
//! - `organization` - Organizations and projects addressed by slug
//! - `shell` - Request context, scopes, anti-forgery tokens, messages and events
//!   of the application shell

pub mod foundation;
pub mod organization;
pub mod shell;
