//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: upstream model identifiers
//! - [`query::Query`]: a validated question submitted for analysis
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod query;
