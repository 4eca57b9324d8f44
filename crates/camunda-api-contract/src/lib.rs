//! Camunda REST API contract types and validation
//!
//! This crate defines the wire types for the Camunda process engine's
//! REST API: resource entities, their integer- and string-coded
//! enumerations, and the query/request shapes accepted by the
//! endpoints. The types are shared between the REST client, the mock
//! client, and consumer tests.

pub mod error;
pub mod types;
pub mod validation;

pub use error::*;
pub use types::*;
