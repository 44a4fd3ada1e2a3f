//! Postenv Domain - Core business types
//!
//! This crate defines the model of a Postman collection as far as the
//! environment rewrite cares about it: required variables, request flow
//! classification, the bearer auth and token capture event that get
//! injected, and the report produced by a transformation run.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod collection;
pub mod error;
pub mod options;
pub mod report;
pub mod scripting;
pub mod warning;

pub use auth::{PostmanAuth, PostmanAuthParam, RequestFlow};
pub use collection::{NodeKind, PostmanVariable, check_collection_shape, placeholder};
pub use error::{DomainError, DomainResult};
pub use options::TransformOptions;
pub use report::TransformReport;
pub use scripting::{PostmanEvent, PostmanScript, TOKEN_CAPTURE_SCRIPT};
pub use warning::{TransformWarning, WarningSeverity, WarningStats};
