//! Provider data model
//!
//! This module contains the value types the provider core operates on:
//!
//! - `url`: Scheme classification and validation of repository locations
//! - `repository`: Immutable repository references
//! - `fileset`: The working set an operation applies to
//! - `parameters`: Per-operation parameter bags
//! - `results`: Operation kinds, command outcomes and their payloads
//! - `settings`: Subversion client configuration lookups

pub mod fileset;
pub mod parameters;
pub mod repository;
pub mod results;
pub mod settings;
pub mod url;
