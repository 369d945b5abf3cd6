//! A Subversion provider abstraction
//!
//! `subvert` exposes the uniform version-control operation set (checkout,
//! update, checkin, add, remove, branch, tag, diff, blame, list, mkdir,
//! status, changelog, export, info, remote-existence check) by delegating
//! to backend command objects. The crate owns the two non-trivial pieces:
//! the url scheme validator that sanity-checks repository locations before
//! any repository value exists, and the dispatch contract that resolves
//! each abstract operation to a backend command and narrows its outcome.
//! Spawning the `svn` process and parsing its output belong to the command
//! implementations behind the [`provider::registry::SvnCommand`] trait.

pub mod artifacts;
pub mod commands;
pub mod provider;
