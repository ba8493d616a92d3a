//! Task board core for Taskboard.
//!
//! This module implements the task collection and its derived views:
//! creating tasks from user-supplied drafts, toggling completion, deleting
//! by identifier, computing filtered/searched/sorted views with aggregate
//! counts, and synchronising the whole collection to a local snapshot store
//! after every mutation. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The owning store object in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
