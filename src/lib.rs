//! Taskboard: a local-first task management core.
//!
//! This crate provides the non-presentation core of a single-client task
//! board: an authoritative in-memory task collection, a pure query engine
//! for filtered, searched, and sorted views, and snapshot persistence to a
//! local store that is rewritten after every mutation.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (files, memory slots)
//!
//! # Modules
//!
//! - [`board`]: Task entities, query engine, snapshot port/adapters, and
//!   the [`board::services::TaskBoard`] owner object

pub mod board;
