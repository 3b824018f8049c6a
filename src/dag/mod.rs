// src/dag/mod.rs

//! Dependency graph and ordering.
//!
//! - [`graph`] builds the per-request dependency graph.
//! - [`resolver`] runs Kahn's algorithm with the cycle fallback.
//! - [`report`] explains what the resolver had to work around.

pub mod graph;
pub mod report;
pub mod resolver;

pub use graph::DependencyGraph;
pub use report::{DanglingDependency, ScheduleReport};
pub use resolver::{Resolution, resolve, resolve_detailed, resolve_graph, schedule};
