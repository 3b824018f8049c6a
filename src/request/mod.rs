// src/request/mod.rs

//! Schedule requests: what callers hand to the resolver.
//!
//! - [`model`] defines the serde-backed request/response types.
//! - [`loader`] decodes requests from JSON or TOML.
//! - [`validate`] is the opt-in strict checker used by `--strict`.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_from_path, load_from_reader, load_from_str};
pub use model::{ScheduleRequest, ScheduleResponse, TaskDescriptor, parse_due_date};
pub use validate::validate_request;
