// src/request/loader.rs

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::errors::Result;
use crate::request::model::{ScheduleRequest, TaskDescriptor};
use crate::types::InputFormat;

/// Accepted top-level JSON shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonRequest {
    Wrapped(ScheduleRequest),
    Bare(Vec<TaskDescriptor>),
}

/// Load a request from a file.
///
/// `InputFormat::Auto` picks TOML for `.toml` files and JSON otherwise.
/// This only decodes the request; it does **not** run strict validation.
/// Use [`crate::request::validate_request`] for that.
pub fn load_from_path(path: impl AsRef<Path>, format: InputFormat) -> Result<ScheduleRequest> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let format = format.resolve_for(Some(path));

    debug!(?path, ?format, "loading schedule request");
    load_from_str(&contents, format)
}

/// Load a request from any reader (e.g. stdin). `Auto` means JSON here.
pub fn load_from_reader(mut reader: impl Read, format: InputFormat) -> Result<ScheduleRequest> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    load_from_str(&contents, format.resolve_for(None))
}

/// Decode a request from an in-memory string.
pub fn load_from_str(contents: &str, format: InputFormat) -> Result<ScheduleRequest> {
    let request = match format.resolve_for(None) {
        InputFormat::Toml => toml::from_str::<ScheduleRequest>(contents)?,
        _ => match serde_json::from_str::<JsonRequest>(contents)? {
            JsonRequest::Wrapped(request) => request,
            JsonRequest::Bare(tasks) => ScheduleRequest::from(tasks),
        },
    };

    debug!(tasks = request.tasks.len(), "decoded schedule request");
    Ok(request)
}

/// Default request location when `--input` is not given.
pub fn default_input_path() -> PathBuf {
    PathBuf::from("tasks.json")
}
