// tests/request_loading.rs

use std::io::Write;

use chrono::NaiveDate;
use tempfile::{Builder, NamedTempFile};
use taskorder::errors::TaskOrderError;
use taskorder::request::{
    ScheduleRequest, load_from_path, load_from_reader, load_from_str, parse_due_date,
    validate_request,
};
use taskorder::types::InputFormat;
use taskorder_test_utils::builders::ScheduleRequestBuilder;

fn temp_with_suffix(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn json_request_with_all_fields() {
    let file = temp_with_suffix(
        ".json",
        r#"{
  "tasks": [
    { "title": "Design", "estimatedHours": 4, "dueDate": "2025-03-01", "dependencies": [] },
    { "title": "Build", "estimatedHours": 12, "dueDate": null, "dependencies": ["Design"] }
  ]
}"#,
    );

    let req = load_from_path(file.path(), InputFormat::Auto).unwrap();
    assert_eq!(req.tasks.len(), 2);
    assert_eq!(req.tasks[0].title, "Design");
    assert_eq!(req.tasks[0].estimated_hours, 4);
    assert_eq!(req.tasks[0].due_date, NaiveDate::from_ymd_opt(2025, 3, 1));
    assert_eq!(req.tasks[1].due_date, None);
    assert_eq!(req.tasks[1].dependencies, vec!["Design"]);
}

#[test]
fn json_optional_fields_default() {
    let req = load_from_str(r#"{"tasks":[{"title":"Solo"}]}"#, InputFormat::Json).unwrap();

    let task = &req.tasks[0];
    assert_eq!(task.estimated_hours, 0);
    assert_eq!(task.due_date, None);
    assert!(task.dependencies.is_empty());
}

#[test]
fn json_bare_array_is_accepted() {
    let req = load_from_str(
        r#"[{"title":"A"},{"title":"B","dependencies":["A"]}]"#,
        InputFormat::Json,
    )
    .unwrap();

    assert_eq!(req.tasks.len(), 2);
    assert_eq!(req.tasks[1].dependencies, vec!["A"]);
}

#[test]
fn toml_request_by_extension() {
    let file = temp_with_suffix(
        ".toml",
        r#"
[[tasks]]
title = "Design"
estimated_hours = 4
due_date = "2025-03-01"

[[tasks]]
title = "Build"
estimatedHours = 12
dependencies = ["Design"]
"#,
    );

    let req = load_from_path(file.path(), InputFormat::Auto).unwrap();
    assert_eq!(req.tasks.len(), 2);
    assert_eq!(req.tasks[0].estimated_hours, 4);
    assert_eq!(req.tasks[0].due_date, NaiveDate::from_ymd_opt(2025, 3, 1));
    assert_eq!(req.tasks[1].estimated_hours, 12);
    assert_eq!(req.tasks[1].dependencies, vec!["Design"]);
}

#[test]
fn explicit_format_overrides_extension() {
    let file = temp_with_suffix(".txt", "[[tasks]]\ntitle = \"A\"\n");

    let req = load_from_path(file.path(), InputFormat::Toml).unwrap();
    assert_eq!(req.tasks[0].title, "A");
}

#[test]
fn reader_defaults_to_json() {
    let input = br#"{"tasks":[{"title":"A"}]}"#;
    let req = load_from_reader(&input[..], InputFormat::Auto).unwrap();
    assert_eq!(req.tasks[0].title, "A");
}

#[test]
fn due_date_accepts_timestamps() {
    let req = load_from_str(
        r#"[
  {"title":"A","dueDate":"2025-03-01T17:30:00Z"},
  {"title":"B","dueDate":"2025-03-02T09:00:00"},
  {"title":"C","dueDate":""}
]"#,
        InputFormat::Json,
    )
    .unwrap();

    assert_eq!(req.tasks[0].due_date, NaiveDate::from_ymd_opt(2025, 3, 1));
    assert_eq!(req.tasks[1].due_date, NaiveDate::from_ymd_opt(2025, 3, 2));
    assert_eq!(req.tasks[2].due_date, None);
    assert_eq!(parse_due_date("not a date"), None);
}

#[test]
fn due_date_serializes_as_plain_date() {
    let req = load_from_str(
        r#"{"tasks":[{"title":"A","dueDate":"2025-03-01T17:30:00+02:00"}]}"#,
        InputFormat::Json,
    )
    .unwrap();

    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains(r#""dueDate":"2025-03-01""#), "{json}");
    assert!(json.contains(r#""estimatedHours":0"#), "{json}");
}

#[test]
fn invalid_due_date_is_a_json_error() {
    let result = load_from_str(
        r#"{"tasks":[{"title":"A","dueDate":"someday"}]}"#,
        InputFormat::Json,
    );
    assert!(matches!(result, Err(TaskOrderError::JsonError(_))));
}

#[test]
fn missing_title_is_rejected() {
    let result = load_from_str(r#"{"tasks":[{"dependencies":[]}]}"#, InputFormat::Json);
    assert!(matches!(result, Err(TaskOrderError::JsonError(_))));
}

#[test]
fn negative_hours_are_rejected() {
    let result = load_from_str(r#"[{"title":"A","estimatedHours":-3}]"#, InputFormat::Json);
    assert!(matches!(result, Err(TaskOrderError::JsonError(_))));
}

#[test]
fn broken_toml_is_a_toml_error() {
    let result = load_from_str("[[tasks]\ntitle = ", InputFormat::Toml);
    assert!(matches!(result, Err(TaskOrderError::TomlError(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_from_path(dir.path().join("nope.json"), InputFormat::Auto);
    assert!(matches!(result, Err(TaskOrderError::IoError(_))));
}

#[test]
fn strict_accepts_well_formed_request() {
    let req = ScheduleRequestBuilder::new()
        .task("A", &[])
        .task("B", &["A"])
        .build();
    assert!(validate_request(&req).is_ok());
    assert!(validate_request(&ScheduleRequest::default()).is_ok());
}

#[test]
fn strict_rejects_unknown_dependency() {
    let req = ScheduleRequestBuilder::new().task("A", &["NonExistent"]).build();

    match validate_request(&req) {
        Err(TaskOrderError::UnknownDependency(msg)) => {
            assert!(msg.contains("NonExistent"));
        }
        other => panic!("Expected UnknownDependency, got: {:?}", other),
    }
}

#[test]
fn strict_rejects_cycle() {
    let req = ScheduleRequestBuilder::new()
        .task("A", &["B"])
        .task("B", &["A"])
        .build();

    match validate_request(&req) {
        Err(TaskOrderError::DagCycle(msg)) => {
            assert!(msg.contains("cycle detected"));
            assert!(msg.contains("A") || msg.contains("B"));
        }
        other => panic!("Expected DagCycle, got: {:?}", other),
    }
}

#[test]
fn strict_rejects_self_dependency_duplicates_and_empty_titles() {
    let self_dep = ScheduleRequestBuilder::new().task("A", &["A"]).build();
    let duplicate = ScheduleRequestBuilder::new()
        .task("A", &[])
        .task("A", &[])
        .build();
    let empty = ScheduleRequestBuilder::new().task("", &[]).build();

    for req in [self_dep, duplicate, empty] {
        assert!(
            matches!(validate_request(&req), Err(TaskOrderError::InvalidRequest(_))),
            "{req:?} should be rejected"
        );
    }
}
