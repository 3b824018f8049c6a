// src/request/validate.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::errors::{Result, TaskOrderError};
use crate::request::model::ScheduleRequest;

/// Strict validation of a request (`--strict`).
///
/// This checks:
/// - every title is non-empty
/// - titles are unique
/// - every dependency names a task in the same request
/// - no task depends on itself
/// - the dependency graph has no cycles
///
/// The resolver does not need any of this; it degrades gracefully on all of
/// the above. Strict mode exists for callers that would rather be told.
pub fn validate_request(request: &ScheduleRequest) -> Result<()> {
    validate_titles(request)?;
    validate_task_dependencies(request)?;
    validate_dag(request)?;
    Ok(())
}

fn validate_titles(request: &ScheduleRequest) -> Result<()> {
    let mut seen = HashSet::new();

    for (idx, task) in request.tasks.iter().enumerate() {
        if task.title.is_empty() {
            return Err(TaskOrderError::InvalidRequest(format!(
                "task #{} has an empty title",
                idx + 1
            )));
        }
        if !seen.insert(task.title.as_str()) {
            return Err(TaskOrderError::InvalidRequest(format!(
                "duplicate task title '{}'",
                task.title
            )));
        }
    }
    Ok(())
}

fn validate_task_dependencies(request: &ScheduleRequest) -> Result<()> {
    let titles: HashSet<&str> = request.tasks.iter().map(|t| t.title.as_str()).collect();

    for task in request.tasks.iter() {
        for dep in task.dependencies.iter() {
            if !titles.contains(dep.as_str()) {
                return Err(TaskOrderError::UnknownDependency(format!(
                    "task '{}' depends on unknown task '{}'",
                    task.title, dep
                )));
            }
            if dep == &task.title {
                return Err(TaskOrderError::InvalidRequest(format!(
                    "task '{}' cannot depend on itself",
                    task.title
                )));
            }
        }
    }
    Ok(())
}

fn validate_dag(request: &ScheduleRequest) -> Result<()> {
    // Edge direction: dependency -> task, so
    //   { title: "B", dependencies: ["A"] }
    // adds A -> B.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for task in request.tasks.iter() {
        graph.add_node(task.title.as_str());
    }

    for task in request.tasks.iter() {
        for dep in task.dependencies.iter() {
            graph.add_edge(dep.as_str(), task.title.as_str(), ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(TaskOrderError::DagCycle(format!(
            "cycle detected involving task '{}'",
            cycle.node_id()
        ))),
    }
}
