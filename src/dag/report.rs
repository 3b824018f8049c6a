// src/dag/report.rs

//! Diagnostics for a schedule request.
//!
//! The resolver silently absorbs malformed input. The report says what it
//! absorbed, so the CLI can warn about it and `--report` can print it.

use std::collections::{HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use serde::Serialize;

use crate::dag::graph::DependencyGraph;
use crate::dag::resolver::{Resolution, resolve_graph};
use crate::request::model::TaskDescriptor;

/// A dependency naming a title that is not part of the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DanglingDependency {
    pub task: String,
    pub dependency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReport {
    /// Ignored references, in input order.
    pub dangling_dependencies: Vec<DanglingDependency>,
    /// Tasks listing their own title as a dependency.
    pub self_dependencies: Vec<String>,
    /// Titles used by more than one task entry.
    pub duplicate_titles: Vec<String>,
    /// Strongly connected groups that can never be ordered, including
    /// single-task self-loops. Members are in first-seen order.
    pub cycles: Vec<Vec<String>>,
    /// Tasks outside any cycle that still could not be ordered because they
    /// depend on one.
    pub blocked: Vec<String>,
}

impl ScheduleReport {
    /// Analyze a request. Never fails.
    pub fn analyze(tasks: &[TaskDescriptor]) -> Self {
        let graph = DependencyGraph::from_tasks(tasks);
        let resolution = resolve_graph(&graph);
        Self::from_parts(tasks, &graph, &resolution)
    }

    /// Build a report from a graph and resolution computed by the caller.
    pub fn from_parts(
        tasks: &[TaskDescriptor],
        graph: &DependencyGraph,
        resolution: &Resolution,
    ) -> Self {
        let cycles = find_cycles(graph);
        let in_cycle: HashSet<&str> = cycles.iter().flatten().map(String::as_str).collect();
        let unresolved: HashSet<&str> = resolution.unresolved().iter().map(String::as_str).collect();

        let blocked = graph
            .tasks()
            .filter(|t| unresolved.contains(t) && !in_cycle.contains(t))
            .map(str::to_string)
            .collect();

        Self {
            dangling_dependencies: find_dangling(tasks, graph),
            self_dependencies: find_self_dependencies(tasks),
            duplicate_titles: find_duplicates(tasks),
            cycles,
            blocked,
        }
    }

    /// `true` when the request was well-formed.
    pub fn is_clean(&self) -> bool {
        self.dangling_dependencies.is_empty()
            && self.self_dependencies.is_empty()
            && self.duplicate_titles.is_empty()
            && self.cycles.is_empty()
            && self.blocked.is_empty()
    }
}

fn find_dangling(tasks: &[TaskDescriptor], graph: &DependencyGraph) -> Vec<DanglingDependency> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for task in tasks {
        for dep in task.dependencies.iter().filter(|d| !graph.contains(d)) {
            let entry = DanglingDependency {
                task: task.title.clone(),
                dependency: dep.clone(),
            };
            if seen.insert(entry.clone()) {
                out.push(entry);
            }
        }
    }
    out
}

fn find_self_dependencies(tasks: &[TaskDescriptor]) -> Vec<String> {
    let mut seen = HashSet::new();

    tasks
        .iter()
        .filter(|t| t.dependencies.contains(&t.title))
        .filter(|t| seen.insert(t.title.as_str()))
        .map(|t| t.title.clone())
        .collect()
}

fn find_duplicates(tasks: &[TaskDescriptor]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen = Vec::new();

    for task in tasks {
        let count = counts.entry(task.title.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(task.title.as_str());
        }
        *count += 1;
    }

    first_seen
        .into_iter()
        .filter(|t| counts[t] > 1)
        .map(str::to_string)
        .collect()
}

fn find_cycles(graph: &DependencyGraph) -> Vec<Vec<String>> {
    let position: HashMap<&str, usize> = graph.tasks().enumerate().map(|(i, t)| (t, i)).collect();

    let mut g: DiGraphMap<&str, ()> = DiGraphMap::new();
    for title in graph.tasks() {
        g.add_node(title);
    }
    for (from, to) in graph.edges() {
        g.add_edge(from, to, ());
    }

    let mut cycles: Vec<Vec<&str>> = tarjan_scc(&g)
        .into_iter()
        .filter(|scc| scc.len() > 1 || g.contains_edge(scc[0], scc[0]))
        .collect();

    for scc in cycles.iter_mut() {
        scc.sort_by_key(|t| position[t]);
    }
    cycles.sort_by_key(|scc| position[scc[0]]);

    cycles
        .into_iter()
        .map(|scc| scc.into_iter().map(str::to_string).collect())
        .collect()
}
