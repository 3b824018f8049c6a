// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::request::model::TaskDescriptor;

/// Internal node structure: stores outgoing edges and the incoming edge count.
#[derive(Debug, Clone)]
struct DagNode {
    title: String,
    /// Direct dependents, in the order their edges were recorded.
    dependents: Vec<usize>,
    /// Number of distinct prerequisites present in the request.
    in_degree: usize,
}

/// Per-request dependency graph keyed by task title.
///
/// Nodes are kept in first-seen order so that everything derived from the
/// graph is deterministic for a given input. Unlike a validated config DAG,
/// this graph may contain cycles and self-loops; the resolver deals with them.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<DagNode>,
    index: HashMap<String, usize>,
    edges: HashSet<(usize, usize)>,
}

impl DependencyGraph {
    /// Build the graph for one request.
    ///
    /// - duplicate titles collapse onto one node
    /// - dependencies naming a title not in `tasks` are skipped
    /// - an edge is recorded at most once per (prerequisite, dependent) pair
    pub fn from_tasks(tasks: &[TaskDescriptor]) -> Self {
        let mut graph = DependencyGraph::default();

        // First pass: one node per distinct title.
        for task in tasks {
            graph.intern(&task.title);
        }

        // Second pass: prerequisite -> dependent edges.
        for task in tasks {
            let Some(&dependent) = graph.index.get(&task.title) else {
                continue;
            };
            for dep in task.dependencies.iter() {
                if let Some(&prerequisite) = graph.index.get(dep) {
                    graph.add_edge(prerequisite, dependent);
                }
            }
        }

        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "built dependency graph"
        );

        graph
    }

    fn intern(&mut self, title: &str) -> usize {
        if let Some(&idx) = self.index.get(title) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(DagNode {
            title: title.to_string(),
            dependents: Vec::new(),
            in_degree: 0,
        });
        self.index.insert(title.to_string(), idx);
        idx
    }

    fn add_edge(&mut self, from: usize, to: usize) {
        if self.edges.insert((from, to)) {
            self.nodes[from].dependents.push(to);
            self.nodes[to].in_degree += 1;
        }
    }

    /// Number of distinct titles.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.index.contains_key(title)
    }

    /// All titles in first-seen order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.title.as_str())
    }

    /// All edges as `(prerequisite, dependent)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes.iter().flat_map(move |n| {
            n.dependents
                .iter()
                .map(move |&d| (n.title.as_str(), self.nodes[d].title.as_str()))
        })
    }

    /// Immediate dependents of a task, in edge-recording order.
    pub fn dependents_of(&self, title: &str) -> Vec<&str> {
        self.index
            .get(title)
            .map(|&idx| {
                self.nodes[idx]
                    .dependents
                    .iter()
                    .map(|&d| self.nodes[d].title.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of distinct prerequisites of a task, or `None` if unknown.
    pub fn in_degree_of(&self, title: &str) -> Option<usize> {
        self.index.get(title).map(|&idx| self.nodes[idx].in_degree)
    }

    pub(crate) fn title_at(&self, idx: usize) -> &str {
        &self.nodes[idx].title
    }

    pub(crate) fn dependent_indices(&self, idx: usize) -> &[usize] {
        &self.nodes[idx].dependents
    }

    pub(crate) fn in_degrees(&self) -> Vec<usize> {
        self.nodes.iter().map(|n| n.in_degree).collect()
    }
}
