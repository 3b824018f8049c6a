// src/dag/resolver.rs

use std::collections::VecDeque;

use tracing::debug;

use crate::dag::graph::DependencyGraph;
use crate::request::model::{ScheduleRequest, ScheduleResponse, TaskDescriptor};

/// Outcome of one resolution.
///
/// `order` always holds every distinct title exactly once. The first
/// `resolved` entries are a topological order; whatever follows could not be
/// placed (cycle members and everything downstream of them).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    order: Vec<String>,
    resolved: usize,
}

impl Resolution {
    /// Every distinct title, sorted prefix first.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// The topologically sorted prefix.
    pub fn sorted(&self) -> &[String] {
        &self.order[..self.resolved]
    }

    /// Titles appended by the cycle fallback.
    ///
    /// Their relative order carries no meaning.
    pub fn unresolved(&self) -> &[String] {
        &self.order[self.resolved..]
    }

    pub fn is_complete(&self) -> bool {
        self.resolved == self.order.len()
    }

    pub fn into_order(self) -> Vec<String> {
        self.order
    }
}

/// Recommended execution order for `tasks`.
///
/// Never fails: unknown dependency names are ignored and tasks caught in a
/// cycle are appended after everything that could be ordered.
pub fn resolve(tasks: &[TaskDescriptor]) -> Vec<String> {
    resolve_detailed(tasks).into_order()
}

/// Like [`resolve`], but keeps track of where the sorted part ends.
pub fn resolve_detailed(tasks: &[TaskDescriptor]) -> Resolution {
    let graph = DependencyGraph::from_tasks(tasks);
    resolve_graph(&graph)
}

/// Kahn's algorithm over an already built graph.
///
/// The frontier is seeded in first-seen order and nodes are enqueued the
/// moment their in-degree hits zero, following edge-recording order.
pub fn resolve_graph(graph: &DependencyGraph) -> Resolution {
    let mut in_degree = graph.in_degrees();
    let mut placed = vec![false; graph.len()];
    let mut order = Vec::with_capacity(graph.len());

    let mut frontier: VecDeque<usize> = (0..graph.len()).filter(|&i| in_degree[i] == 0).collect();

    while let Some(idx) = frontier.pop_front() {
        placed[idx] = true;
        order.push(graph.title_at(idx).to_string());

        for &next in graph.dependent_indices(idx) {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                frontier.push_back(next);
            }
        }
    }

    let resolved = order.len();

    if resolved < graph.len() {
        debug!(
            resolved,
            total = graph.len(),
            "dependency cycle left tasks unordered; appending them as-is"
        );
        order.extend(
            placed
                .iter()
                .enumerate()
                .filter(|(_, done)| !**done)
                .map(|(idx, _)| graph.title_at(idx).to_string()),
        );
    }

    Resolution { order, resolved }
}

/// Request/response entry point used by callers sitting in front of the
/// resolver (the CLI here, an HTTP handler elsewhere).
pub fn schedule(request: &ScheduleRequest) -> ScheduleResponse {
    ScheduleResponse {
        recommended_order: resolve(&request.tasks),
    }
}
