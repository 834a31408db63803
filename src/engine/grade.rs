//! Grading a learner's proposed step against the canonical one.

use serde::Serialize;

use crate::types::{Algorithm, StepRecord};

/// Note attached when a BFS/DFS frontier has the right nodes in the wrong order.
pub const ORDER_MISMATCH_NOTE: &str = "The nodes are correct, but the order is wrong.";

/// Outcome of grading one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeResult {
    /// Proposed current node matches.
    pub current_correct: bool,
    /// Proposed frontier is accepted under the algorithm's policy.
    pub frontier_correct: bool,
    /// Same nodes as the canonical frontier but a different order.
    pub order_mismatch: bool,
    /// Explanation for an order-only mistake.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_note: Option<&'static str>,
}

impl GradeResult {
    /// Both the current node and the frontier are accepted.
    pub fn is_correct(&self) -> bool {
        self.current_correct && self.frontier_correct
    }

    /// Message to show the learner.
    pub fn feedback(&self) -> String {
        if self.is_correct() {
            "Correct! Moving to next step...".to_string()
        } else if let Some(note) = self.order_note {
            format!("Incorrect. {}", note)
        } else {
            "Incorrect. Try again!".to_string()
        }
    }
}

/// Trim and uppercase a label.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_uppercase()
}

/// Split comma-separated frontier text into normalized, non-empty labels.
pub fn parse_frontier(text: &str) -> Vec<String> {
    text.split(',')
        .map(normalize_label)
        .filter(|label| !label.is_empty())
        .collect()
}

/// Grade a proposed (current node, frontier) pair against `step`.
///
/// BFS and DFS require the exact frontier order; Greedy and A* also accept
/// the same nodes in any order. Malformed labels simply fail to match.
pub fn grade<S: AsRef<str>>(
    algorithm: Algorithm,
    step: &StepRecord,
    proposed_current: &str,
    proposed_frontier: &[S],
) -> GradeResult {
    let current_correct = normalize_label(proposed_current) == step.current_node.to_string();

    let proposed: Vec<String> = proposed_frontier
        .iter()
        .map(|label| normalize_label(label.as_ref()))
        .filter(|label| !label.is_empty())
        .collect();
    let canonical: Vec<String> = step.frontier.iter().map(|n| n.to_string()).collect();

    let exact_match = proposed == canonical;
    let set_match = exact_match || {
        let mut a = proposed.clone();
        let mut b = canonical.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    };

    let order_mismatch = set_match && !exact_match;
    let frontier_correct = exact_match || (set_match && algorithm.order_lenient());
    let order_note = (order_mismatch && !algorithm.order_lenient()).then_some(ORDER_MISMATCH_NOTE);

    log::debug!(
        "grade {}: current={} exact={} set={} -> {}",
        algorithm.name(),
        current_correct,
        exact_match,
        set_match,
        current_correct && frontier_correct
    );

    GradeResult {
        current_correct,
        frontier_correct,
        order_mismatch,
        order_note,
    }
}

/// Grade a submission whose frontier is still raw comma-separated text.
pub fn grade_submission(
    algorithm: Algorithm,
    step: &StepRecord,
    proposed_current: &str,
    frontier_text: &str,
) -> GradeResult {
    grade(algorithm, step, proposed_current, &parse_frontier(frontier_text))
}
