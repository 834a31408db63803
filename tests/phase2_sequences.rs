//! Phase 2 tests: canonical sequences for all four algorithms.

use std::collections::BTreeSet;

use traversal_quiz::engine::sequence::{generate_sequence, SequenceEngine, SequenceParams};
use traversal_quiz::graph::{
    astar_sequence, bfs_sequence, dfs_sequence, greedy_sequence, heuristic, path_costs, TreeGraph,
};
use traversal_quiz::types::error::QuizError;
use traversal_quiz::types::step::{NodeStatus, Sequence};
use traversal_quiz::types::{Algorithm, NodeId, DEFAULT_GOAL};

// ==================== Helper ====================

fn n(label: char) -> NodeId {
    NodeId::new(label).unwrap()
}

fn nodes(labels: &str) -> Vec<NodeId> {
    labels.chars().map(n).collect()
}

/// Assert (current, frontier) pairs of a sequence, frontier given as a label string.
fn assert_steps(sequence: &Sequence, expected: &[(char, &str)]) {
    assert_eq!(sequence.len(), expected.len(), "step count");
    for (idx, (record, &(current, frontier))) in sequence.iter().zip(expected).enumerate() {
        assert_eq!(record.current_node, n(current), "current at step {}", idx);
        assert_eq!(record.frontier, nodes(frontier), "frontier at step {}", idx);
    }
}

/// Invariants every canonical sequence must satisfy.
fn assert_invariants(sequence: &Sequence) {
    let mut previous: BTreeSet<NodeId> = BTreeSet::new();
    for record in sequence {
        assert!(record.visited.contains(&record.current_node));
        assert!(record.visited.is_superset(&previous));
        assert_eq!(record.visited.len(), previous.len() + 1);
        for node in &record.frontier {
            assert!(!record.visited.contains(node), "{} is visited and queued", node);
        }
        let unique: BTreeSet<NodeId> = record.frontier.iter().copied().collect();
        assert_eq!(unique.len(), record.frontier.len(), "duplicate in frontier");
        previous = record.visited.clone();
    }
}

fn default_sequence(algorithm: Algorithm) -> Sequence {
    generate_sequence(algorithm, &TreeGraph::default_tree()).unwrap()
}

// ==================== BFS Tests ====================

#[test]
fn test_bfs_full_sequence() {
    let sequence = default_sequence(Algorithm::Bfs);
    assert_eq!(sequence.algorithm, Algorithm::Bfs);
    assert_eq!(sequence.goal, None);
    assert_steps(
        &sequence,
        &[
            ('A', "BC"),
            ('B', "CDE"),
            ('C', "DEFG"),
            ('D', "EFG"),
            ('E', "FG"),
            ('F', "G"),
            ('G', ""),
        ],
    );
    assert_invariants(&sequence);
}

#[test]
fn test_bfs_first_step() {
    let sequence = default_sequence(Algorithm::Bfs);
    let first = sequence.step(0).unwrap();
    assert_eq!(first.current_node, n('A'));
    assert_eq!(first.frontier, nodes("BC"));
    assert_eq!(first.visited, BTreeSet::from([n('A')]));
    assert!(first.priorities.is_empty());
}

#[test]
fn test_bfs_visits_every_node_in_level_order() {
    let graph = TreeGraph::default_tree();
    let sequence = bfs_sequence(&graph, graph.root());
    let order = sequence.visit_order();

    let unique: BTreeSet<NodeId> = order.iter().copied().collect();
    assert_eq!(order.len(), graph.node_count());
    assert_eq!(unique.len(), graph.node_count());

    let depths: Vec<u32> = order
        .iter()
        .map(|&node| graph.depth_of(node).unwrap())
        .collect();
    assert!(depths.windows(2).all(|w| w[0] <= w[1]), "{:?}", depths);
}

#[test]
fn test_bfs_from_inner_node() {
    let graph = TreeGraph::default_tree();
    let sequence = bfs_sequence(&graph, n('B'));
    assert_eq!(sequence.visit_order(), nodes("BADECFG"));
    assert_invariants(&sequence);
}

// ==================== DFS Tests ====================

#[test]
fn test_dfs_full_sequence() {
    let sequence = default_sequence(Algorithm::Dfs);
    assert_steps(
        &sequence,
        &[
            ('A', "CB"),
            ('B', "CED"),
            ('D', "CE"),
            ('E', "C"),
            ('C', "GF"),
            ('F', "G"),
            ('G', ""),
        ],
    );
    assert_invariants(&sequence);
}

#[test]
fn test_dfs_finishes_subtree_before_sibling() {
    let graph = TreeGraph::default_tree();
    let order = dfs_sequence(&graph, graph.root()).visit_order();
    assert_eq!(order, nodes("ABDECFG"));

    let pos = |label: char| order.iter().position(|&x| x == n(label)).unwrap();
    // B's whole subtree comes before its sibling C
    for descendant in ['D', 'E'] {
        assert!(pos(descendant) < pos('C'));
    }
}

#[test]
fn test_dfs_stack_top_is_last_element() {
    let sequence = default_sequence(Algorithm::Dfs);
    for pair in sequence.records.windows(2) {
        // the next node processed is the top of the previous stack
        assert_eq!(pair[0].frontier.last(), Some(&pair[1].current_node));
    }
}

// ==================== Greedy Tests ====================

#[test]
fn test_greedy_full_sequence() {
    let sequence = default_sequence(Algorithm::Greedy);
    assert_eq!(sequence.goal, Some(DEFAULT_GOAL));
    assert_steps(&sequence, &[('A', "CB"), ('C', "FGB"), ('F', "")]);
    assert_invariants(&sequence);
    assert!(sequence.reached_goal());
}

#[test]
fn test_greedy_priorities_are_h_values_sorted() {
    let graph = TreeGraph::default_tree();
    let sequence = greedy_sequence(&graph, graph.root(), DEFAULT_GOAL);

    assert_eq!(sequence.records[0].priorities, vec![Some(1), Some(3)]);
    assert_eq!(
        sequence.records[1].priorities,
        vec![Some(0), Some(2), Some(3)]
    );
    for record in &sequence {
        for (node, priority) in record.frontier.iter().zip(&record.priorities) {
            assert_eq!(*priority, heuristic(*node, &graph, DEFAULT_GOAL));
        }
        assert!(record.priorities.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_greedy_goal_record_is_terminal() {
    let sequence = default_sequence(Algorithm::Greedy);
    let last = sequence.records.last().unwrap();
    assert_eq!(last.current_node, DEFAULT_GOAL);
    assert!(last.frontier.is_empty());
    assert!(last.priorities.is_empty());
    // Nothing beyond the goal was discovered
    assert_eq!(last.visited, BTreeSet::from([n('A'), n('C'), n('F')]));
}

#[test]
fn test_greedy_goal_at_start() {
    let graph = TreeGraph::default_tree();
    let sequence = greedy_sequence(&graph, n('F'), n('F'));
    assert_steps(&sequence, &[('F', "")]);
}

#[test]
fn test_greedy_between_sibling_leaves() {
    let graph = TreeGraph::default_tree();
    let sequence = greedy_sequence(&graph, n('D'), n('E'));
    // D -> B (h=1); B expands A (h=2) and E (h=0): E first
    assert_steps(&sequence, &[('D', "B"), ('B', "EA"), ('E', "")]);
}

// ==================== A* Tests ====================

#[test]
fn test_astar_full_sequence() {
    let sequence = default_sequence(Algorithm::AStar);
    // B and G tie at f=4; B was inserted first
    assert_steps(&sequence, &[('A', "CB"), ('C', "FBG"), ('F', "")]);
    assert_invariants(&sequence);
    assert!(sequence.reached_goal());
}

#[test]
fn test_astar_priorities_are_f_values() {
    let graph = TreeGraph::default_tree();
    let sequence = astar_sequence(&graph, graph.root(), DEFAULT_GOAL);
    assert_eq!(sequence.records[0].priorities, vec![Some(2), Some(4)]);
    assert_eq!(
        sequence.records[1].priorities,
        vec![Some(2), Some(4), Some(4)]
    );
}

#[test]
fn test_astar_f_never_decreases_along_expansions() {
    let graph = TreeGraph::default_tree();
    let costs = path_costs(&graph, graph.root());
    let g = |node: NodeId| costs.iter().find(|(x, _)| *x == node).unwrap().1.unwrap();
    let sequence = astar_sequence(&graph, graph.root(), DEFAULT_GOAL);

    let f_values: Vec<u32> = sequence
        .visit_order()
        .into_iter()
        .map(|node| g(node) + heuristic(node, &graph, DEFAULT_GOAL).unwrap())
        .collect();
    assert!(f_values.windows(2).all(|w| w[0] <= w[1]), "{:?}", f_values);
}

#[test]
fn test_astar_explores_no_deeper_than_goal() {
    let graph = TreeGraph::default_tree();
    let goal_depth = graph.depth_of(DEFAULT_GOAL).unwrap();
    let sequence = astar_sequence(&graph, graph.root(), DEFAULT_GOAL);
    let bfs_order = bfs_sequence(&graph, graph.root()).visit_order();

    for node in sequence.visit_order() {
        assert!(graph.depth_of(node).unwrap() <= goal_depth);
        assert!(bfs_order.contains(&node));
    }
    // One expansion per level down to the goal
    assert_eq!(sequence.records.len() as u32, goal_depth + 1);
}

#[test]
fn test_path_costs_are_depths_from_start() {
    let graph = TreeGraph::default_tree();
    for (node, g) in path_costs(&graph, graph.root()) {
        assert_eq!(g, graph.depth_of(node));
    }
}

// ==================== Engine Tests ====================

#[test]
fn test_engine_rejects_unknown_start() {
    let graph = TreeGraph::default_tree();
    let result = SequenceEngine::new().generate(
        &graph,
        SequenceParams {
            algorithm: Algorithm::Bfs,
            start: n('Z'),
            goal: DEFAULT_GOAL,
        },
    );
    assert!(matches!(result, Err(QuizError::NodeNotFound(node)) if node == n('Z')));
}

#[test]
fn test_engine_goal_only_checked_for_informed() {
    let graph = TreeGraph::default_tree();
    let engine = SequenceEngine::new();
    let params = |algorithm| SequenceParams {
        algorithm,
        start: graph.root(),
        goal: n('Z'),
    };
    assert!(engine.generate(&graph, params(Algorithm::Bfs)).is_ok());
    assert!(engine.generate(&graph, params(Algorithm::Dfs)).is_ok());
    assert!(engine.generate(&graph, params(Algorithm::Greedy)).is_err());
    assert!(engine.generate(&graph, params(Algorithm::AStar)).is_err());
}

#[test]
fn test_engine_generate_all_in_level_order() {
    let graph = TreeGraph::default_tree();
    let all = SequenceEngine::new()
        .generate_all(&graph, DEFAULT_GOAL)
        .unwrap();
    let algorithms: Vec<Algorithm> = all.iter().map(|s| s.algorithm).collect();
    assert_eq!(algorithms, Algorithm::ALL.to_vec());
    assert_eq!(all.iter().map(|s| s.len()).collect::<Vec<_>>(), [7, 7, 3, 3]);
}

#[test]
fn test_generation_is_deterministic() {
    for algorithm in Algorithm::ALL {
        assert_eq!(default_sequence(algorithm), default_sequence(algorithm));
    }
}

#[test]
fn test_alternate_goal() {
    let graph = TreeGraph::default_tree();
    let sequence = SequenceEngine::new()
        .generate(
            &graph,
            SequenceParams {
                algorithm: Algorithm::AStar,
                start: graph.root(),
                goal: n('D'),
            },
        )
        .unwrap();
    assert_eq!(sequence.visit_order(), nodes("ABD"));
    assert_eq!(sequence.goal, Some(n('D')));
}

// ==================== Sequence Access Tests ====================

#[test]
fn test_step_out_of_range() {
    let sequence = default_sequence(Algorithm::Greedy);
    assert!(sequence.get(3).is_none());
    assert!(matches!(
        sequence.step(3),
        Err(QuizError::StepOutOfRange { index: 3, len: 3 })
    ));
}

#[test]
fn test_snapshots_are_independent() {
    let sequence = default_sequence(Algorithm::Bfs);
    // Scrubbing backwards still sees the earlier state
    let sizes: Vec<usize> = sequence.iter().map(|r| r.visited.len()).collect();
    assert_eq!(sizes, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(sequence.records[2].frontier, nodes("DEFG"));
    assert_eq!(sequence.records[0].frontier, nodes("BC"));
}

#[test]
fn test_status_of() {
    let sequence = default_sequence(Algorithm::Bfs);
    let step = sequence.step(1).unwrap();
    assert_eq!(step.status_of(n('A')), NodeStatus::Visited);
    assert_eq!(step.status_of(n('B')), NodeStatus::Visited);
    assert_eq!(step.status_of(n('D')), NodeStatus::InFrontier);
    assert_eq!(step.status_of(n('F')), NodeStatus::Unvisited);
}

#[test]
fn test_frontier_display() {
    let sequence = default_sequence(Algorithm::Dfs);
    assert_eq!(sequence.records[0].frontier_display(), "C, B");
    assert_eq!(sequence.records[6].frontier_display(), "empty");
}

#[test]
fn test_sequence_json_shape() {
    let value = serde_json::to_value(default_sequence(Algorithm::Greedy)).unwrap();
    assert_eq!(value["algorithm"], "greedy");
    assert_eq!(value["goal"], "F");
    assert_eq!(value["records"][0]["current_node"], "A");
    assert_eq!(value["records"][0]["frontier"], serde_json::json!(["C", "B"]));
    assert_eq!(value["records"][0]["priorities"], serde_json::json!([1, 3]));
    assert!(value["records"][2].get("priorities").is_none());

    let bfs = serde_json::to_value(default_sequence(Algorithm::Bfs)).unwrap();
    assert!(bfs.get("goal").is_none());
    assert_eq!(bfs["records"][1]["visited"], serde_json::json!(["A", "B"]));
}
