//! Generate each canonical run on the default tree and grade a few answers.

use traversal_quiz::*;

fn main() -> QuizResult<()> {
    let graph = TreeGraph::default_tree();

    println!("Heuristic (hop distance to {}):", DEFAULT_GOAL);
    for (node, h) in heuristic_table(&graph, DEFAULT_GOAL) {
        println!("  h({}) = {:?}", node, h);
    }

    for algorithm in Algorithm::ALL {
        let sequence = generate_sequence(algorithm, &graph)?;
        println!("\n{} ({} steps)", algorithm, sequence.len());
        for (idx, step) in sequence.iter().enumerate() {
            println!(
                "  [{}] {} {} = [{}]",
                idx + 1,
                step.current_node,
                algorithm.frontier_label(),
                step.frontier_display()
            );
        }
    }

    // Same nodes, wrong order: rejected for BFS, accepted for A*
    let bfs = generate_sequence(Algorithm::Bfs, &graph)?;
    let result = grade_submission(Algorithm::Bfs, bfs.step(0)?, "a", "c, b");
    println!("\nBFS step 1 with \"c, b\": {}", result.feedback());

    let astar = generate_sequence(Algorithm::AStar, &graph)?;
    let result = grade_submission(Algorithm::AStar, astar.step(1)?, "C", "G, B, F");
    println!("A* step 2 with \"G, B, F\": {}", result.feedback());

    Ok(())
}
