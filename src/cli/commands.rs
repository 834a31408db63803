//! CLI command implementations.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::engine::{
    grade_submission, parse_frontier, Progress, QuizSession, SequenceEngine, SequenceParams,
};
use crate::graph::{heuristic_table, TreeGraph};
use crate::types::{
    join_nodes, Algorithm, NodeId, QuizError, QuizResult, Sequence, DEFAULT_GOAL, LEVEL_COUNT,
};

/// Print the default tree's nodes and adjacency lists.
pub fn cmd_graph(json: bool) -> QuizResult<()> {
    let graph = TreeGraph::default_tree();

    if json {
        let adjacency: serde_json::Map<String, serde_json::Value> = graph
            .nodes()
            .iter()
            .map(|&n| (n.to_string(), serde_json::json!(graph.neighbors(n))))
            .collect();
        let info = serde_json::json!({
            "root": graph.root(),
            "nodes": graph.nodes(),
            "edges": graph.edges(),
            "adjacency": adjacency,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Root: {}", graph.root());
        println!("Nodes: {}", join_nodes(graph.nodes()));
        println!("Edges: {}", graph.edge_count());
        for &node in graph.nodes() {
            let depth = graph.depth_of(node).unwrap_or(0);
            println!(
                "  [depth {}] {} -> {}",
                depth,
                node,
                join_nodes(graph.neighbors(node))
            );
        }
    }
    Ok(())
}

/// Print the canonical sequence for one algorithm.
pub fn cmd_sequence(algorithm: Algorithm, goal: NodeId, json: bool) -> QuizResult<()> {
    let graph = TreeGraph::default_tree();
    let sequence = SequenceEngine::new().generate(
        &graph,
        SequenceParams {
            algorithm,
            start: graph.root(),
            goal,
        },
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&sequence)?);
    } else {
        print_sequence(&sequence);
    }
    Ok(())
}

fn print_sequence(sequence: &Sequence) {
    let algorithm = sequence.algorithm;
    println!(
        "Level {}: {} ({} steps)",
        algorithm.level(),
        algorithm.display_name(),
        sequence.len()
    );
    for (idx, step) in sequence.iter().enumerate() {
        println!(
            "  Step {}: Node = {} | {} = [{}] | Visited = {}",
            idx + 1,
            step.current_node,
            algorithm.frontier_label(),
            step.frontier_display(),
            join_nodes(&step.visited)
        );
    }
}

/// Print h(n) for every node of the default tree.
pub fn cmd_heuristic(goal: NodeId, json: bool) -> QuizResult<()> {
    let graph = TreeGraph::default_tree();
    graph.require(goal)?;
    let table = heuristic_table(&graph, goal);

    if json {
        let values: serde_json::Map<String, serde_json::Value> = table
            .iter()
            .map(|(n, h)| (n.to_string(), serde_json::json!(h)))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({"goal": goal, "h": values}))?
        );
    } else {
        println!("Heuristic: hop distance to goal {}", goal);
        for (node, h) in &table {
            match h {
                Some(h) => println!("  h({}) = {}", node, h),
                None => println!("  h({}) = unreachable", node),
            }
        }
    }
    Ok(())
}

/// Grade one answer against a step of the canonical sequence.
pub fn cmd_grade(
    algorithm: Algorithm,
    step_number: usize,
    current: &str,
    frontier: &str,
    json: bool,
) -> QuizResult<()> {
    let graph = TreeGraph::default_tree();
    let sequence = SequenceEngine::new().generate(
        &graph,
        SequenceParams::for_graph(algorithm, &graph),
    )?;
    // Steps are numbered from 1 on the command line
    let index = step_number.checked_sub(1).ok_or(QuizError::StepOutOfRange {
        index: 0,
        len: sequence.len(),
    })?;
    let step = sequence.step(index)?;
    let result = grade_submission(algorithm, step, current, frontier);

    if json {
        let info = serde_json::json!({
            "algorithm": algorithm.name(),
            "step": step_number,
            "correct": result.is_correct(),
            "grade": result,
            "feedback": result.feedback(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", result.feedback());
        println!(
            "  Current node: {}",
            if result.current_correct { "ok" } else { "wrong" }
        );
        println!(
            "  {}: {}",
            algorithm.frontier_label(),
            if result.frontier_correct { "ok" } else { "wrong" }
        );
    }
    Ok(())
}

/// Write every algorithm's canonical sequence as JSON.
pub fn cmd_export(path: &Path, goal: NodeId, pretty: bool) -> QuizResult<()> {
    let graph = TreeGraph::default_tree();
    let sequences = SequenceEngine::new().generate_all(&graph, goal)?;

    let json = if pretty {
        serde_json::to_string_pretty(&sequences)?
    } else {
        serde_json::to_string(&sequences)?
    };
    std::fs::write(path, json)?;
    log::debug!("exported {} sequences to {}", sequences.len(), path.display());
    println!("Exported {} sequences to {}", sequences.len(), path.display());
    Ok(())
}

/// Play the quiz on stdin/stdout starting at `level`.
pub fn cmd_play(level: u8) -> QuizResult<()> {
    let mut session = QuizSession::with_graph(TreeGraph::default_tree(), DEFAULT_GOAL, level)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_quiz(&mut session, stdin.lock(), &mut stdout)
}

fn read_answer<R: BufRead>(input: &mut R) -> QuizResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Drive a session from line-oriented input: one line for the current node,
/// one for the comma-separated frontier. Stops at end of input or on `:quit`.
pub fn run_quiz<R: BufRead, W: Write>(
    session: &mut QuizSession,
    mut input: R,
    output: &mut W,
) -> QuizResult<()> {
    let mut announce_level = true;

    while !session.is_finished() {
        let algorithm = session.algorithm();
        if announce_level {
            writeln!(
                output,
                "== Level {} of {}: {} ==",
                session.level(),
                LEVEL_COUNT,
                algorithm.display_name()
            )?;
            if let Some(hints) = session.heuristic_hints() {
                let line: Vec<String> = hints
                    .iter()
                    .map(|(n, h)| match h {
                        Some(h) => format!("h({})={}", n, h),
                        None => format!("h({})=unreachable", n),
                    })
                    .collect();
                writeln!(output, "Heuristic values: {}", line.join(", "))?;
            }
            announce_level = false;
        }

        writeln!(
            output,
            "Step {} of {}",
            session.step_index() + 1,
            session.total_steps()
        )?;
        write!(output, "Current node: ")?;
        output.flush()?;
        let Some(current) = read_answer(&mut input)? else {
            break;
        };
        if current.trim() == ":quit" {
            break;
        }

        write!(output, "{} (comma-separated): ", algorithm.frontier_label())?;
        output.flush()?;
        let Some(frontier) = read_answer(&mut input)? else {
            break;
        };

        let submission = session.submit(&current, &frontier)?;
        if !submission.grade.is_correct() {
            writeln!(
                output,
                "Your answer: Node = {}, {} = [{}]",
                crate::engine::normalize_label(&current),
                algorithm.frontier_label(),
                parse_frontier(&frontier).join(", ")
            )?;
        }
        writeln!(output, "{}", submission.grade.feedback())?;
        if matches!(
            submission.progress,
            Progress::LevelComplete { .. } | Progress::GameComplete
        ) {
            writeln!(output, "{}", submission.message())?;
            announce_level = true;
        }
    }

    writeln!(output, "Wrong answers: {}", session.wrong_answers())?;
    Ok(())
}
