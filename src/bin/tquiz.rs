//! CLI entry point for the `tquiz` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use traversal_quiz::cli::commands;
use traversal_quiz::types::{Algorithm, NodeId, QuizError, DEFAULT_GOAL};

#[derive(Parser)]
#[command(
    name = "tquiz",
    about = "Traversal quiz — reproduce BFS, DFS, Greedy and A* step by step"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the tree the quiz is played on
    Graph,
    /// Print the canonical step sequence for an algorithm
    Sequence {
        /// Algorithm: bfs, dfs, greedy, astar
        algorithm: String,
        /// Goal node for greedy and astar
        #[arg(long)]
        goal: Option<String>,
    },
    /// Print heuristic values (hop distance to the goal)
    Heuristic {
        /// Goal node
        #[arg(long)]
        goal: Option<String>,
    },
    /// Grade one answer against a canonical step
    Grade {
        /// Algorithm: bfs, dfs, greedy, astar
        algorithm: String,
        /// Step number, starting at 1
        step: usize,
        /// Proposed current node
        current: String,
        /// Proposed frontier, comma-separated
        frontier: String,
    },
    /// Export every canonical sequence as JSON
    Export {
        /// Path to the JSON file to write
        file: PathBuf,
        /// Goal node for greedy and astar
        #[arg(long)]
        goal: Option<String>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Play the quiz interactively on stdin
    Play {
        /// Level to start at (1 BFS, 2 DFS, 3 Greedy, 4 A*)
        #[arg(long, default_value = "1")]
        level: u8,
    },
}

fn parse_algorithm(name: &str) -> Algorithm {
    match Algorithm::from_name(name) {
        Ok(algorithm) => algorithm,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(3);
        }
    }
}

fn parse_goal(goal: Option<String>) -> NodeId {
    match goal {
        None => DEFAULT_GOAL,
        Some(label) => match label.parse::<NodeId>() {
            Ok(node) => node,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(3);
            }
        },
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .parse_default_env()
            .init();
    }

    let result = match cli.command {
        Commands::Graph => commands::cmd_graph(json),
        Commands::Sequence { algorithm, goal } => {
            commands::cmd_sequence(parse_algorithm(&algorithm), parse_goal(goal), json)
        }
        Commands::Heuristic { goal } => commands::cmd_heuristic(parse_goal(goal), json),
        Commands::Grade {
            algorithm,
            step,
            current,
            frontier,
        } => commands::cmd_grade(parse_algorithm(&algorithm), step, &current, &frontier, json),
        Commands::Export { file, goal, pretty } => {
            commands::cmd_export(&file, parse_goal(goal), pretty)
        }
        Commands::Play { level } => commands::cmd_play(level),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            QuizError::Io(_) => 1,
            QuizError::UnknownAlgorithm(_)
            | QuizError::LevelOutOfRange(_)
            | QuizError::NodeNotFound(_)
            | QuizError::InvalidLabel(_) => 3,
            QuizError::StepOutOfRange { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
