//! Quiz session: level progression, answer history and wrong-answer count.
//!
//! The session is plain application state. It regenerates the canonical
//! sequence on every level change and grades one submission at a time.
//! Rendering and timers belong to whoever drives it.

use serde::Serialize;

use crate::graph::{heuristic_table, path_costs, TreeGraph};
use crate::types::{
    now_micros, Algorithm, NodeId, QuizError, QuizResult, Sequence, StepRecord, DEFAULT_GOAL,
    LEVEL_COUNT,
};

use super::grade::{grade, normalize_label, parse_frontier, GradeResult};
use super::sequence::{SequenceEngine, SequenceParams};

/// One graded submission, kept for the current level's history.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerRecord {
    /// Level the answer was given on.
    pub level: u8,
    /// Zero-based step index.
    pub step: usize,
    /// Normalized current node as typed.
    pub student_current: String,
    /// Normalized frontier as typed.
    pub student_frontier: Vec<String>,
    /// Canonical current node.
    pub correct_current: NodeId,
    /// Canonical frontier.
    pub correct_frontier: Vec<NodeId>,
    /// Whether the answer was accepted.
    pub is_correct: bool,
    /// When the answer was submitted (Unix epoch microseconds).
    pub submitted_at: u64,
}

/// What happened to the session after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Wrong answer; stay on the same step.
    Retry,
    /// Moved to the given step of the same level.
    NextStep(usize),
    /// Finished a level and moved to the next one.
    LevelComplete { completed: Algorithm, next: Algorithm },
    /// Finished the last level.
    GameComplete,
}

/// Result of [`QuizSession::submit`].
#[derive(Debug, Clone)]
pub struct Submission {
    /// How the answer was graded.
    pub grade: GradeResult,
    /// Where the session moved.
    pub progress: Progress,
}

impl Submission {
    /// Message for the learner, including level transitions.
    pub fn message(&self) -> String {
        match self.progress {
            Progress::Retry | Progress::NextStep(_) => self.grade.feedback(),
            Progress::LevelComplete { completed, next } => format!(
                "Level {} ({}) Completed! Moving to Level {} ({})...",
                completed.level(),
                completed.display_name(),
                next.level(),
                next.display_name()
            ),
            Progress::GameComplete => {
                format!("Congratulations! You completed all {} levels!", LEVEL_COUNT)
            }
        }
    }
}

/// State of one play-through of the four levels.
pub struct QuizSession {
    graph: TreeGraph,
    goal: NodeId,
    level: u8,
    step: usize,
    sequence: Sequence,
    history: Vec<AnswerRecord>,
    wrong_answers: u32,
    finished: bool,
}

impl QuizSession {
    /// Start at level 1 on the default tree.
    pub fn new() -> QuizResult<Self> {
        Self::with_graph(TreeGraph::default_tree(), DEFAULT_GOAL, 1)
    }

    /// Start at `level` on a given tree and goal.
    pub fn with_graph(graph: TreeGraph, goal: NodeId, level: u8) -> QuizResult<Self> {
        let algorithm = Algorithm::from_level(level)?;
        graph.require(goal)?;
        let sequence = Self::build_sequence(&graph, goal, algorithm)?;
        Ok(Self {
            graph,
            goal,
            level,
            step: 0,
            sequence,
            history: Vec::new(),
            wrong_answers: 0,
            finished: false,
        })
    }

    fn build_sequence(
        graph: &TreeGraph,
        goal: NodeId,
        algorithm: Algorithm,
    ) -> QuizResult<Sequence> {
        SequenceEngine::new().generate(
            graph,
            SequenceParams {
                algorithm,
                start: graph.root(),
                goal,
            },
        )
    }

    fn load_level(&mut self, level: u8) -> QuizResult<()> {
        let algorithm = Algorithm::from_level(level)?;
        self.sequence = Self::build_sequence(&self.graph, self.goal, algorithm)?;
        self.level = level;
        self.step = 0;
        self.history.clear();
        log::debug!(
            "loaded level {} ({}), {} steps",
            level,
            algorithm,
            self.sequence.len()
        );
        Ok(())
    }

    /// Current level (1-based).
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Algorithm of the current level.
    pub fn algorithm(&self) -> Algorithm {
        self.sequence.algorithm
    }

    /// Zero-based index of the step being asked.
    pub fn step_index(&self) -> usize {
        self.step
    }

    /// Number of steps in the current level.
    pub fn total_steps(&self) -> usize {
        self.sequence.len()
    }

    /// Canonical record for the step being asked.
    pub fn current_step(&self) -> QuizResult<&StepRecord> {
        self.sequence.step(self.step)
    }

    /// Canonical sequence of the current level.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// The tree being played on.
    pub fn graph(&self) -> &TreeGraph {
        &self.graph
    }

    /// Answers given on the current level, oldest first.
    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    /// Wrong answers across all levels since the last reset.
    pub fn wrong_answers(&self) -> u32 {
        self.wrong_answers
    }

    /// True once the final level is complete.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// h(n) for every node on informed levels, None otherwise.
    pub fn heuristic_hints(&self) -> Option<Vec<(NodeId, Option<u32>)>> {
        self.algorithm()
            .is_informed()
            .then(|| heuristic_table(&self.graph, self.goal))
    }

    /// g(n) for every node on the A* level, None otherwise.
    pub fn path_cost_hints(&self) -> Option<Vec<(NodeId, Option<u32>)>> {
        (self.algorithm() == Algorithm::AStar).then(|| path_costs(&self.graph, self.graph.root()))
    }

    /// Grade one submission and advance on success.
    pub fn submit(&mut self, current: &str, frontier_text: &str) -> QuizResult<Submission> {
        if self.finished {
            return Err(QuizError::SessionFinished);
        }

        let algorithm = self.algorithm();
        let canonical = self.sequence.step(self.step)?.clone();
        let proposed = parse_frontier(frontier_text);
        let result = grade(algorithm, &canonical, current, &proposed);

        self.history.push(AnswerRecord {
            level: self.level,
            step: self.step,
            student_current: normalize_label(current),
            student_frontier: proposed,
            correct_current: canonical.current_node,
            correct_frontier: canonical.frontier,
            is_correct: result.is_correct(),
            submitted_at: now_micros(),
        });

        let progress = if !result.is_correct() {
            self.wrong_answers += 1;
            Progress::Retry
        } else if self.step + 1 < self.sequence.len() {
            self.step += 1;
            Progress::NextStep(self.step)
        } else if self.level < LEVEL_COUNT {
            self.load_level(self.level + 1)?;
            Progress::LevelComplete {
                completed: algorithm,
                next: self.algorithm(),
            }
        } else {
            self.finished = true;
            Progress::GameComplete
        };

        log::debug!(
            "level {} step {}: correct={} -> {:?}",
            self.level,
            self.step,
            result.is_correct(),
            progress
        );

        Ok(Submission {
            grade: result,
            progress,
        })
    }

    /// Jump to a level, keeping the wrong-answer count.
    pub fn jump_to_level(&mut self, level: u8) -> QuizResult<()> {
        self.load_level(level)?;
        self.finished = false;
        Ok(())
    }

    /// Jump to a step of the current level.
    pub fn jump_to_step(&mut self, index: usize) -> QuizResult<()> {
        self.sequence.step(index)?;
        self.step = index;
        Ok(())
    }

    /// Back to level 1 with a clean slate.
    pub fn reset(&mut self) -> QuizResult<()> {
        self.load_level(1)?;
        self.wrong_answers = 0;
        self.finished = false;
        Ok(())
    }
}
