//! High-level operations — sequence generation, grading and the quiz session.

pub mod grade;
pub mod quiz;
pub mod sequence;

pub use grade::{
    grade, grade_submission, normalize_label, parse_frontier, GradeResult, ORDER_MISMATCH_NOTE,
};
pub use quiz::{AnswerRecord, Progress, QuizSession, Submission};
pub use sequence::{generate_sequence, SequenceEngine, SequenceParams};
