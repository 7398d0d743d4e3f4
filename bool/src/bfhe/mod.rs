//! Gate evaluation: the evaluation key bundle and the evaluator built on it.

mod evaluate;

pub use evaluate::{EvaluationKey, Evaluator};
