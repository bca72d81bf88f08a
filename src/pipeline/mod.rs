pub mod evaluator;
pub mod reporter;
