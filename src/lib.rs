pub mod cli;
pub mod config;
pub mod core;
pub mod detectors;
pub mod pipeline;

pub use crate::config::{load_config, Config};
pub use crate::core::distance::distance;
pub use crate::core::error::{ConfigValidationError, SquatError};
pub use crate::core::matcher::best_match;
pub use crate::core::url::ParsedUrl;
pub use crate::detectors::typosquat::{is_scam, TyposquatDetector};
pub use crate::pipeline::evaluator::{assess, evaluate_batches};
