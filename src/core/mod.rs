//! Similarity scoring and URL plumbing shared by the detectors.

pub mod distance;
pub mod error;
pub mod hash;
pub mod matcher;
pub mod resolver;
pub mod time;
pub mod types;
pub mod url;
