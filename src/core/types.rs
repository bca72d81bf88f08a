use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Signal {
    /// A `-` component equals a legitimate domain but the whole label does not.
    SubcomponentExactMatch { domain: String, score: f64 },
    /// Legitimate domain label on a suffix it does not use.
    ForeignSuffix { domain: String, suffix: String },
    SimilarDomain { domain: String, score: f64 },
    DomainKeyword { domain: String, keyword: String },
    SensitivePath { segment: String, score: f64 },
    SensitiveQuery { name: String, score: f64 },
}

impl Signal {
    pub fn describe(&self) -> String {
        match self {
            Signal::SubcomponentExactMatch { domain, .. } => {
                format!("domain component of '{}' matches a legitimate domain", domain)
            }
            Signal::ForeignSuffix { domain, suffix } => {
                format!("'{}' served from unlisted suffix '{}'", domain, suffix)
            }
            Signal::SimilarDomain { domain, score } => {
                format!("domain '{}' resembles a legitimate domain ({:.3})", domain, score)
            }
            Signal::DomainKeyword { domain, keyword } => {
                format!("domain '{}' contains keyword '{}'", domain, keyword)
            }
            Signal::SensitivePath { segment, score } => {
                format!("path segment '{}' looks sensitive ({:.3})", segment, score)
            }
            Signal::SensitiveQuery { name, score } => {
                format!("query parameter '{}' looks sensitive ({:.3})", name, score)
            }
        }
    }
}

/// Outcome of running the detector on one URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verdict {
    pub scam: bool,
    pub domain: String,
    pub suffix: String,
    pub domain_score: f64,
    #[serde(default)]
    pub signals: Vec<Signal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationReport {
    pub generated_at: DateTime<Utc>,
    pub config_hash: String,
    pub legit_total: usize,
    pub scam_total: usize,
    /// Legitimate URLs flagged as scams.
    pub false_positives: Vec<String>,
    /// Scam URLs that passed as legitimate.
    pub false_negatives: Vec<String>,
}

impl EvaluationReport {
    pub fn mismatches(&self) -> usize {
        self.false_positives.len() + self.false_negatives.len()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
