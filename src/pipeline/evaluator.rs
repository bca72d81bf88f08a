use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::core::error::SquatError;
use crate::core::time::now_utc;
use crate::core::types::EvaluationReport;
use crate::core::url::ParsedUrl;
use crate::detectors::typosquat::TyposquatDetector;
use crate::detectors::Detector;

/// Lines whose verdict disagrees with `target`, trimmed, in input order.
///
/// `target = true` collects false negatives from a scam batch, `false`
/// collects false positives from a legitimate one. The config is validated at
/// most once per batch.
pub fn assess<S: AsRef<str>>(
    config: &Config,
    lines: &[S],
    target: bool,
    validate_config: bool,
) -> Result<Vec<String>, SquatError> {
    if validate_config {
        config.validate()?;
    }
    let detector = TyposquatDetector::new(config);
    assess_with(&detector, lines, target)
}

pub fn assess_with<D: Detector, S: AsRef<str>>(
    detector: &D,
    lines: &[S],
    target: bool,
) -> Result<Vec<String>, SquatError> {
    let mut wrong = Vec::new();
    for line in lines {
        let line = line.as_ref().trim();
        let parsed = ParsedUrl::parse(line)?;
        let detected = detector.is_scam(&parsed);
        if detected != target {
            debug!(
                "{} mismatch: expected {} got {} for {}",
                detector.name(),
                target,
                detected,
                line
            );
            wrong.push(line.to_string());
        }
    }
    Ok(wrong)
}

/// Run the legitimate batch for false positives and the scam batch for false
/// negatives.
pub fn evaluate_batches<S: AsRef<str>>(
    config: &Config,
    legit: &[S],
    scam: &[S],
) -> Result<EvaluationReport, SquatError> {
    config.validate()?;
    let detector = TyposquatDetector::new(config);
    let false_positives = assess_with(&detector, legit, false)?;
    let false_negatives = assess_with(&detector, scam, true)?;
    info!(
        "evaluated {} legit / {} scam urls: {} false positives, {} false negatives",
        legit.len(),
        scam.len(),
        false_positives.len(),
        false_negatives.len()
    );
    Ok(EvaluationReport {
        generated_at: now_utc(),
        config_hash: config.fingerprint()?,
        legit_total: legit.len(),
        scam_total: scam.len(),
        false_positives,
        false_negatives,
    })
}

/// Read a URL batch file, one URL per line, skipping blank lines.
pub fn read_batch(path: &Path) -> Result<Vec<String>, SquatError> {
    let data = std::fs::read_to_string(path)?;
    let mut skipped = 0usize;
    let mut lines = Vec::new();
    for line in data.lines() {
        if line.trim().is_empty() {
            skipped += 1;
        } else {
            lines.push(line.to_string());
        }
    }
    debug!(
        "read {} urls from {} ({} blank lines skipped)",
        lines.len(),
        path.display(),
        skipped
    );
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn config() -> Config {
        let mut domain = BTreeMap::new();
        domain.insert("paypal".to_string(), vec!["com".to_string()]);
        domain.insert("amazon".to_string(), vec!["com".to_string(), "de".to_string()]);
        Config {
            domain,
            domain_threshold: 0.8,
            domain_keywords: vec!["secure".into()],
            domain_keywords_threshold: 0.5,
            path: vec!["login".into(), "signin".into()],
            path_threshold: 0.85,
            path_split: true,
            query: vec!["password".into()],
            query_threshold: 0.9,
            query_split: true,
        }
    }

    const URLS: &[&str] = &[
        "https://paypal.com/account",
        "  https://amazon.de/gp/cart \n",
        "https://paypa1.com/",
        "https://amazon.co.uk/",
        "https://example.org/signin",
        "https://example.org/blog",
    ];

    #[test]
    fn scam_target_returns_false_negatives_in_order() {
        let wrong = assess(&config(), URLS, true, true).unwrap();
        assert_eq!(
            wrong,
            vec![
                "https://paypal.com/account",
                "https://amazon.de/gp/cart",
                "https://example.org/blog",
            ]
        );
    }

    #[test]
    fn legit_target_returns_false_positives() {
        let wrong = assess(&config(), URLS, false, true).unwrap();
        assert_eq!(
            wrong,
            vec![
                "https://paypa1.com/",
                "https://amazon.co.uk/",
                "https://example.org/signin",
            ]
        );
    }

    #[test]
    fn both_targets_partition_the_batch() {
        let cfg = config();
        let mut all = assess(&cfg, URLS, true, false).unwrap();
        all.extend(assess(&cfg, URLS, false, false).unwrap());
        assert_eq!(all.len(), URLS.len());
    }

    #[test]
    fn invalid_config_fails_before_any_line() {
        let mut cfg = config();
        cfg.domain.clear();
        let err = assess(&cfg, URLS, true, true).unwrap_err();
        assert!(matches!(err, SquatError::Validation(_)));
    }

    #[test]
    fn malformed_line_is_fatal() {
        let lines = ["https://paypal.com/", "http://[::1/login"];
        let err = assess(&config(), &lines, false, true).unwrap_err();
        assert!(matches!(err, SquatError::MalformedUrl { .. }));
    }

    #[test]
    fn empty_batch_has_no_mismatches() {
        let empty: [&str; 0] = [];
        assert!(assess(&config(), &empty, true, true).unwrap().is_empty());
    }

    #[test]
    fn report_counts_both_batches() {
        let legit = ["https://paypal.com/", "https://paypa1.com/"];
        let scam = ["https://paypal.ru/", "https://example.org/"];
        let report = evaluate_batches(&config(), &legit, &scam).unwrap();
        assert_eq!(report.legit_total, 2);
        assert_eq!(report.scam_total, 2);
        assert_eq!(report.false_positives, vec!["https://paypa1.com/"]);
        assert_eq!(report.false_negatives, vec!["https://example.org/"]);
        assert_eq!(report.mismatches(), 2);
        assert_eq!(report.config_hash, config().fingerprint().unwrap());
    }
}
