use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::core::types::{EvaluationReport, OutputFormat, Verdict};

pub fn render_report(report: &EvaluationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn write_report(report: &EvaluationReport, format: OutputFormat, path: &Path) -> Result<()> {
    let rendered = render_report(report, format)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, rendered)?;
    Ok(())
}

fn render_text(report: &EvaluationReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "False positive count: {}\n",
        report.false_positives.len()
    ));
    for url in &report.false_positives {
        out.push_str(&format!("- {}\n", url));
    }
    out.push_str(&format!(
        "False negative count: {}\n",
        report.false_negatives.len()
    ));
    for url in &report.false_negatives {
        out.push_str(&format!("- {}\n", url));
    }
    out
}

pub fn render_verdicts(verdicts: &[(String, Verdict)], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (url, verdict) in verdicts {
                let label = if verdict.scam { "SCAM" } else { "ok" };
                out.push_str(&format!(
                    "{:<4} {} (domain '{}', suffix '{}', score {:.3})\n",
                    label, url, verdict.domain, verdict.suffix, verdict.domain_score
                ));
                for signal in &verdict.signals {
                    out.push_str(&format!("     - {}\n", signal.describe()));
                }
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let records: Vec<serde_json::Value> = verdicts
                .iter()
                .map(|(url, verdict)| {
                    serde_json::json!({
                        "url": url,
                        "verdict": verdict,
                    })
                })
                .collect();
            let mut json = serde_json::to_string_pretty(&records)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::core::types::Signal;

    fn report() -> EvaluationReport {
        EvaluationReport {
            generated_at: Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
            config_hash: "abc".into(),
            legit_total: 3,
            scam_total: 2,
            false_positives: vec!["https://paypa1.com/".into()],
            false_negatives: vec![],
        }
    }

    #[test]
    fn text_matches_classic_layout() {
        let text = render_report(&report(), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "False positive count: 1\n- https://paypa1.com/\nFalse negative count: 0\n"
        );
    }

    #[test]
    fn json_round_trips() {
        let json = render_report(&report(), OutputFormat::Json).unwrap();
        let parsed: EvaluationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report());
    }

    #[test]
    fn writes_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/report.json");
        write_report(&report(), OutputFormat::Json, &path).unwrap();
        assert!(fs::read_to_string(path).unwrap().contains("\"legit_total\": 3"));
    }

    #[test]
    fn verdict_text_lists_signals() {
        let verdict = Verdict {
            scam: true,
            domain: "paypa1".into(),
            suffix: "com".into(),
            domain_score: 5.0 / 6.0,
            signals: vec![Signal::SimilarDomain {
                domain: "paypa1".into(),
                score: 5.0 / 6.0,
            }],
        };
        let text =
            render_verdicts(&[("https://paypa1.com/".into(), verdict)], OutputFormat::Text)
                .unwrap();
        assert!(text.starts_with("SCAM https://paypa1.com/"));
        assert!(text.contains("resembles a legitimate domain (0.833)"));
    }
}
