use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::cli::flags::{Cli, Command};
use crate::config::{load_config, Config};
use crate::core::types::{EvaluationReport, OutputFormat, Verdict};
use crate::core::url::ParsedUrl;
use crate::detectors::typosquat::TyposquatDetector;
use crate::detectors::Detector;
use crate::pipeline::evaluator::{evaluate_batches, read_batch};
use crate::pipeline::reporter::{render_report, render_verdicts, write_report};

pub fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Evaluate {
            config,
            legit,
            scam,
            format,
            output,
            fail_on_mismatch,
        } => {
            let cfg = load(&config)?;
            let report = run_evaluate(&cfg, &legit, &scam)?;
            let format: OutputFormat = format.into();
            match output {
                Some(path) => {
                    write_report(&report, format, &path)
                        .with_context(|| format!("writing report to {}", path.display()))?;
                    tracing::info!("report written to {}", path.display());
                }
                None => print!("{}", render_report(&report, format)?),
            }
            if fail_on_mismatch && report.mismatches() > 0 {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            config,
            urls,
            format,
        } => {
            let cfg = load(&config)?;
            let verdicts = run_check(&cfg, &urls)?;
            print!("{}", render_verdicts(&verdicts, format.into())?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load(path: &Path) -> Result<Config> {
    load_config(path).with_context(|| format!("loading config {}", path.display()))
}

pub fn run_evaluate(cfg: &Config, legit: &Path, scam: &Path) -> Result<EvaluationReport> {
    let legit_lines =
        read_batch(legit).with_context(|| format!("reading legit urls {}", legit.display()))?;
    let scam_lines =
        read_batch(scam).with_context(|| format!("reading scam urls {}", scam.display()))?;
    Ok(evaluate_batches(cfg, &legit_lines, &scam_lines)?)
}

pub fn run_check(cfg: &Config, urls: &[String]) -> Result<Vec<(String, Verdict)>> {
    let detector = TyposquatDetector::new(cfg);
    let mut out = Vec::with_capacity(urls.len());
    for raw in urls {
        let url = raw.trim();
        let parsed = ParsedUrl::parse(url)?;
        out.push((url.to_string(), detector.assess(&parsed)));
    }
    Ok(out)
}
