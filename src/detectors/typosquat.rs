use tracing::{debug, trace};

use crate::config::Config;
use crate::core::error::SquatError;
use crate::core::matcher::{best_match, best_match_iter};
use crate::core::resolver::{DomainResolver, PslResolver, Resolved};
use crate::core::types::{Signal, Verdict};
use crate::core::url::ParsedUrl;
use crate::detectors::Detector;

/// Scores a URL against the legitimate domains, paths and query names of a
/// [`Config`].
///
/// The domain checks short-circuit: an exact match settles the verdict on the
/// suffix alone, and a domain above `domain_threshold` is a scam outright.
/// Keyword, path and query checks accumulate instead, so every segment and
/// parameter name is scored even once the URL is already suspicious.
pub struct TyposquatDetector<'a, R = PslResolver> {
    config: &'a Config,
    resolver: R,
}

impl<'a> TyposquatDetector<'a, PslResolver> {
    pub fn new(config: &'a Config) -> Self {
        Self::with_resolver(config, PslResolver::new())
    }
}

impl<'a, R: DomainResolver> TyposquatDetector<'a, R> {
    pub fn with_resolver(config: &'a Config, resolver: R) -> Self {
        Self { config, resolver }
    }
}

impl<R: DomainResolver> Detector for TyposquatDetector<'_, R> {
    fn name(&self) -> &'static str {
        "typosquat"
    }

    fn assess(&self, url: &ParsedUrl) -> Verdict {
        let cfg = self.config;
        let Resolved { domain, suffix } = self.resolver.resolve(&url.host());
        let check = best_match_iter(&domain, cfg.domain.keys().map(String::as_str), true);

        let mut signals = Vec::new();

        if check == 1.0 {
            match cfg.domain.get(&domain) {
                None => signals.push(Signal::SubcomponentExactMatch {
                    domain: domain.clone(),
                    score: check,
                }),
                Some(accepted) if !accepted.contains(&suffix) => {
                    signals.push(Signal::ForeignSuffix {
                        domain: domain.clone(),
                        suffix: suffix.clone(),
                    })
                }
                Some(_) => {}
            }
            return finish(domain, suffix, check, signals);
        }

        if check > cfg.domain_threshold {
            signals.push(Signal::SimilarDomain {
                domain: domain.clone(),
                score: check,
            });
            return finish(domain, suffix, check, signals);
        }

        if check > cfg.domain_keywords_threshold {
            for keyword in cfg.domain_keywords.iter() {
                if domain.contains(keyword.as_str()) {
                    signals.push(Signal::DomainKeyword {
                        domain: domain.clone(),
                        keyword: keyword.clone(),
                    });
                }
            }
        }

        for segment in url.path_segments() {
            let score = best_match(segment, &cfg.path, cfg.path_split);
            if score > cfg.path_threshold {
                signals.push(Signal::SensitivePath {
                    segment: segment.to_string(),
                    score,
                });
            }
        }

        for name in url.query_names() {
            let score = best_match(&name, &cfg.query, cfg.query_split);
            if score > cfg.query_threshold {
                signals.push(Signal::SensitiveQuery { name, score });
            }
        }

        finish(domain, suffix, check, signals)
    }
}

fn finish(domain: String, suffix: String, domain_score: f64, signals: Vec<Signal>) -> Verdict {
    for signal in signals.iter() {
        trace!("signal: {}", signal.describe());
    }
    let scam = !signals.is_empty();
    debug!(
        "verdict domain={} suffix={} score={:.3} scam={} signals={}",
        domain,
        suffix,
        domain_score,
        scam,
        signals.len()
    );
    Verdict {
        scam,
        domain,
        suffix,
        domain_score,
        signals,
    }
}

/// Whether `parsed` is flagged, optionally validating `config` first.
pub fn is_scam(
    config: &Config,
    parsed: &ParsedUrl,
    validate_config: bool,
) -> Result<bool, SquatError> {
    if validate_config {
        config.validate()?;
    }
    Ok(TyposquatDetector::new(config).is_scam(parsed))
}
