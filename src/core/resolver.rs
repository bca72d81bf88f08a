//! Registrable domain and public suffix extraction.
//!
//! `login.paypa1.co.uk` resolves to domain `paypa1` and suffix `co.uk`. The
//! verdict engine only sees the [`DomainResolver`] trait, so the list backing
//! it can be swapped out in tests.

use std::net::IpAddr;

use psl::Type;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolved {
    /// Label directly below the public suffix, `""` if there is none.
    pub domain: String,
    /// Public suffix, `""` when the host has no known suffix.
    pub suffix: String,
}

impl Resolved {
    pub fn new(domain: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            suffix: suffix.into(),
        }
    }
}

pub trait DomainResolver {
    fn resolve(&self, host: &str) -> Resolved;
}

/// Resolver backed by the Public Suffix List compiled into `psl`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PslResolver {
    include_private: bool,
}

impl PslResolver {
    /// ICANN section only: `user.github.io` resolves to `github` / `io`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat private entries such as `github.io` as suffixes too.
    pub fn with_private_domains() -> Self {
        Self {
            include_private: true,
        }
    }

    fn suffix_len(&self, host: &str) -> usize {
        let mut candidate = host;
        loop {
            let Some(suffix) = psl::suffix(candidate.as_bytes()) else {
                return 0;
            };
            if !suffix.is_known() {
                return 0;
            }
            let len = suffix.as_bytes().len();
            if self.include_private || !matches!(suffix.typ(), Some(Type::Private)) {
                return len;
            }
            // step down to the ICANN suffix underneath the private entry
            let private = &candidate[candidate.len() - len..];
            match private.split_once('.') {
                Some((_, rest)) => candidate = rest,
                None => return 0,
            }
        }
    }
}

impl DomainResolver for PslResolver {
    fn resolve(&self, host: &str) -> Resolved {
        let host = host.trim().trim_end_matches('.').to_lowercase();
        if host.is_empty() {
            return Resolved::default();
        }
        let bare = host.trim_start_matches('[').trim_end_matches(']');
        if bare.parse::<IpAddr>().is_ok() {
            return Resolved::new(host, "");
        }

        let suffix_len = self.suffix_len(&host);
        if suffix_len == 0 {
            let domain = host.rsplit('.').next().unwrap_or_default();
            return Resolved::new(domain, "");
        }
        if suffix_len >= host.len() {
            return Resolved::new("", host);
        }

        let suffix = &host[host.len() - suffix_len..];
        let rest = host[..host.len() - suffix_len].trim_end_matches('.');
        let domain = rest.rsplit('.').next().unwrap_or_default();
        Resolved::new(domain, suffix)
    }
}
