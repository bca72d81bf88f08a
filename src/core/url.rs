use url::form_urlencoded;

use crate::core::error::SquatError;

/// A URL split into its generic components without any normalization.
///
/// Splitting is permissive: anything without a `//` authority is treated as a
/// path, so `paypal.com/login` has an empty netloc. For schemes that carry
/// them, `;params` on the last path segment are split off the path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedUrl {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

impl ParsedUrl {
    pub fn parse(line: &str) -> Result<Self, SquatError> {
        let (rest, fragment) = match line.split_once('#') {
            Some((rest, fragment)) => (rest, fragment),
            None => (line, ""),
        };

        let (scheme, rest) = split_scheme(rest);

        let (netloc, rest) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find(&['/', '?'][..]).unwrap_or(after.len());
                after.split_at(end)
            }
            None => ("", rest),
        };

        if netloc.contains('[') != netloc.contains(']') {
            return Err(SquatError::MalformedUrl {
                line: line.to_string(),
                reason: "unbalanced brackets in network location".into(),
            });
        }

        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, query),
            None => (rest, ""),
        };

        let scheme = scheme.to_lowercase();
        let (path, params) = if PARAM_SCHEMES.contains(&scheme.as_str()) {
            split_params(path)
        } else {
            (path, "")
        };

        Ok(Self {
            scheme,
            netloc: netloc.to_string(),
            path: path.to_string(),
            params: params.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
        })
    }

    /// Lowercased host: the netloc without userinfo or port.
    pub fn host(&self) -> String {
        let hostport = match self.netloc.rsplit_once('@') {
            Some((_, hostport)) => hostport,
            None => self.netloc.as_str(),
        };
        let host = if hostport.starts_with('[') {
            match hostport.find(']') {
                Some(end) => &hostport[..=end],
                None => hostport,
            }
        } else {
            match hostport.rsplit_once(':') {
                Some((host, _port)) => host,
                None => hostport,
            }
        };
        host.to_lowercase()
    }

    /// Non-empty `/`-separated path segments, as written.
    pub fn path_segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }

    /// Decoded query parameter names that carry a non-empty value.
    ///
    /// Each name appears once, in first-seen order. Values are never returned.
    pub fn query_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for (name, value) in form_urlencoded::parse(self.query.as_bytes()) {
            if name.is_empty() || value.is_empty() {
                continue;
            }
            if !names.iter().any(|n| n.as_str() == name.as_ref()) {
                names.push(name.into_owned());
            }
        }
        names
    }
}

/// Schemes whose last path segment may carry `;params`.
const PARAM_SCHEMES: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// `;` only starts params in the last segment, or anywhere if there is no `/`.
fn split_params(path: &str) -> (&str, &str) {
    let start = match path.rfind('/') {
        Some(slash) => slash,
        None => 0,
    };
    match path[start..].find(';') {
        Some(i) => (&path[..start + i], &path[start + i + 1..]),
        None => (path, ""),
    }
}

fn split_scheme(input: &str) -> (&str, &str) {
    let Some((candidate, rest)) = input.split_once(':') else {
        return ("", input);
    };
    let mut chars = candidate.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if valid {
        (candidate, rest)
    } else {
        ("", input)
    }
}
