use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// Vetted literals; compiled once.
#[allow(clippy::unwrap_used)]
static JWT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\b").unwrap()
});

#[allow(clippy::unwrap_used)]
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
});

#[allow(clippy::unwrap_used)]
static OPAQUE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9+/_$-]{24,}={0,2}").unwrap());

/// Mask PII in a log string.
///
/// - Signed tokens (three dot-separated segments) become `[REDACTED_JWT]`
/// - Emails keep the first character of the local part and the domain
/// - Other long opaque runs (hash digests, secrets) become `[REDACTED_TOKEN]`
pub fn redact(input: &str) -> String {
    let no_jwt = JWT.replace_all(input, "[REDACTED_JWT]");

    let no_email = EMAIL.replace_all(&no_jwt, |caps: &regex::Captures| {
        let full = &caps[0];
        match full.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => format!("{first}***@{domain}"),
                None => format!("@{domain}"),
            },
            None => full.to_string(),
        }
    });

    OPAQUE_TOKEN
        .replace_all(&no_email, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Display wrapper that redacts on format, for use in tracing fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
