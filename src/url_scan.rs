use aho_corasick::AhoCorasick;
use anyhow::{Context, Result};
use url::{Host, Url};

/// Lexical view of a submitted URL.
///
/// Produced for every input string. When the URL does not parse, the
/// host-derived fields stay empty so host-based rules see nothing.
#[derive(Debug, Clone, Default)]
pub struct UrlScan {
    /// Input after defanging, trimming and scheme defaulting.
    pub normalized: String,
    pub https: bool,
    pub parsed: bool,
    pub host: Option<String>,
    /// Host with punycode labels decoded, as a user would read it.
    pub host_unicode: Option<String>,
    pub ip_literal: bool,
    /// Explicit port, if it differs from the scheme default.
    pub port: Option<u16>,
    pub query: Option<String>,
    pub subdomain_count: usize,
}

/// Second-level labels that sit under a ccTLD as part of the public suffix
/// (`example.co.uk`, `example.com.au`).
static SECOND_LEVEL_SUFFIXES: &[&str] = &["co", "com", "net", "org", "gov", "edu", "ac"];

/// Case-insensitive multi-substring matcher.
#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    ac: AhoCorasick,
}

impl SubstringMatcher {
    pub fn new<I, P>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        // An empty pattern would match every input.
        let pats: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        let ac = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&pats)
            .context("failed to compile substring patterns")?;
        Ok(Self { ac })
    }

    pub(crate) fn builtin(patterns: &[&str]) -> Self {
        Self::new(patterns).expect("built-in patterns must compile")
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.ac.is_match(haystack)
    }
}

/// Domains matched against a host on label boundaries: `bit.ly` matches
/// `bit.ly` and `www.bit.ly`, never `notbit.ly` or `bit.ly.evil.com`.
#[derive(Debug, Clone, Default)]
pub struct DomainList {
    domains: Vec<String>,
}

impl DomainList {
    pub fn new<I, P>(domains: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .map(|d| d.as_ref().trim().trim_matches('.').to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        Self { domains }
    }

    pub fn matches_host(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        self.domains.iter().any(|d| {
            host == *d
                || host
                    .strip_suffix(d.as_str())
                    .is_some_and(|rest| rest.ends_with('.'))
        })
    }
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .map(|p| p.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}

/// Undo defanging, trim, and default to `http://` when no web scheme is given.
pub fn normalize(raw: &str) -> String {
    let cleaned = raw.replace("[.]", ".");
    let cleaned = cleaned.trim();
    if has_prefix_ignore_case(cleaned, "http://") || has_prefix_ignore_case(cleaned, "https://") {
        cleaned.to_string()
    } else {
        format!("http://{cleaned}")
    }
}

/// The part of a normalized URL after `http://` or `https://`.
pub fn after_scheme(normalized: &str) -> &str {
    for prefix in ["https://", "http://"] {
        if has_prefix_ignore_case(normalized, prefix) {
            return &normalized[prefix.len()..];
        }
    }
    normalized
}

/// Count labels in front of the registrable domain.
///
/// No suffix list is consulted: the registrable domain is the last two
/// labels, or three under `co.uk`-style ccTLD suffixes.
pub fn subdomain_count(host: &str) -> usize {
    let labels: Vec<&str> = host
        .trim_end_matches('.')
        .split('.')
        .filter(|l| !l.is_empty())
        .collect();
    if labels.len() <= 2 {
        return 0;
    }

    let tld = labels[labels.len() - 1];
    let sld = labels[labels.len() - 2];
    let cc_tld = tld.len() == 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    let registrable = if cc_tld && SECOND_LEVEL_SUFFIXES.contains(&sld) {
        3
    } else {
        2
    };

    labels.len().saturating_sub(registrable)
}

/// Decode `xn--` labels. A host that fails to decode is returned as given.
pub fn unicode_host(host: &str) -> String {
    if !host.split('.').any(|l| l.starts_with("xn--")) {
        return host.to_string();
    }
    let (decoded, result) = idna::domain_to_unicode(host);
    if result.is_ok() {
        decoded
    } else {
        host.to_string()
    }
}

pub fn scan(raw: &str) -> UrlScan {
    let normalized = normalize(raw);
    let https = has_prefix_ignore_case(&normalized, "https://");

    let mut out = UrlScan {
        https,
        ..Default::default()
    };

    if let Ok(url) = Url::parse(&normalized) {
        out.parsed = true;
        match url.host() {
            Some(Host::Domain(d)) => {
                out.subdomain_count = subdomain_count(d);
                out.host = Some(d.to_string());
                out.host_unicode = Some(unicode_host(d));
            }
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {
                out.ip_literal = true;
                out.host = url.host_str().map(str::to_string);
                out.host_unicode = out.host.clone();
            }
            None => {}
        }
        out.port = url.port();
        out.query = url
            .query()
            .filter(|q| !q.is_empty())
            .map(str::to_string);
    }

    out.normalized = normalized;
    out
}
