use serde::{Serialize, Serializer};

use crate::rules::{RuleKind, RuleSet};
use crate::url_scan::{self, UrlScan};

/// Per-rule outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Legitimate,
    Suspicious,
    Phishing,
}

impl Signal {
    pub fn as_i8(self) -> i8 {
        match self {
            Signal::Legitimate => -1,
            Signal::Suspicious => 0,
            Signal::Phishing => 1,
        }
    }

    pub fn fired(self) -> bool {
        !matches!(self, Signal::Legitimate)
    }

    fn from_flag(flag: bool) -> Self {
        if flag {
            Signal::Phishing
        } else {
            Signal::Legitimate
        }
    }
}

impl Serialize for Signal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.as_i8())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub is_phishing: bool,
    pub reasons: Vec<String>,
    /// One signal per rule, in evaluation order.
    pub features: Vec<Signal>,
}

impl CheckResult {
    fn new() -> Self {
        Self {
            is_phishing: false,
            reasons: vec![],
            features: Vec::with_capacity(RuleKind::ALL.len()),
        }
    }

    fn push(&mut self, signal: Signal, reason: Option<&str>) {
        if signal.fired() {
            if let Some(r) = reason {
                self.reasons.push(r.to_string());
            }
        }
        self.features.push(signal);
    }

    pub fn indicator_count(&self) -> usize {
        self.features.iter().filter(|s| s.fired()).count()
    }
}

fn signal_for(kind: RuleKind, rules: &RuleSet, scan: &UrlScan) -> Signal {
    let url = scan.normalized.as_str();
    match kind {
        RuleKind::IpLiteralHost => Signal::from_flag(scan.ip_literal),
        RuleKind::UrlLength => {
            let len = url.chars().count();
            if len > rules.length_phishing {
                Signal::Phishing
            } else if len >= rules.length_suspicious {
                Signal::Suspicious
            } else {
                Signal::Legitimate
            }
        }
        RuleKind::Shortener => Signal::from_flag(
            scan.host
                .as_deref()
                .is_some_and(|h| rules.shorteners.matches_host(h)),
        ),
        RuleKind::AtSymbol => Signal::from_flag(url.contains('@')),
        RuleKind::DoubleSlash => {
            Signal::from_flag(url_scan::after_scheme(url).matches("//").count() > 1)
        }
        RuleKind::HyphenInHost => {
            // Punycode inserts its own hyphens; judge the host as the user sees it.
            Signal::from_flag(
                scan.host_unicode
                    .as_deref()
                    .is_some_and(|h| h.contains('-')),
            )
        }
        RuleKind::SubdomainDepth => {
            let n = scan.subdomain_count;
            if n > rules.subdomains_suspicious {
                Signal::Phishing
            } else if n == rules.subdomains_suspicious {
                Signal::Suspicious
            } else {
                Signal::Legitimate
            }
        }
        RuleKind::NonHttps => Signal::from_flag(!scan.https),
        RuleKind::NonStandardPort => {
            Signal::from_flag(scan.port.is_some_and(|p| p != 80 && p != 443))
        }
        RuleKind::QueryString => Signal::from_flag(scan.query.is_some()),
        RuleKind::GoogleHosted => Signal::from_flag(
            scan.host
                .as_deref()
                .is_some_and(|h| rules.google_hosting.matches_host(h)),
        ),
        RuleKind::SuspiciousKeyword => Signal::from_flag(rules.keywords.is_match(url)),
    }
}

fn reason_for(kind: RuleKind, signal: Signal) -> Option<&'static str> {
    let reason = match (kind, signal) {
        (_, Signal::Legitimate) => return None,
        (RuleKind::IpLiteralHost, _) => "Hostname is an IP address (possible obfuscation).",
        (RuleKind::UrlLength, Signal::Phishing) => "URL is long, common in phishing links.",
        (RuleKind::UrlLength, _) => "URL length is medium, somewhat suspicious.",
        (RuleKind::Shortener, _) => "URL uses a shortening service (obscures destination).",
        (RuleKind::AtSymbol, _) => "URL contains '@' which can hide the real domain.",
        (RuleKind::DoubleSlash, _) => "Multiple '//' found in URL path (suspicious structure).",
        (RuleKind::HyphenInHost, _) => "Hyphen found in hostname; may imitate legitimate domains.",
        (RuleKind::SubdomainDepth, Signal::Phishing) => {
            "Many subdomains detected; may be used to mimic trusted sites."
        }
        (RuleKind::SubdomainDepth, _) => "Multiple subdomains present (moderately suspicious).",
        (RuleKind::NonHttps, _) => "URL is not HTTPS (no TLS), insecure connection.",
        (RuleKind::NonStandardPort, _) => "Non-standard port used (not 80/443), unusual setup.",
        (RuleKind::QueryString, _) => {
            "URL contains query parameters, sometimes used in credential-stealing pages."
        }
        (RuleKind::GoogleHosted, _) => {
            "Hosted on Google Sites/Drive; attackers sometimes host phishing content here."
        }
        (RuleKind::SuspiciousKeyword, _) => {
            "URL contains words commonly used to bait credentials (login, verify, account...)."
        }
    };
    Some(reason)
}

/// Run every enabled rule against `raw` and collect the verdict.
///
/// All rules run for every input; the verdict is true iff any of them fired.
/// Never fails: inputs that do not parse as URLs simply give host-based
/// rules nothing to match.
pub fn evaluate(rules: &RuleSet, raw: &str) -> CheckResult {
    let scan = url_scan::scan(raw);
    let mut out = CheckResult::new();

    for kind in RuleKind::ALL {
        let signal = if rules.is_enabled(kind) {
            signal_for(kind, rules, &scan)
        } else {
            Signal::Legitimate
        };
        out.push(signal, reason_for(kind, signal));
    }

    out.is_phishing = !out.reasons.is_empty();
    out
}
