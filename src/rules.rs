use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::url_scan::{DomainList, SubstringMatcher};

/// Every heuristic the evaluator knows about, in evaluation order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    IpLiteralHost,
    UrlLength,
    Shortener,
    AtSymbol,
    DoubleSlash,
    HyphenInHost,
    SubdomainDepth,
    NonHttps,
    NonStandardPort,
    QueryString,
    GoogleHosted,
    SuspiciousKeyword,
}

impl RuleKind {
    pub const ALL: [RuleKind; 12] = [
        RuleKind::IpLiteralHost,
        RuleKind::UrlLength,
        RuleKind::Shortener,
        RuleKind::AtSymbol,
        RuleKind::DoubleSlash,
        RuleKind::HyphenInHost,
        RuleKind::SubdomainDepth,
        RuleKind::NonHttps,
        RuleKind::NonStandardPort,
        RuleKind::QueryString,
        RuleKind::GoogleHosted,
        RuleKind::SuspiciousKeyword,
    ];
}

pub const DEFAULT_LENGTH_SUSPICIOUS: usize = 54;
pub const DEFAULT_LENGTH_PHISHING: usize = 75;
pub const DEFAULT_SUBDOMAINS_SUSPICIOUS: usize = 2;

pub const DEFAULT_SHORTENERS: &[&str] = &[
    "bit.ly",
    "goo.gl",
    "tinyurl.com",
    "ow.ly",
    "t.co",
    "bit.do",
    "mcaf.ee",
    "su.pr",
    "is.gd",
    "buff.ly",
    "tiny.cc",
    "lnkd.in",
    "shorturl.at",
    "cutt.ly",
    "rb.gy",
    "v.gd",
    "tiny.one",
];

pub const DEFAULT_KEYWORDS: &[&str] = &[
    "login", "signin", "verify", "account", "update", "banking", "confirm", "password",
    "webscr", "wallet",
];

pub const GOOGLE_HOSTING: &[&str] = &["sites.google.com", "drive.google.com"];

/// `[rules]` section of the config file. Every field is optional; unset
/// fields keep the built-in policy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    pub length_suspicious: Option<usize>,
    pub length_phishing: Option<usize>,
    pub subdomains_suspicious: Option<usize>,
    pub shorteners: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub disabled: Vec<RuleKind>,
}

/// Tunable policy the evaluator runs against. Built once at startup and
/// shared read-only between requests.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub length_suspicious: usize,
    pub length_phishing: usize,
    pub subdomains_suspicious: usize,
    disabled: Vec<RuleKind>,
    pub(crate) shorteners: DomainList,
    pub(crate) keywords: SubstringMatcher,
    pub(crate) google_hosting: DomainList,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            length_suspicious: DEFAULT_LENGTH_SUSPICIOUS,
            length_phishing: DEFAULT_LENGTH_PHISHING,
            subdomains_suspicious: DEFAULT_SUBDOMAINS_SUSPICIOUS,
            disabled: vec![],
            shorteners: DomainList::new(DEFAULT_SHORTENERS),
            keywords: SubstringMatcher::builtin(DEFAULT_KEYWORDS),
            google_hosting: DomainList::new(GOOGLE_HOSTING),
        }
    }
}

impl RuleSet {
    pub fn from_config(cfg: Option<&RulesConfig>) -> Result<Self> {
        let mut rules = Self::default();
        let Some(cfg) = cfg else {
            return Ok(rules);
        };

        if let Some(n) = cfg.length_suspicious {
            rules.length_suspicious = n;
        }
        if let Some(n) = cfg.length_phishing {
            rules.length_phishing = n;
        }
        if rules.length_phishing < rules.length_suspicious {
            bail!(
                "rules.length_phishing ({}) must be >= rules.length_suspicious ({})",
                rules.length_phishing,
                rules.length_suspicious
            );
        }

        if let Some(n) = cfg.subdomains_suspicious {
            if n == 0 {
                bail!("rules.subdomains_suspicious must be at least 1");
            }
            rules.subdomains_suspicious = n;
        }

        if let Some(list) = &cfg.shorteners {
            rules.shorteners = DomainList::new(list);
        }
        if let Some(list) = &cfg.keywords {
            rules.keywords = SubstringMatcher::new(list)?;
        }

        let mut disabled = cfg.disabled.clone();
        disabled.sort();
        disabled.dedup();
        rules.disabled = disabled;

        Ok(rules)
    }

    pub fn is_enabled(&self, kind: RuleKind) -> bool {
        !self.disabled.contains(&kind)
    }
}
