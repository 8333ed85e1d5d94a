use phish_check::{config, rules::RuleKind};
use std::io::Write;

#[test]
fn config_load_parses_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut f = std::fs::File::create(&path).unwrap();
    write!(
        f,
        "{}",
        r#"
[server]
host = "127.0.0.1"
port = 8080

[rules]
length_suspicious = 60
length_phishing = 90
subdomains_suspicious = 3
shorteners = ["bit.ly", "example.link"]
keywords = ["login"]
disabled = ["query_string"]
"#
    )
    .unwrap();

    let cfg = config::Config::load(&path).unwrap();
    let server = cfg.server.unwrap();
    assert_eq!(server.host.unwrap(), "127.0.0.1");
    assert_eq!(server.port.unwrap(), 8080);

    let rules = cfg.rules.unwrap();
    assert_eq!(rules.length_suspicious, Some(60));
    assert_eq!(rules.length_phishing, Some(90));
    assert_eq!(rules.subdomains_suspicious, Some(3));
    assert_eq!(rules.shorteners.unwrap().len(), 2);
    assert_eq!(rules.disabled, vec![RuleKind::QueryString]);
}

#[test]
fn config_sections_are_optional() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    let cfg = config::Config::load(&path).unwrap();
    assert!(cfg.server.is_none());
    assert!(cfg.rules.is_none());
}

#[test]
fn config_load_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let err = config::Config::load(&path).err().unwrap();
    let s = format!("{err:#}");
    assert!(s.to_lowercase().contains("no such") || s.to_lowercase().contains("not found"));
}

#[test]
fn unknown_rules_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[rules]\nlenght_phishing = 3\n").unwrap();
    assert!(config::Config::load(&path).is_err());
}
