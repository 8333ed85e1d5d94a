use phish_check::{config, server_config};
use serial_test::serial;

fn cfg_with_server(host: &str, port: u16) -> config::Config {
    config::Config {
        server: Some(config::ServerConfig {
            host: Some(host.to_string()),
            port: Some(port),
        }),
        rules: None,
    }
}

#[test]
fn effective_settings_defaults_when_no_cli_or_config() {
    let cli = server_config::CliOverrides::default();
    let eff = server_config::effective_settings(&cli, None, None);

    assert_eq!(eff.host, server_config::DEFAULT_HOST);
    assert_eq!(eff.port, server_config::DEFAULT_PORT);
    assert_eq!(eff.port, 5000);
}

#[test]
fn cli_overrides_env_and_config() {
    let cfg = cfg_with_server("127.0.0.1", 1111);
    let cli = server_config::CliOverrides {
        host: Some("0.0.0.0".to_string()),
        port: Some(2222),
    };

    let eff = server_config::effective_settings(&cli, Some(3333), Some(&cfg));
    assert_eq!(eff.host, "0.0.0.0");
    assert_eq!(eff.port, 2222);
}

#[test]
fn env_port_overrides_config() {
    let cfg = cfg_with_server("127.0.0.1", 1111);
    let cli = server_config::CliOverrides::default();

    let eff = server_config::effective_settings(&cli, Some(3333), Some(&cfg));
    assert_eq!(eff.host, "127.0.0.1");
    assert_eq!(eff.port, 3333);
}

#[test]
fn config_used_when_nothing_else_set() {
    let cfg = cfg_with_server("127.0.0.1", 1111);
    let eff = server_config::effective_settings(
        &server_config::CliOverrides::default(),
        None,
        Some(&cfg),
    );
    assert_eq!(eff.port, 1111);
    assert_eq!(eff.socket_addr().unwrap().to_string(), "127.0.0.1:1111");
}

#[test]
fn bad_host_is_reported() {
    let eff = server_config::EffectiveSettings {
        host: "not a host".to_string(),
        port: 5000,
    };
    let err = eff.socket_addr().unwrap_err();
    assert!(format!("{err:#}").contains("invalid bind address"));
}

#[test]
#[serial]
fn env_port_reads_port_variable() {
    std::env::set_var(server_config::PORT_ENV, "8081");
    assert_eq!(server_config::env_port().unwrap(), Some(8081));

    std::env::set_var(server_config::PORT_ENV, "  ");
    assert_eq!(server_config::env_port().unwrap(), None);

    std::env::remove_var(server_config::PORT_ENV);
    assert_eq!(server_config::env_port().unwrap(), None);
}

#[test]
#[serial]
fn env_port_rejects_garbage() {
    std::env::set_var(server_config::PORT_ENV, "http");
    let err = server_config::env_port().unwrap_err();
    assert!(err.to_string().contains("PORT"));
    std::env::remove_var(server_config::PORT_ENV);
}
