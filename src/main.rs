use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use phish_check::{app, app_state_builder, config, rules::RuleKind, server_config};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Bind host (default: 0.0.0.0)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (default: $PORT, then 5000)
    #[arg(long)]
    port: Option<u16>,

    /// Config TOML file (default: /etc/phish-check/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: &Path) -> anyhow::Result<Option<config::Config>> {
    match config::Config::load(path) {
        Ok(cfg) => Ok(Some(cfg)),
        Err(e) => {
            if let Some(ioe) = e.downcast_ref::<std::io::Error>() {
                if ioe.kind() == std::io::ErrorKind::NotFound {
                    info!("config file not found at {}; continuing", path.display());
                    return Ok(None);
                }
            }
            Err(e.context(format!("failed loading config {}", path.display())))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(server_config::DEFAULT_CONFIG_PATH));
    let config = load_config(&config_path)?;

    let cli = server_config::CliOverrides {
        host: args.host.clone(),
        port: args.port,
    };
    let eff = server_config::effective_settings(&cli, server_config::env_port()?, config.as_ref());

    let rules = app_state_builder::build_rules(config.as_ref())?;
    let disabled: Vec<RuleKind> = RuleKind::ALL
        .into_iter()
        .filter(|k| !rules.is_enabled(*k))
        .collect();
    if !disabled.is_empty() {
        warn!("heuristic rules disabled by config: {disabled:?}");
    }

    let state = app_state_builder::build_app_state(rules);
    let app = app::build_router(state);

    let addr = eff.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
