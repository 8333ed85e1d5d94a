use crate::{config, rules::RuleSet, state};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Build the rule set from the optional `[rules]` config section.
pub fn build_rules(cfg: Option<&config::Config>) -> Result<RuleSet> {
    RuleSet::from_config(cfg.and_then(|c| c.rules.as_ref())).context("invalid [rules] config")
}

/// Build the shared AppState.
///
/// This is a small helper to keep `main.rs` focused on config/CLI parsing and server wiring.
pub fn build_app_state(rules: RuleSet) -> Arc<state::AppState> {
    Arc::new(state::AppState { rules })
}
