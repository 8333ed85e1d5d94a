use crate::rules::RuleSet;

#[derive(Clone, Debug)]
pub struct AppState {
    pub rules: RuleSet,
}
