//! Stateless phishing-URL checker.
//!
//! [`evaluator::evaluate`] runs a fixed, ordered list of lexical heuristics
//! over a URL string; [`app::build_router`] exposes it as
//! `POST /check_phishing` next to a small browser frontend.

pub mod api_error;
pub mod app;
pub mod app_state_builder;
pub mod config;
pub mod cors;
pub mod evaluator;
pub mod routes;
pub mod rules;
pub mod server_config;
pub mod state;
pub mod url_scan;
