#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use chainfund_core::config::{REDIRECT_DELAY_MS, TOAST_LIFETIME_MS, WALLET_CONNECT_DELAY_MS};
use chainfund_core::AppConfig;
use chrono::NaiveDate;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Global app configuration, set from command line
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the app configuration (set from command line or default)
pub fn app_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// ChainFund - transparent pooled funding
#[derive(Parser, Debug)]
#[command(name = "chainfund-desktop")]
#[command(about = "ChainFund - community pools and milestone-based crowdfunding")]
struct Args {
    /// Pin today's date for deadline countdowns (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Simulated wallet handshake delay in milliseconds
    #[arg(long, default_value_t = WALLET_CONNECT_DELAY_MS)]
    wallet_delay_ms: u64,

    /// Pause before redirecting after a completed action, in milliseconds
    #[arg(long, default_value_t = REDIRECT_DELAY_MS)]
    redirect_delay_ms: u64,

    /// How long notifications stay on screen, in milliseconds
    #[arg(long, default_value_t = TOAST_LIFETIME_MS)]
    toast_ms: u64,

    /// Log filter, e.g. "info" or "chainfund_core=debug" (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn config(&self) -> AppConfig {
        AppConfig {
            wallet_connect_delay_ms: self.wallet_delay_ms,
            redirect_delay_ms: self.redirect_delay_ms,
            toast_lifetime_ms: self.toast_ms,
            today: self.today,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        match &self.log {
            Some(directives) => EnvFilter::new(directives),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        }
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.env_filter())
        .init();

    let config = args.config();
    tracing::info!(?config, "starting ChainFund");
    let _ = CONFIG.set(config);

    let window = WindowBuilder::new()
        .with_title("ChainFund")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_defaults_match_config_defaults() {
        let args = Args::parse_from(["chainfund-desktop"]);
        assert_eq!(args.config(), AppConfig::default());
    }

    #[test]
    fn args_override_timings() {
        let args = Args::parse_from([
            "chainfund-desktop",
            "--today",
            "2024-07-31",
            "--wallet-delay-ms",
            "10",
            "--toast-ms",
            "250",
        ]);
        let config = args.config();
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 7, 31));
        assert_eq!(config.wallet_connect_delay_ms, 10);
        assert_eq!(config.toast_lifetime_ms, 250);
        assert_eq!(config.redirect_delay_ms, REDIRECT_DELAY_MS);
    }

    #[test]
    fn args_reject_bad_date() {
        assert!(Args::try_parse_from(["chainfund-desktop", "--today", "31/07/2024"]).is_err());
    }

    #[test]
    fn config_serializes() {
        let json = serde_json::to_value(AppConfig::default()).unwrap();
        assert_eq!(json["toast_lifetime_ms"], 4_000);
    }
}
