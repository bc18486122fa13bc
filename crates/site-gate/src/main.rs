//! site-gated - launch gate service for the portfolio site
//!
//! Serves the coming-soon status API and the admin override, and applies the
//! edge gate to every page request.

use clap::Parser;
use site_config::DeployEnvironment;
use site_gate::{GateConfig, GateError, GateResult, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Launch gate CLI
#[derive(Parser)]
#[command(name = "site-gated")]
#[command(about = "Portfolio launch gate - coming-soon redirects and admin override", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "PORTFOLIO_CONFIG")]
    config: Option<String>,

    /// Listen address (overrides the config file)
    #[arg(short, long, env = "PORTFOLIO_LISTEN_ADDR")]
    listen: Option<String>,

    /// Deployment environment: development or production
    #[arg(short, long, env = "PORTFOLIO_ENVIRONMENT")]
    environment: Option<String>,

    /// Force the coming-soon switch on or off
    #[arg(long, env = "PORTFOLIO_COMING_SOON")]
    coming_soon: Option<bool>,

    /// Log level
    #[arg(long, env = "PORTFOLIO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "PORTFOLIO_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> GateResult<()> {
    let cli = Cli::parse();

    let mut config = GateConfig::load(cli.config.as_deref())?;

    if let Some(level) = cli.log_level.clone() {
        config.logging.level = level;
    }
    config.logging.json |= cli.json;

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    // Override with CLI args
    if let Some(listen) = cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| GateError::Config(format!("Invalid listen address: {}", e)))?;
    }

    if let Some(name) = cli.environment {
        config.environment = DeployEnvironment::from_name(&name)
            .ok_or_else(|| GateError::Config(format!("Unknown environment: {}", name)))?;
    }

    if let Some(coming_soon) = cli.coming_soon {
        config.site.coming_soon_mode = coming_soon;
    }

    Server::new(config).run().await
}
