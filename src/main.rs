use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use browser_driver::{BrowserSession, DriverConfig};
use flow_runner::{Environment, Flow};
use signup_runner::config::{self, RunnerConfig};
use signup_runner::session::run_flow;
use signup_runner::steps::signup_step;

/// Drive the target application's signup form through a real browser
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,

    /// Target environment (stage / qa / prod); prompts when omitted
    #[arg(short, long)]
    env: Option<String>,

    /// Override the resolved base URL
    #[arg(long)]
    url: Option<String>,

    /// Run the browser with a visible window instead of headless mode
    #[arg(long)]
    headful: bool,

    /// Override Chrome/Chromium executable path
    #[arg(long)]
    chrome_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.debug)?;

    match run(cli).await {
        Ok(()) => Ok(()),
        Err(err) => {
            error!("signup runner failed: {err:#}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref()).await?;

    let label = match &cli.env {
        Some(label) => label.clone(),
        None => prompt_environment()?,
    };

    // reject unknown labels before any session is acquired
    let env: Environment = match label.trim().to_lowercase().parse() {
        Ok(env) => env,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    let url = cli
        .url
        .clone()
        .unwrap_or_else(|| config.environments.base_url(env).to_string());

    let flow = Flow::new("signup")
        .with_step(signup_step())
        .with_step_pause(Duration::from_millis(config.step_pause_ms));

    info!("running {} flow against {} ({})", flow.name(), url, env);

    let session = BrowserSession::launch(driver_config(&cli, &config))
        .await
        .context("failed to launch browser session")?;

    // flow failure is reported through the log stream, not the exit code
    run_flow(session, &flow, &url).await;
    Ok(())
}

fn driver_config(cli: &Cli, config: &RunnerConfig) -> DriverConfig {
    DriverConfig {
        headless: config.headless && !cli.headful,
        executable: cli.chrome_path.clone().or_else(|| config.chrome_path.clone()),
        ..DriverConfig::default()
    }
}

fn prompt_environment() -> Result<String> {
    print!("Which environment should the flow run against? (stage / qa / prod): ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read environment from stdin")?;
    Ok(input)
}

fn init_logging(level: &str, debug: bool) -> Result<()> {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        level.parse().context("Invalid log level")?
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}
