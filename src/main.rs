//! GitOps demo service entry point.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gitops_demo::api::{create_router, AppState};
use gitops_demo::config::Config;
use gitops_demo::server;
use gitops_demo::utils::shutdown_signal;

/// GitOps demo service.
#[derive(Parser, Debug)]
#[command(name = "gitops-demo")]
#[command(about = "Demo HTTP service exposing status, health and app-name endpoints")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Serve) | None => cmd_serve(args.verbose).await,
    }
}

/// Initialize logging from the configured filter.
fn init_logging(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("gitops_demo=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("GITOPS DEMO - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    if let Err(e) = config.validate() {
        println!("FAILED");
        println!("  Error: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed"));
    }
    println!("OK");

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}", config.socket_addr());
    println!(
        "  App Name: {}",
        config.app_name.as_deref().unwrap_or("(unset)")
    );
    println!("  Log Filter: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(verbose: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    init_logging(&config, verbose);

    let listener = server::bind(&config).await?;
    info!("Demo application starting on port {}", config.port);

    let router = create_router(AppState::from_config(&config));
    server::run(listener, router, shutdown_signal()).await?;

    Ok(())
}
