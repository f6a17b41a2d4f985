use clap::Parser;
mod app;
mod commands;
use commands::cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // stdout is reserved for the decision.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();
    let cfg = match app::resolve_config(&args) {
        Ok(cfg) => cfg,
        Err(e) => cli::exit_with_config_error(e),
    };

    tracing::debug!(target: "gate.app", ?cfg, "configuration resolved");

    let decision = app::run_app(&cfg).await;
    app::emit(&decision);
}
