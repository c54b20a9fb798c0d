use ticket_copilot::cli::run_with_args;
use ticket_copilot::client::connect_rag_client;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the report.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("CLI application startup: tracing initialised, environment loaded");

    let mut stdout = std::io::stdout();
    let code = run_with_args(std::env::args_os(), connect_rag_client, &mut stdout).await;
    std::process::exit(code);
}
