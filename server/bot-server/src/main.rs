use clap::Parser;
use std::net::SocketAddr;
use tracing::info;

use bot_server::{create_app, BotConfig, BotServer};
use error_common::{log_error, ConfbotError, Result};
use telemetry::{init_tracing, LogFormat, LoggingConfig};

/// confbot HTTP server
#[derive(Parser, Debug)]
#[command(name = "bot-server")]
#[command(about = "Natural-language configuration update bot")]
struct Args {
    /// Server bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "5003")]
    port: u16,

    /// Configuration file path (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log output format: pretty or json
    #[arg(long, env = "LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let format: LogFormat = args
        .log_format
        .parse()
        .map_err(|e| ConfbotError::ConfigError(format!("{e}")))?;
    init_tracing(
        &LoggingConfig::new("bot-server")
            .with_verbose(args.verbose)
            .with_format(format),
    )
    .map_err(|e| ConfbotError::InternalError(e.to_string()))?;

    if let Err(e) = run(args).await {
        log_error("bot-server", &e).await;
        return Err(e);
    }
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let config = BotConfig::load(args.config.as_deref())
        .map_err(|e| ConfbotError::ConfigError(e.to_string()))?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        schema_service = %config.schema_service_url,
        values_service = %config.values_service_url,
        ollama = %config.ollama_url,
        model = %config.model_name,
        "starting confbot server"
    );

    let server = BotServer::new(config)?;
    let app = create_app(server);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| ConfbotError::ConfigError(format!("invalid bind address: {e}")))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ConfbotError::NetworkError(format!("Failed to bind to {addr}: {e}")))?;

    info!("confbot server running on http://{addr}");
    info!("Health check available at: http://{addr}/health");

    axum::serve(listener, app)
        .await
        .map_err(|e| ConfbotError::ServerError(format!("HTTP server error: {e}")))
}
