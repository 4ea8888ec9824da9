use clap::Parser;
use std::path::PathBuf;

use error_common::{log_error, ConfbotError, Result};
use store_server::{serve, DocumentKind, ServeOptions};
use telemetry::{init_tracing, LogFormat, LoggingConfig};

/// Read/write configuration values service
#[derive(Parser, Debug)]
#[command(name = "values-server")]
#[command(about = "Serves and stores <app>.value.json files over HTTP")]
struct Args {
    /// Directory containing value files
    #[arg(long, alias = "schema-dir", default_value = "data/values")]
    values_dir: PathBuf,

    /// Host and port to listen on
    #[arg(long, default_value = "0.0.0.0:5002")]
    listen: String,

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
        &LoggingConfig::new("values-server")
            .with_verbose(args.verbose)
            .with_format(format),
    )
    .map_err(|e| ConfbotError::InternalError(e.to_string()))?;

    let options = ServeOptions {
        kind: DocumentKind::Values,
        dir: args.values_dir,
        listen: args.listen,
    };

    if let Err(e) = serve(options).await {
        log_error("values-server", &e).await;
        return Err(e);
    }
    Ok(())
}
