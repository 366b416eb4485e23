use clap::Parser;
use schemascore_api::RestApi;
use schemascore_core::{AnalysisContext, ScoringEngine};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Schema quality scoring service
#[derive(Parser, Debug)]
#[command(name = "schemascore")]
#[command(about = "Weighted quality scoring for relational schema descriptions", long_about = None)]
struct Args {
    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting schemascore v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP API port: {}", args.http_port);

    // Analysis backends load exactly once, before the first evaluation,
    // and are shared read-only by every worker.
    let engine = Arc::new(ScoringEngine::new(AnalysisContext::local()));
    info!("Analysis backends initialized");

    let engine_http = engine.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(engine_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("schemascore started successfully");
    info!("HTTP API: http://localhost:{}/score_schema", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
