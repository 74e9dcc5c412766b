use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use cihui_config::Config;
use cihui_server::AppState;
use cihui_types::MAX_SLOTS;
use clap::{Parser, Subcommand};
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

pub mod client;
pub mod query;
pub mod render;

use self::client::BackendClient;
use self::query::{QueryOutcome, normalize_slots, run_query};

#[derive(Parser)]
#[command(name = "zhuyin-cihui", version, about = "Look up Chinese vocabulary by character or zhuyin slots")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the vocabulary backend
    Serve {
        /// Overrides BIND_ADDR
        #[arg(long)]
        bind: Option<String>,
    },
    /// Query a running backend
    Query {
        /// Up to four slots; "" or "?" means any character
        #[arg(required = true, num_args = 1..=MAX_SLOTS)]
        slots: Vec<String>,

        /// Backend base URL
        #[arg(long, default_value = "http://127.0.0.1:8888")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind } => {
            serve(bind).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Query { slots, url } => Ok(query(slots, url).await),
    }
}

/// Log formatting layer; stdout stays reserved for query results
fn log_layer<W>(json: bool, writer: W) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    if json {
        fmt::layer().json().with_writer(writer).boxed()
    } else {
        fmt::layer().with_writer(writer).boxed()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "zhuyin_cihui=info,cihui_server=info,cihui_generator=info,tower_http=info".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    tracing_subscriber::registry()
        .with(log_layer(json, std::io::stderr))
        .with(filter)
        .init();
}

async fn serve(bind: Option<String>) -> anyhow::Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;
    let bind_addr = bind.unwrap_or(config.server.bind_addr);

    tracing::info!(
        model = %config.generator.model,
        max_attempts = config.generator.max_attempts,
        "starting vocabulary backend"
    );

    let state = AppState::from_config(&config.generator).context("Failed to build model client")?;

    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
        }
        tracing::info!("Shutdown requested");
    };

    cihui_server::serve(Arc::new(state), &bind_addr, shutdown)
        .await
        .with_context(|| format!("Server on {bind_addr} failed"))
}

async fn query(slots: Vec<String>, url: String) -> ExitCode {
    let client = BackendClient::new(url);

    match run_query(&normalize_slots(slots), &client).await {
        QueryOutcome::Results(entries) => {
            print!("{}", render::render_results(&entries));
            ExitCode::SUCCESS
        }
        QueryOutcome::Blank => {
            eprintln!("{}", render::BLANK_QUERY);
            ExitCode::FAILURE
        }
        QueryOutcome::Failed => {
            eprintln!("{}", render::QUERY_FAILED);
            ExitCode::FAILURE
        }
    }
}
