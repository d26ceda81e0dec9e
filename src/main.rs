use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod chat;
mod endpoint;
mod probes;
mod proto;

use crate::endpoint::Endpoint;

#[derive(Debug, thiserror::Error)]
enum ProbeError {
    #[error("invalid port in host value: `{0}`")]
    InvalidPort(String),
    #[error("websocket connect failed: {0}")]
    Connect(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("protobuf decode failed: {0}")]
    Decode(#[from] prost::DecodeError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("failed to read `{path}`: {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("reading local input failed: {0}")]
    Input(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "probe", about = "Demo server endpoint probes and websocket chat CLI")]
struct Cli {
    #[arg(long, env = "PROBE_HOST", default_value = "127.0.0.1")]
    host: String,

    #[arg(long, env = "PROBE_PORT", default_value_t = 8080)]
    port: u16,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Chat,
    Json {
        #[arg(long, default_value = "Test user")]
        name: String,

        #[arg(long, default_value_t = 100)]
        number: i32,
    },
    Multipart {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    Protobuf {
        #[arg(long, default_value_t = 9)]
        number: i32,

        #[arg(long, default_value = "john")]
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), ProbeError> {
    // Diagnostics go to stderr; stdout carries only probe and chat output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let endpoint = Endpoint::resolve(&cli.host, cli.port)?;

    match cli.command {
        Command::Chat => chat::run(&endpoint).await,
        Command::Json { name, number } => probes::json_echo(&endpoint, &name, number).await,
        Command::Multipart { file } => probes::multipart_upload(&endpoint, file.as_deref()).await,
        Command::Protobuf { number, name } => probes::protobuf_echo(&endpoint, number, &name).await,
    }
}
