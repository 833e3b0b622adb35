//! content-studio binary entry point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use content_studio::config::AppConfig;
use content_studio::content::GenerationRequest;
use content_studio::http_server::{AppState, HttpServer};
use content_studio::logging::{init_logging, LogConfig};

#[derive(Debug, Parser)]
#[command(name = "content-studio", version, about = "Content management API with template-driven drafts")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, env = "CONTENT_STUDIO_CONFIG", global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API (default)
    Serve {
        /// Override the configured bind address
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print generated content to stdout
    Generate {
        #[arg(long)]
        title: String,
        #[arg(long)]
        topic: String,
        /// Content type tag; unknown tags fall back to blog unless --strict
        #[arg(long = "type", default_value = "blog")]
        content_type: String,
        /// Reject unknown content types instead of falling back
        #[arg(long)]
        strict: bool,
    },
    /// Write an annotated sample configuration file
    InitConfig {
        #[arg(long, default_value = "content-studio.toml.example")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => {
            let mut config = AppConfig::load(cli.config.as_deref())?;
            if let Some(bind) = bind {
                config.server.bind_addr = bind;
            }

            let _guard = init_logging(&LogConfig::from_server_config(&config.server))?;
            info!("Configuration: {:?}", config);

            HttpServer::new(config, AppState::in_memory()).serve().await
        }
        Command::Generate {
            title,
            topic,
            content_type,
            strict,
        } => {
            let request = GenerationRequest::new(title, content_type, topic);
            let validated = if strict {
                request.into_validated_strict()?
            } else {
                request.into_validated()?
            };
            println!("{}", validated.generate());
            Ok(())
        }
        Command::InitConfig { output } => {
            let sample = AppConfig::sample_toml()?;
            std::fs::write(&output, sample)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("📝 Wrote sample configuration to {}", output.display());
            Ok(())
        }
    }
}
