use clap::Parser;
use session_cli::cli::run;
use session_cli::cli::Cli;
use session_cli::config::Config;
use session_token::SessionTokens;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<(), anyhow::Error> {
    // stdout carries only the command result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "session_cli=info,session_token=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    tracing::debug!(
        service = "session-cli",
        version = env!("CARGO_PKG_VERSION"),
        "Starting"
    );

    let config = Config::load()?;
    let secret = config.jwt.secret_key()?;
    tracing::debug!(config = ?config, "Configuration loaded");

    let tokens = SessionTokens::new();
    match run(&cli.command, &tokens, &secret) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!(kind = %e.kind(), "Command failed");
            Err(e.into())
        }
    }
}
