use clap::Parser;
use clap::Subcommand;
use session_token::Clock;
use session_token::SecretKey;
use session_token::SessionError;
use session_token::SessionTokens;

/// Issue and resolve HS256 session access tokens
#[derive(Debug, Parser)]
#[command(name = "session-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Issue a seven-day access token for a username
    Issue { username: String },

    /// Verify an access token and print the username it asserts
    Resolve { token: String },
}

/// Execute a command, returning the line to print on success.
pub fn run<C: Clock>(
    command: &Command,
    tokens: &SessionTokens<C>,
    secret: &SecretKey,
) -> Result<String, SessionError> {
    match command {
        Command::Issue { username } => tokens.issue_access_token(username, secret),
        Command::Resolve { token } => tokens.resolve_username(token, secret),
    }
}
