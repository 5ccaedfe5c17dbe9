//! pwd-check - terminal front end for the password checker
//!
//! # Usage
//!
//! ```bash
//! # Interactive session (default)
//! pwd-check
//!
//! # One-shot commands
//! pwd-check check 'Abc123!@'
//! pwd-check generate --length 20
//! pwd-check tips
//! ```

mod render;
mod repl;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pwd_check::{DEFAULT_LENGTH, MAX_UI_LENGTH, MIN_LENGTH, Session, TIPS};
use secrecy::{ExposeSecret, SecretString};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Check password strength, generate passwords and avoid reusing them
#[derive(Parser, Debug)]
#[command(name = "pwd-check")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PWD_CHECK_LOG", default_value = "warn", global = true)]
    log_level: String,

    /// Disable colored output
    #[arg(long, global = true)]
    plain: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rate a password (read from stdin when omitted)
    Check { password: Option<String> },

    /// Print a random password
    Generate {
        /// Number of characters
        #[arg(
            short,
            long,
            env = "PWD_CHECK_LENGTH",
            default_value_t = DEFAULT_LENGTH as u8,
            value_parser = clap::value_parser!(u8).range(MIN_LENGTH as i64..=MAX_UI_LENGTH as i64)
        )]
        length: u8,
    },

    /// Print tips for choosing a strong password
    Tips,

    /// Interactive session that remembers saved passwords
    Session,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    if cli.plain {
        console::set_colors_enabled(false);
    }

    let mut out = io::stdout().lock();
    let mut session = Session::new();

    match cli.command {
        Some(Command::Check { password }) => {
            let password = match password {
                Some(p) => SecretString::new(p.into()),
                None => read_password(io::stdin().lock())?,
            };
            repl::check(&mut out, &session, &password)?;
        }
        Some(Command::Generate { length }) => {
            let password = session.generate(usize::from(length))?;
            writeln!(out, "{}", password.expose_secret())?;
        }
        Some(Command::Tips) => {
            for tip in TIPS {
                writeln!(out, "{}", render::tip(tip))?;
            }
        }
        Some(Command::Session) | None => {
            tracing::info!("starting interactive session");
            repl::run(io::stdin().lock(), &mut out, &mut session)
                .context("interactive session failed")?;
        }
    }

    Ok(())
}

/// Reads one line from `input`, dropping the line terminator only.
fn read_password(mut input: impl BufRead) -> Result<SecretString> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(SecretString::new(trimmed.into()))
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("warn"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(filter)
        .init();

    Ok(())
}
