//! Scope and method-override demonstrations.
//!
//! Each subcommand runs one demo and writes its transcript to stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lessons::error::LessonError;
use lessons::variant::Variant;
use lessons::{exit_codes, logging, scope, specialize};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "lessons",
    version,
    about = "Binding scope and method override demonstrations"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assign a process-wide binding, then rebind an enclosing local.
    Scopes,
    /// Call `method` on each variant, then `delegate` on a provider.
    Specialize,
    /// Call `delegate` on a single variant.
    Delegate {
        /// Variant to instantiate.
        #[arg(value_enum)]
        variant: Variant,
    },
}

fn main() {
    if let Err(err) = logging::init() {
        eprintln!("{:#}", err);
    }
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Scopes => scope::run(&mut out).context("run scopes demo")?,
        Command::Specialize => specialize::run(&mut out).context("run specialize demo")?,
        Command::Delegate { variant } => {
            debug!(%variant, "delegate command");
            specialize::delegate_for(variant, &mut out)
                .with_context(|| format!("delegate on {variant}"))?;
        }
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<LessonError>() {
        Some(LessonError::MissingCapability { .. }) => exit_codes::MISSING_CAPABILITY,
        _ => exit_codes::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_scopes() {
        let cli = Cli::parse_from(["lessons", "scopes"]);
        assert!(matches!(cli.command, Command::Scopes));
    }

    #[test]
    fn parse_delegate_variant() {
        let cli = Cli::parse_from(["lessons", "delegate", "provider"]);
        assert!(matches!(
            cli.command,
            Command::Delegate {
                variant: Variant::Provider
            }
        ));
    }

    #[test]
    fn parse_delegate_rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["lessons", "delegate", "super"]).is_err());
    }

    #[test]
    fn missing_capability_maps_to_its_own_exit_code() {
        let err = anyhow::Error::new(LessonError::MissingCapability {
            variant: "Inheritor",
            capability: "action",
        })
        .context("delegate on Inheritor");
        assert_eq!(exit_code(&err), exit_codes::MISSING_CAPABILITY);
    }

    #[test]
    fn other_errors_map_to_failure() {
        let err = anyhow::Error::new(LessonError::Unset { name: "y" });
        assert_eq!(exit_code(&err), exit_codes::FAILURE);
    }
}
