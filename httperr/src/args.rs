use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Build structured HTTP error values
#[derive(Debug, Parser)]
#[command(name = "httperr", about = "Normalize error inputs into structured HTTP error values")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "httperr.toml", env = "HTTPERR_CONFIG")]
    pub config: PathBuf,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge the inputs into one error value
    ///
    /// Each input is read as JSON when it parses as JSON, otherwise as a
    /// plain string.
    Build {
        /// Status codes, messages, JSON option objects or arrays
        inputs: Vec<String>,
    },

    /// Create the catalog error for a status code
    Create {
        /// Status code, as a number or numeric string
        code: String,
        /// Message replacing the default one
        message: Option<String>,
    },

    /// Coerce a value to a status code
    Status {
        value: String,
    },

    /// List the catalog entries
    List,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_build_inputs() {
        let args = Args::try_parse_from(["httperr", "--pretty", "build", "404", "no such user"]).unwrap();
        assert!(args.pretty);
        let Command::Build { inputs } = args.command else {
            panic!("expected build command");
        };
        assert_eq!(inputs, ["404", "no such user"]);
    }

    #[test]
    fn parses_create_with_optional_message() {
        let args = Args::try_parse_from(["httperr", "create", "405"]).unwrap();
        assert!(matches!(args.command, Command::Create { ref code, message: None } if code == "405"));
    }
}
