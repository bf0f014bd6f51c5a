//! CLI definition.
//!
//! Provides subcommands for:
//! - Printing the assistant tool catalog (`tools`)
//! - Dispatching a single function call (`call`)
//! - Serving tool-call batches over stdin/stdout (`serve`)

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "msfchat")]
#[command(about = "Assistant function-call backend for Marvel Strike Force player data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file path (optional, uses MSF_* env vars by default)
    #[arg(short, long, global = true, env = "MSF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the tool definitions to register with the assistant
    Tools,

    /// Dispatch one function call and print its output
    Call {
        /// Function name (e.g. get_roster)
        name: String,

        /// JSON arguments
        #[arg(long, default_value = "{}")]
        args: String,
    },

    /// Read tool-call batches from stdin, one JSON document per line
    Serve,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_call_with_arguments() {
        let cli = Cli::try_parse_from([
            "msfchat",
            "call",
            "get_roster",
            "--args",
            r#"{"page":2}"#,
            "--config",
            "msfchat.toml",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::Call { name: "get_roster".into(), args: r#"{"page":2}"#.into() }
        );
        assert_eq!(cli.config, Some(PathBuf::from("msfchat.toml")));
        assert!(!cli.json_logs);
    }

    #[test]
    fn call_arguments_default_to_empty_object() {
        let cli = Cli::try_parse_from(["msfchat", "call", "get_player_card"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Call { name: "get_player_card".into(), args: "{}".into() }
        );
    }

    #[test]
    fn json_logs_flag_is_global() {
        let cli = Cli::try_parse_from(["msfchat", "serve", "--json-logs"]).unwrap();
        assert_eq!(cli.command, Command::Serve);
        assert!(cli.json_logs);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["msfchat"]).is_err());
    }
}
