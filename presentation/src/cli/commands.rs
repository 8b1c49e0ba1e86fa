//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for decision-swarm
#[derive(Parser, Debug)]
#[command(name = "decision-swarm")]
#[command(author, version, about = "Agent swarm - six AI viewpoints on one decision")]
#[command(long_about = r#"
Decision Swarm runs a fixed swarm of AI agents over a question and streams
their analysis.

The process has three phases:
1. Analysis: three analysts answer the question in parallel
2. Verification: two checkers review the analysts' output
3. Synthesis: a synthesizer writes the final recommendation

Configuration files are loaded from (in priority order):
1. SWARM_<SECTION>__<KEY>  Environment variables
2. --config <path>         Explicit config file
3. ./swarm.toml            Project-level config
4. ~/.config/decision-swarm/config.toml   Global config

Example:
  decision-swarm serve
  decision-swarm ask "Should I switch careers into data science?"
  decision-swarm ask --server http://127.0.0.1:8787 --followups "Rent or buy?"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to a daily-rotated file in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Address to bind (overrides server.bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Analyze a question and print the result
    Ask {
        /// The question to analyze
        query: String,

        /// Stream from a running server instead of calling the gateway directly
        #[arg(long, value_name = "URL")]
        server: Option<String>,

        /// Also suggest three follow-up questions
        #[arg(long)]
        followups: bool,

        /// Print the raw events as JSON lines
        #[arg(long)]
        json: bool,

        /// Suppress the progress spinner
        #[arg(short, long)]
        quiet: bool,
    },

    /// List or clear past analyses
    History {
        /// Remove all stored entries
        #[arg(long)]
        clear: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ask() {
        let cli = Cli::parse_from([
            "decision-swarm",
            "-vv",
            "ask",
            "--followups",
            "--server",
            "http://localhost:8787",
            "Rent or buy?",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Ask {
                query,
                server,
                followups,
                json,
                quiet,
            }) => {
                assert_eq!(query, "Rent or buy?");
                assert_eq!(server.as_deref(), Some("http://localhost:8787"));
                assert!(followups);
                assert!(!json);
                assert!(!quiet);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["decision-swarm", "history", "--clear", "--no-config"]);
        assert!(cli.no_config);
        assert!(matches!(cli.command, Some(Command::History { clear: true })));
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::parse_from(["decision-swarm", "--show-config"]);
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
