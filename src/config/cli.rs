use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "calc-tools")]
#[command(about = "Arithmetic tools served over MCP stdio or called from the shell")]
#[command(version)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the tools as JSON-RPC over stdin/stdout
    Serve,

    /// List the enabled tools and their parameters
    List,

    /// Call a tool once, binding values to its parameters in order
    Call {
        /// Tool name, e.g. `divide` or `squareRoot`
        tool: String,

        /// Numeric arguments; `nan`, `inf` and `-inf` are accepted
        #[arg(allow_negative_numbers = true, allow_hyphen_values = true)]
        values: Vec<f64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_call_with_negative_values() {
        let config =
            CliConfig::try_parse_from(["calc-tools", "call", "add", "-2.5", "4"]).unwrap();
        match config.command {
            Command::Call { tool, values } => {
                assert_eq!(tool, "add");
                assert_eq!(values, vec![-2.5, 4.0]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_call_with_negative_infinity() {
        let config =
            CliConfig::try_parse_from(["calc-tools", "call", "absolute", "-inf"]).unwrap();
        match config.command {
            Command::Call { tool, values } => {
                assert_eq!(tool, "absolute");
                assert_eq!(values, vec![f64::NEG_INFINITY]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config =
            CliConfig::try_parse_from(["calc-tools", "serve", "--verbose", "-c", "calc.toml"])
                .unwrap();
        assert!(config.verbose);
        assert_eq!(config.config.as_deref(), Some("calc.toml"));
        assert!(matches!(config.command, Command::Serve));
    }
}
