use calc_tools::utils::logger::{self, LogFormat};
use calc_tools::utils::validation::Validate;
use calc_tools::{CliConfig, Command, ServerInfo, StdioServer, TomlConfig, ToolRegistry};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入配置
    let config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        },
        None => TomlConfig::default(),
    };

    // 初始化日誌
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        config.logging.log_format()
    };
    logger::init_cli_logger(cli.verbose, Some(&config.logging.level), format);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli, config).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(cli: &CliConfig, config: TomlConfig) -> calc_tools::Result<()> {
    config.validate()?;
    let registry = ToolRegistry::from_config(&config.tools)?;

    match &cli.command {
        Command::Serve => {
            let server = StdioServer::new(registry, ServerInfo::from_config(&config));
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            server.run(stdin, tokio::io::stdout()).await
        }
        Command::List => {
            for spec in registry.specs() {
                println!("{}  {}", spec.signature(), spec.description);
            }
            Ok(())
        }
        Command::Call { tool, values } => {
            let output = registry.call_positional(tool, values).await?;
            println!("{}", output.value);
            Ok(())
        }
    }
}
