use clap::Parser;

use blogsmith::config::BlogsmithConfig;
use blogsmith::http_server;
use blogsmith::logging::{init_logging, LogConfig};

#[derive(Debug, Parser)]
#[command(name = "blogsmith", version, about = "Template-driven blog post generation service")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "BLOGSMITH_CONFIG")]
    config: Option<String>,

    /// Bind address, overriding the configuration file
    #[arg(short, long, env = "BIND_ADDR")]
    bind: Option<String>,

    /// Log level, overriding the configuration file
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = BlogsmithConfig::load(cli.config.as_deref())?;

    if let Some(bind) = cli.bind {
        config.server.bind_addr = Some(bind);
    }
    if let Some(level) = cli.log_level {
        config.server.log_level = Some(level);
    }

    let log_config = LogConfig::from_server_config(&config.server);
    let _guard = init_logging(&log_config)?;

    let addr = config
        .server
        .bind_addr
        .as_deref()
        .unwrap_or("127.0.0.1:8080");

    http_server::serve(addr).await?;

    Ok(())
}
