use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "idea-feed")]
#[command(about = "Serves Airtable tables as a combined RSS feed", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Airtable personal access token
    #[arg(long, env = "AIRTABLE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Airtable base to pull tables from
    #[arg(long, default_value = server::config::DEFAULT_BASE_ID)]
    base_id: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;

    let mut config = server::Config::new(cli.token);
    config.base_id = cli.base_id;

    server::run_server(addr, config).await
}
