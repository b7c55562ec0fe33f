//! himex-web server binary

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use himex_web::{config::SiteConfig, observability, server};

const SERVICE_NAME: &str = "himex-web";

#[derive(Parser)]
#[command(name = SERVICE_NAME)]
#[command(version)]
#[command(about = "Himex Logistic website and contact-form relay", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the standard search locations)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init()?;

    let config = match cli.config {
        Some(path) => SiteConfig::load_from(path)?,
        None => SiteConfig::load_for_service(SERVICE_NAME)?,
    };

    server::serve(config).await?;

    Ok(())
}
