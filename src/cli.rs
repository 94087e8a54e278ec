use clap::Parser;
use std::path::PathBuf;

use catalogue_monitor::config::ConfigOverrides;

/// Serve the service catalogue monitor dashboard API
#[derive(Parser, Debug)]
#[command(name = "catalogue-monitor")]
#[command(version)]
#[command(
    about = "Aggregate environment health from the service catalogue and serve event streams",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./catalogue-monitor.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:3000
    #[arg(short, long, env = "CATALOGUE_MONITOR_BIND", value_name = "ADDR")]
    pub bind: Option<String>,

    /// Base URL of the service catalogue API
    #[arg(long, env = "SERVICE_CATALOGUE_URL", value_name = "URL")]
    pub catalogue_url: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            bind_address: self.bind.clone(),
            catalogue_url: self.catalogue_url.clone(),
        }
    }
}
