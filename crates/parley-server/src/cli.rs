use std::path::PathBuf;

use clap::Parser;

/// Parley: voice assistant skill backend.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about)]
pub struct Args {
    /// Config file path override (also read from PARLEY_CONFIG).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Port override; takes precedence over [server].port.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log filter override (e.g. debug, parley_skill=trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
