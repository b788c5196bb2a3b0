use clap::Parser;
use std::path::PathBuf;

#[cfg(unix)]
pub const DEFAULT_CONFIG_PATH: &str = "/etc/namecheap-ddns.yaml";
#[cfg(not(unix))]
pub const DEFAULT_CONFIG_PATH: &str = "namecheap-ddns.yaml";

#[derive(Parser, Debug, Clone)]
#[command(name = "namecheap-ddns", about, version, long_about = None)]
pub struct Arguments {
    #[arg(
        short = 'c',
        long = "config",
        default_value = DEFAULT_CONFIG_PATH,
        help = "Path to the configuration file"
    )]
    pub config_path: PathBuf,
}
