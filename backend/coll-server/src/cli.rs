use coll_config::LogLevel;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "coll-server")]
#[command(about = "WebSocket endpoint with a concurrent connection limit")]
#[command(version)]
pub struct Cli {
    /// Config file name to read (default: ~/.config/coll_server/coll_server.cfg.json)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Connection limit (0 = unlimited)
    #[arg(short = 'l', long = "limit", default_value_t = 0)]
    pub limit: usize,

    /// Log level override: off, error, warn, info, debug, trace
    #[arg(long)]
    pub log_level: Option<LogLevel>,
}
