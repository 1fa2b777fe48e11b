use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use handscore::{DuplicateNames, ScoringOptions};
use tracing::Level;

const DEFAULT_PORT: u16 = 3001;

/// Score calculator backend for the Hand card game.
#[derive(Debug, Parser)]
#[command(
    name = "handscore-server",
    author,
    version,
    about = "Stateless round score calculator for the Hand card game"
)]
pub struct Cli {
    /// Address to bind.
    #[arg(long, env = "HANDSCORE_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Fail rounds that repeat a player name instead of keeping the last score.
    #[arg(long, env = "HANDSCORE_REJECT_DUPLICATE_NAMES")]
    pub reject_duplicate_names: bool,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, value_name = "LEVEL", default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl Cli {
    /// Socket address the server binds to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Scoring options derived from the command line.
    pub fn scoring_options(&self) -> ScoringOptions {
        let policy = if self.reject_duplicate_names {
            DuplicateNames::Reject
        } else {
            DuplicateNames::Overwrite
        };
        ScoringOptions::default().with_duplicate_names(policy)
    }
}
