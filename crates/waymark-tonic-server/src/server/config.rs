//! Command-line arguments and validated runtime configuration.

use clap::Parser;
use std::path::PathBuf;

/// Command-line and environment configuration for the server binary.
///
/// Every flag can also be provided through a `WAYMARK_*` environment
/// variable, including from a `.env` file.
#[derive(Debug, Clone, Parser)]
#[command(name = "waymark-tonic-server", version, about = "gRPC route guide server")]
pub struct CliArgs {
    /// Address to listen on: `host:port`, or a socket path with `--uds`.
    #[arg(long, env = "WAYMARK_ADDR", default_value = "127.0.0.1:8980")]
    pub addr: String,

    /// Serve on a Unix domain socket instead of TCP.
    #[arg(long, env = "WAYMARK_UDS", default_value_t = false)]
    pub uds: bool,

    /// Path to the feature database (`route_guide_db.json` format).
    #[arg(long, env = "WAYMARK_DB", default_value = "data/route_guide_db.json")]
    pub db: PathBuf,

    /// Capacity of the per-call response channels; bounds how far a
    /// streaming handler can run ahead of a slow reader.
    #[arg(long, env = "WAYMARK_STREAM_BUFFER", default_value_t = 32)]
    pub stream_buffer_size: usize,
}

/// Validated runtime configuration derived from [`CliArgs`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: String,
    pub uds: bool,
    pub db_path: PathBuf,
    pub stream_buffer_size: usize,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.addr.is_empty() {
            anyhow::bail!("listen address must not be empty");
        }
        if args.stream_buffer_size == 0 {
            anyhow::bail!("stream buffer size must be greater than 0");
        }

        Ok(Self {
            server_addr: args.addr,
            uds: args.uds,
            db_path: args.db,
            stream_buffer_size: args.stream_buffer_size,
        })
    }
}
