//! Utilities: logging setup and verbosity mapping.
//!
//! Key items:
//!   init_logging / derive_level

/// Logging helpers.
///
/// Everything goes to stderr: stdout belongs to the MCP stdio transport.
pub mod logging {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::filter::LevelFilter;

    /// `-q` wins over any number of `-v`.
    pub fn derive_level(verbose: u8, quiet: bool) -> LevelFilter {
        if quiet {
            return LevelFilter::ERROR;
        }
        match verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// `RUST_LOG` takes over when set; otherwise `level` applies to this crate.
    pub fn filter_for(level: LevelFilter) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy()
    }

    /// Install the global subscriber. A second call is a no-op.
    pub fn init_logging(level: LevelFilter) {
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter_for(level))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
        if installed.is_err() {
            tracing::debug!("logging already initialised");
        }
    }
}

pub use logging::{derive_level, init_logging};
