//! Tracing subscriber setup.
//!
//! ```bash
//! javelin -v render            # debug events from every crate
//! JAVELIN_LOG=javelin_codegen=trace javelin render
//! ```
//!
//! `JAVELIN_LOG` takes precedence over `RUST_LOG`; both use the `RUST_LOG`
//! directive syntax. Without either, only warnings are shown, or debug
//! (`-v`) and trace (`-vv`) output when asked for on the command line.

use tracing::Level;
use tracing_subscriber::EnvFilter;

fn default_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_filter(verbose: u8) -> EnvFilter {
    if let Ok(val) = std::env::var("JAVELIN_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::builder()
            .with_default_directive(default_level(verbose).into())
            .from_env_lossy()
    }
}

/// Install the global subscriber. Output goes to stderr so rendered Java on
/// stdout stays clean.
pub fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_from_verbosity() {
        assert_eq!(default_level(0), Level::WARN);
        assert_eq!(default_level(1), Level::DEBUG);
        assert_eq!(default_level(5), Level::TRACE);
    }
}
