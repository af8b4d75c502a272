use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SYNERGY_LOG";
const LOG_FILE: &str = "synergy.log";

/// Filter from `SYNERGY_LOG`, falling back to the configured level and then to `info`.
#[must_use]
pub fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Sends `tracing` output to a daily-rotated file in `dir`. The terminal
/// belongs to the UI, so nothing is written to stdout or stderr.
///
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init_file_logging(dir: &Path, level: &str) -> io::Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_level_falls_back() {
        let filter = build_filter("[[not a directive");
        assert!(!filter.to_string().is_empty());
    }
}
