use colored::control::set_override;
use env_logger::Builder;
use log::LevelFilter;

/// Environment variable that overrides the log filter, e.g. `DUCKARGS_LOG=trace`.
pub const LOG_ENV: &str = "DUCKARGS_LOG";

/// Returns the default level for the given verbosity.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the logger. Log records go to stderr so they never mix with
/// generated code on stdout.
pub fn init_logging(verbose: bool, no_color: bool) {
    if no_color {
        set_override(false);
    }

    Builder::new()
        .filter_level(level_for(verbose))
        .format_timestamp(None)
        .format_target(false)
        .parse_env(LOG_ENV)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // The logger can only be initialized once per process, so only the level
    // selection is tested here.

    #[test]
    fn verbose_logs_debug() {
        assert_eq!(level_for(true), LevelFilter::Debug);
    }

    #[test]
    fn default_logs_info() {
        assert_eq!(level_for(false), LevelFilter::Info);
    }
}
