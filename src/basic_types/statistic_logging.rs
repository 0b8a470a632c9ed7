//! Responsible for behaviour related to logging statistics with a specific pre-fix and closing
//! lines.

use std::fmt::Display;

use once_cell::sync::OnceCell;

/// The options for statistic logging containing the statistic prefix, the (optional) line which
/// is printed after the statistics, and whether statistics should be logged at all.
#[derive(Clone, Copy, Debug, Default)]
struct StatisticOptions {
    log_statistics: bool,
    statistic_prefix: &'static str,
    after_statistics: Option<&'static str>,
}

static STATISTIC_OPTIONS: OnceCell<StatisticOptions> = OnceCell::new();

/// Configures the logging of statistics. Only the first call has an effect.
///
/// It specifies the (optional) prefix and a closing line (postfix) which can be written after all
/// of the statistics have been logged. Statistics are only printed when `log_statistics` is true.
pub fn configure(
    log_statistics: bool,
    statistic_prefix: &'static str,
    after_statistics: Option<&'static str>,
) {
    let _ = STATISTIC_OPTIONS.set(StatisticOptions {
        log_statistics,
        statistic_prefix,
        after_statistics,
    });
}

/// Logs the provided statistic with name `name` and value `value`. At the moment it will log in
/// the format `STATISTIC_PREFIX NAME=VALUE`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    if let Some(options) = STATISTIC_OPTIONS.get() {
        if options.log_statistics {
            println!("{}{name}={value}", options.statistic_prefix);
        }
    }
}

/// Logs the postfix of the statistics (if it has been set).
pub fn log_statistic_postfix() {
    if let Some(options) = STATISTIC_OPTIONS.get() {
        if let Some(after) = options.after_statistics {
            if options.log_statistics {
                println!("{after}");
            }
        }
    }
}

/// Returns whether statistics should be logged.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS
        .get()
        .is_some_and(|options| options.log_statistics)
}
