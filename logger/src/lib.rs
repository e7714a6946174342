//! Default logging setup for binaries and tests using `list_map`
#![warn(missing_docs)]

use std::{io::Write, sync::Mutex, time::Instant};

/// Environment variable holding the `env_logger` filter, defaults to `info`.
pub const FILTER_ENV: &str = "LIST_MAP_LOG";
/// Environment variable controlling colored output (`auto`, `always` or `never`).
pub const STYLE_ENV: &str = "LIST_MAP_LOG_STYLE";

const TIMESTAMP_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::BrightBlack)));

const TARGET_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Magenta)));

fn builder(is_test: bool) -> env_logger::Builder {
    let start_time = Instant::now();
    let last_target = Mutex::new(String::new());

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or(FILTER_ENV, "info")
            .write_style(STYLE_ENV),
    );
    builder.is_test(is_test).format(move |buf, record| {
        let timestamp = start_time.elapsed();
        let level = record.level();
        let target = record.target();

        let mut last_target = last_target
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // only print the target when it changes
        if target != *last_target {
            last_target.clear();
            last_target.push_str(target);

            writeln!(
                buf,
                "{} {}",
                format_args!("{style}{timestamp:>9.2?}{style:#}", style = TIMESTAMP_STYLE),
                format_args!("{style}{target}{style:#}", style = TARGET_STYLE)
            )?;
        }
        writeln!(
            buf,
            "{} {} {}",
            format_args!("{style}{timestamp:>9.2?}{style:#}", style = TIMESTAMP_STYLE),
            format_args!(
                "{style}{level}{style:#}",
                style = buf.default_level_style(level),
            ),
            record.args(),
        )
    });
    builder
}

/// Perform the default logging setup.
///
/// Panics if a logger was already installed.
pub fn setup() {
    builder(false).init();
}

/// Perform the default logging setup for a test, doing nothing if a logger was already installed.
///
/// Output is captured by the test harness.
pub fn try_setup() {
    // several tests in one binary each call this, only the first one installs the logger
    builder(true).try_init().ok();
}
