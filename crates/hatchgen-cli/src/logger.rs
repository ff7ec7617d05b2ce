//! Minimal stderr logger for the `log` facade.
//!
//! stdout carries the hatch output, so every log record goes to stderr.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        eprintln!("[{} {}] {}", level, record.target(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Pick the log level from `-v`, `-vv` and `-q` anywhere in the arguments.
pub fn level_from_args(args: &[String]) -> LevelFilter {
    let mut level = LevelFilter::Info;
    for arg in args {
        level = match arg.as_str() {
            "-q" | "--quiet" => LevelFilter::Warn,
            "-v" | "--verbose" if level < LevelFilter::Debug => LevelFilter::Debug,
            "-v" | "--verbose" => LevelFilter::Trace,
            "-vv" => LevelFilter::Trace,
            _ => level,
        };
    }
    level
}

/// Install the logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
