//! Logger initialization.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

const RUST_LOG_ENV: &str = "RUST_LOG";

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. `RUST_LOG` is read first and
/// the explicit `level` then overrides its default level and this crate's
/// directive. HTTP dependencies are capped at `info` only when `RUST_LOG` is
/// unset, so `RUST_LOG=reqwest=debug` still works for dependency debugging.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug referer-parser "http://www.google.com/search?q=rust"
/// referer-parser "http://t.co/abc" --log-level info --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    if std::env::var_os(RUST_LOG_ENV).is_none() {
        for module in ["reqwest", "hyper", "hyper_util"] {
            builder.filter_module(module, LevelFilter::Info);
        }
    }
    builder.filter_module("referer_parser", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| write_json(buf, record));
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // Logs go to stderr so stdout carries only the attribution JSON
    builder.target(env_logger::Target::Stderr);

    // try_init() so a second initialization (tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// One JSON object per record: `ts` (epoch millis), `level`, `target`, `msg`.
fn write_json(out: &mut dyn Write, record: &log::Record) -> std::io::Result<()> {
    writeln!(
        out,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":{},\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        serde_json::to_string(record.target()).unwrap_or_else(|_| "\"\"".into()),
        serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        // Only one logger can be installed per process
        assert!(first.is_err() || second.is_err());
    }

    #[test]
    fn test_json_format_is_one_parseable_object_per_record() {
        let mut out = Vec::new();
        write_json(
            &mut out,
            &log::Record::builder()
                .args(format_args!("Serving \"cached\" catalog\nfrom disk"))
                .level(log::Level::Warn)
                .target("referer_parser::catalog")
                .build(),
        )
        .unwrap();

        let line = String::from_utf8(out).unwrap();
        assert!(line.ends_with('\n'));
        assert_eq!(line.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["target"], "referer_parser::catalog");
        assert_eq!(value["msg"], "Serving \"cached\" catalog\nfrom disk");
        assert!(value["ts"].as_i64().unwrap() > 0);
    }
}
