use chrono;
use colored::Colorize;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct LogConfig {
    level: LevelFilter,
    format_json: bool,
    file_path: Option<String>,
    color_enabled: bool,
}

/// Reconfigurable console/file logger for the demo harness
struct BootstrapLogger {
    config: Arc<Mutex<LogConfig>>,
    file_writer: Arc<Mutex<Option<File>>>,
}

fn parse_level(level: Option<&str>) -> LevelFilter {
    match level {
        Some(level_str) => match level_str.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        },
        None => LevelFilter::Info,
    }
}

impl BootstrapLogger {
    fn new() -> Self {
        Self {
            config: Arc::new(Mutex::new(LogConfig {
                level: LevelFilter::Info,
                format_json: false,
                file_path: None,
                color_enabled: true,
            })),
            file_writer: Arc::new(Mutex::new(None)),
        }
    }

    fn reconfigure(
        &self,
        log_level: Option<&str>,
        log_format: Option<&str>,
        log_file: Option<&str>,
        color_enabled: bool,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let level = parse_level(log_level);
        let format_json = log_format == Some("json");
        let file_path = log_file.map(|s| s.to_string());

        match &file_path {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                *self.file_writer.lock().unwrap() = Some(file);
            }
            None => {
                *self.file_writer.lock().unwrap() = None;
            }
        }

        *self.config.lock().unwrap() = LogConfig {
            level,
            format_json,
            file_path,
            color_enabled,
        };

        log::set_max_level(level);

        Ok(())
    }

    fn format_json_message(record: &Record) -> String {
        serde_json::json!({
            "timestamp": chrono::Local::now().to_rfc3339(),
            "level": record.level().to_string(),
            "target": record.target(),
            "message": record.args().to_string(),
        })
        .to_string()
    }

    fn format_console_message(record: &Record, config: &LogConfig) -> String {
        if config.format_json {
            Self::format_json_message(record)
        } else {
            let level = if config.color_enabled {
                let text = record.level().to_string();
                match record.level() {
                    log::Level::Error => text.red().to_string(),
                    log::Level::Warn => text.yellow().to_string(),
                    log::Level::Info => text.green().to_string(),
                    log::Level::Debug => text.blue().to_string(),
                    log::Level::Trace => text.magenta().to_string(),
                }
            } else {
                record.level().to_string()
            };

            format!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.target(),
                level,
                record.args()
            )
        }
    }

    fn format_file_message(record: &Record, config: &LogConfig) -> String {
        if config.format_json {
            Self::format_json_message(record)
        } else {
            format!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.target(),
                record.level(),
                record.args()
            )
        }
    }
}

impl Log for BootstrapLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let config = self.config.lock().unwrap();
        metadata.level() <= config.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let config = self.config.lock().unwrap();

        let console_message = Self::format_console_message(record, &config);
        println!("{}", console_message);

        if config.file_path.is_some() {
            if let Ok(mut file_opt) = self.file_writer.lock() {
                if let Some(ref mut file) = file_opt.as_mut() {
                    let file_message = Self::format_file_message(record, &config);
                    let _ = writeln!(file, "{}", file_message);
                    let _ = file.flush();
                }
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file_opt) = self.file_writer.lock() {
            if let Some(ref mut file) = file_opt.as_mut() {
                let _ = file.flush();
            }
        }
    }
}

// Global static logger
static LOGGER: std::sync::OnceLock<BootstrapLogger> = std::sync::OnceLock::new();

pub fn init_logging(
    log_level: Option<&str>,
    log_format: Option<&str>,
    log_file: Option<&str>,
    color_enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let logger = LOGGER.get_or_init(BootstrapLogger::new);

    // Set as the global logger (only works once)
    log::set_logger(logger)?;

    logger.reconfigure(log_level, log_format, log_file, color_enabled)?;

    Ok(())
}

pub fn reconfigure_logging(
    log_level: Option<&str>,
    log_format: Option<&str>,
    log_file: Option<&str>,
    color_enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(logger) = LOGGER.get() {
        logger.reconfigure(log_level, log_format, log_file, color_enabled)?;
        Ok(())
    } else {
        Err("Logger is not initialised. Call init_logging first.".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_parse_level_accepts_known_names() {
        assert_eq!(parse_level(Some("trace")), LevelFilter::Trace);
        assert_eq!(parse_level(Some("WARN")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("off")), LevelFilter::Off);
    }

    #[test]
    fn test_parse_level_defaults_to_info() {
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("verbose")), LevelFilter::Info);
    }

    #[test]
    fn test_json_format_escapes_message() {
        // The record must be built and used in one statement: it borrows the
        // format_args! temporary.
        let line = BootstrapLogger::format_json_message(
            &log::Record::builder()
                .args(format_args!("quoted \"value\""))
                .level(log::Level::Info)
                .target("plugkit::test")
                .build(),
        );

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["message"], "quoted \"value\"");
        assert_eq!(parsed["level"], "INFO");
    }

    #[test]
    fn test_file_output_without_global_registration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bootstrap.log");
        let path_str = path.to_string_lossy().to_string();

        let logger = BootstrapLogger::new();
        logger
            .reconfigure(Some("debug"), None, Some(&path_str), false)
            .unwrap();

        logger.log(
            &log::Record::builder()
                .args(format_args!("reload pass complete"))
                .level(log::Level::Info)
                .target("plugkit::reload")
                .build(),
        );
        logger.flush();

        let mut contents = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert!(contents.contains("reload pass complete"));
        assert!(contents.contains("plugkit::reload"));
    }
}
