//! Logging system initialization
//!
//! Sets up the tracing subscriber from the loaded configuration: level
//! filter, text or JSON formatting, and optional file output with daily
//! rotation.

use crate::config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

/// 根据配置构建日志写入端
///
/// 未配置文件或文件名为空时输出到控制台；配置了文件且开启轮转时
/// 使用按天滚动的日志文件，保留 `max_backups` 份。
fn build_writer(config: &LoggingConfig) -> Box<dyn std::io::Write + Send + Sync> {
    let Some(log_file) = config.file.as_deref().filter(|f| !f.is_empty()) else {
        return Box::new(std::io::stdout());
    };

    let path = std::path::Path::new(log_file);

    if config.enable_rotation {
        let dir = path.parent().unwrap_or(std::path::Path::new("."));
        let prefix = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("affistats.log")
            .trim_end_matches(".log");
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(prefix)
            .filename_suffix("log")
            .max_log_files(config.max_backups as usize)
            .build(dir)
            .expect("Failed to create rolling log appender");
        return Box::new(appender);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .expect("Failed to open log file");
    Box::new(file)
}

/// Initialize the logging system
///
/// Call once during application startup, after `init_config()`.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// # Panics
/// * If the log file/appender cannot be created
/// * If a global subscriber is already installed
pub fn init_logging(config: &LoggingConfig) -> WorkerGuard {
    let to_console = config.file.as_deref().is_none_or(|f| f.is_empty());

    let (writer, guard) = tracing_appender::non_blocking(build_writer(config));
    let filter = tracing_subscriber::EnvFilter::new(config.level.clone());

    let builder = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_level(true)
        // 写文件时关掉 ANSI 转义
        .with_ansi(to_console);

    if config.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    guard
}
