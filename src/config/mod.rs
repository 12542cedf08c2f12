//! Logging setup shared by the library and the command-line client
//! 库与命令行客户端共享的日志设置
//!
//! Log lines go to stderr so that the console display target keeps stdout
//! for rendered results. An optional file sink mirrors every line.
//! 日志写入stderr，使控制台显示目标独占stdout。可选的文件输出会镜像所有日志行。

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::Layered;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Base configuration shared by all applications / 所有应用程序共享的基础配置
pub mod base;
pub use base::*;

/// Common logging configuration / 通用日志配置
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) / 日志级别
    pub level: String,
    /// Log format (json, compact, pretty) / 日志格式
    pub format: String,
    /// Enable file logging / 启用文件日志
    pub file_enabled: bool,
    /// Log file path / 日志文件路径
    pub file_path: Option<PathBuf>,
}

static FILE_LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file_enabled: false,
            file_path: None,
        }
    }
}

type FilteredRegistry = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<FilteredRegistry> + Send + Sync + 'static>;

fn format_layer<W>(format: &str, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true)
        .with_ansi(ansi)
        .with_writer(writer);
    match format {
        "json" => layer.json().boxed(),
        "compact" => layer.compact().boxed(),
        _ => layer.pretty().boxed(),
    }
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if level.trim().is_empty() {
            EnvFilter::new("info")
        } else {
            EnvFilter::new(level)
        }
    })
}

/// Initialize tracing based on logging configuration
/// 基于日志配置初始化跟踪
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::layer::SubscriberExt;

    let mut layers: Vec<BoxedLayer> = vec![format_layer(
        config.format.as_str(),
        std::io::stderr,
        true,
    )];

    if config.file_enabled {
        if let Some(path) = config.file_path.as_ref() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create log dir: {}", parent.display()))?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file: {}", path.display()))?;
            let (file_writer, guard) = tracing_appender::non_blocking(file);
            let _ = FILE_LOG_GUARD.set(guard);
            // Files get json or compact lines, never the multi-line pretty form
            let file_format = if config.format == "json" { "json" } else { "compact" };
            layers.push(format_layer(file_format, file_writer, false));
        }
    }

    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(layers)
        .try_init()
        .context("install tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.level, "info");
        assert_eq!(cfg.format, "pretty");
        assert!(!cfg.file_enabled);
        assert!(cfg.file_path.is_none());
    }
}
