//! 日志初始化模块.
//!
//! 双输出:
//! - console: 彩色, 写到 stderr, 避免污染 stdout 上的探测结果 (JSON)
//! - file: 无色, 默认 info, 可通过 -v/-vv 或 HALCOLOR_LOG 环境变量调整
//!
//! 日志文件输出到 {directory}/{prefix}.{date}.log, 按天滚动.
//! halcolor-core 通过 `log` 门面输出, 由 tracing-subscriber 的 log 桥接收集.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, FormatEvent, FormatFields, format::Writer},
    layer::{Layer, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// 覆盖文件日志过滤规则的环境变量
pub const LOG_ENV: &str = "HALCOLOR_LOG";

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 文件日志过滤规则 (EnvFilter 语法)
    #[serde(default = "default_level")]
    pub level: String,
    /// 控制台日志过滤规则
    #[serde(default = "default_console_level")]
    pub console_level: String,
    /// 日志目录
    #[serde(default = "default_directory")]
    pub directory: String,
    /// 日志文件前缀
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_console_level() -> String {
    "warn".to_string()
}

fn default_directory() -> String {
    "logs".to_string()
}

fn default_file_prefix() -> String {
    "halcolor-probe".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            console_level: default_console_level(),
            directory: default_directory(),
            file_prefix: default_file_prefix(),
        }
    }
}

impl LoggingConfig {
    /// 由命令行参数构造
    ///
    /// - `verbosity`: 0=info, 1=debug, 2+=trace (由 -v/-vv 控制), 同时作用于控制台
    /// - `quiet`: 控制台只输出 error
    pub fn from_cli(directory: &str, verbosity: u8, quiet: bool) -> Self {
        let level = match verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        let console_level = if quiet {
            "error"
        } else {
            match verbosity {
                0 => "warn",
                _ => level,
            }
        };
        Self {
            level: level.to_string(),
            console_level: console_level.to_string(),
            directory: directory.to_string(),
            ..Self::default()
        }
    }
}

/// 初始化日志系统
pub fn init(config: &LoggingConfig) -> Result<()> {
    std::fs::create_dir_all(&config.directory)
        .with_context(|| format!("创建日志目录失败, path={}", config.directory))?;

    let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .filename_prefix(&config.file_prefix)
        .filename_suffix("log")
        .build(&config.directory)
        .with_context(|| format!("创建日志文件失败, directory={}", config.directory))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    LOG_GUARD.set(guard).ok();

    let console_layer = fmt::Layer::default()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .event_format(ConsoleFormatter)
        .with_filter(EnvFilter::new(&config.console_level));

    // File: HALCOLOR_LOG 环境变量可覆盖
    let file_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_layer = fmt::Layer::default()
        .with_writer(non_blocking)
        .with_ansi(false)
        .event_format(FileFormatter)
        .with_filter(file_filter);

    Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("日志系统已初始化")?;
    Ok(())
}

/// 时间戳前缀 `[MM-DD HH:MM:SS.mmm]`
fn write_timestamp(writer: &mut Writer<'_>) -> std::fmt::Result {
    let now = Local::now();
    write!(
        writer,
        "[{:02}-{:02} {:02}:{:02}:{:02}.{:03}] ",
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
        now.timestamp_subsec_millis()
    )
}

/// Console 格式: 彩色级别
struct ConsoleFormatter;

impl<S, N> FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let color = match *meta.level() {
            tracing::Level::ERROR => "\x1b[31m",
            tracing::Level::WARN => "\x1b[33m",
            tracing::Level::INFO => "\x1b[32m",
            _ => "\x1b[34m",
        };
        write_timestamp(&mut writer)?;
        write!(writer, "{}{:5}\x1b[0m > ", color, meta.level())?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// File 格式: 无色, 带源码位置
struct FileFormatter;

impl<S, N> FormatEvent<S, N> for FileFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write_timestamp(&mut writer)?;
        write!(
            writer,
            "{:5} {}:{} > ",
            meta.level(),
            meta.file().unwrap_or("unknown"),
            meta.line().unwrap_or(0)
        )?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
