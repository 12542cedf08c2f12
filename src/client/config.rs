//! Appletree client configuration / Appletree客户端配置
//!
//! Sources, lowest to highest priority / 配置来源（优先级从低到高）:
//! 1. built-in defaults / 内置默认值
//! 2. TOML file (`--config`, else `~/.appletree/config.toml`) / TOML配置文件
//! 3. `APPLETREE_*` environment variables, `__` separates sections / 环境变量
//! 4. command line flags / 命令行参数

use clap::{Parser, Subcommand, ValueEnum};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::client::error::{ClientError, ClientResult};
use crate::client::operations::Operation;
use crate::config::base::{
    deserialize_lenient_opt_string, deserialize_lenient_string, LogConfig,
};
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_DISPLAY_DELAY_MS, DEFAULT_DISPLAY_ID, ENV_PREFIX, HOME_ENV,
};

/// Appletree client command line arguments / Appletree客户端命令行参数
#[derive(Parser, Debug, Clone)]
#[command(
    name = "appletree-client",
    version = "0.1.0",
    about = "Appletree account API client\nAppletree账户API客户端",
    long_about = "Fires the fixed account requests (register, activate, password reset) at the Appletree API and shows each raw response after a delay.\n向Appletree API发送固定的账户请求，并在延迟后显示原始响应。"
)]
pub struct CliArgs {
    /// Configuration file path / 配置文件路径
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Configuration file path / 配置文件路径"
    )]
    pub config: Option<String>,

    /// API base URL / API基础地址
    #[arg(
        long,
        value_name = "URL",
        help = "API base URL (e.g., http://localhost:4000) / API基础地址"
    )]
    pub base_url: Option<String>,

    /// Display delay in milliseconds / 显示延迟（毫秒）
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Display target / 显示目标
    #[arg(long, value_enum, value_name = "TARGET")]
    pub display: Option<DisplayKind>,

    /// File for the file display target / 文件显示目标的路径
    #[arg(long, value_name = "PATH")]
    pub display_file: Option<String>,

    /// Log level / 日志级别
    #[arg(
        long,
        value_name = "LEVEL",
        help = "Log level (trace, debug, info, warn, error) / 日志级别"
    )]
    pub log_level: Option<String>,

    /// Log format / 日志格式
    #[arg(
        long,
        value_name = "FORMAT",
        help = "Log format (pretty, compact, json) / 日志格式"
    )]
    pub log_format: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Client subcommands / 客户端子命令
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Register the fixed user / 注册固定用户
    Register,
    /// Activate the account / 激活账户
    Activate,
    /// Request a password reset token / 请求密码重置令牌
    ResetRequest,
    /// Reset the password / 重置密码
    Reset,
    /// Query the API health check / 查询API健康检查
    Health,
    /// Fire all four account requests without waiting between them / 连续发送四个账户请求
    All,
}

impl Command {
    pub fn operations(self) -> &'static [Operation] {
        match self {
            Command::Register => &[Operation::Registration],
            Command::Activate => &[Operation::Activation],
            Command::ResetRequest => &[Operation::PasswordResetRequest],
            Command::Reset => &[Operation::PasswordReset],
            Command::Health => &[Operation::HealthCheck],
            Command::All => &Operation::ACCOUNT,
        }
    }
}

/// Where settled results are rendered / 结果渲染位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayKind {
    #[default]
    Console,
    File,
    Memory,
}

/// API endpoint configuration / API端点配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every path is appended to / 所有路径拼接的基础URL
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Parse and check the base URL / 解析并检查基础URL
    pub fn parsed_base_url(&self) -> ClientResult<Url> {
        let raw = self.base_url.trim();
        let url = Url::parse(raw).map_err(|source| ClientError::InvalidBaseUrl {
            url: raw.to_string(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ClientError::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }
}

/// Display configuration / 显示配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Surface identifier / 输出区域标识
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub id: String,
    pub target: DisplayKind,
    /// Wait between settle and render, 0 disables / 完成到渲染的等待时间，0表示不等待
    pub delay_ms: u64,
    /// Required when `target = "file"` / `target = "file"` 时必填
    #[serde(default, deserialize_with = "deserialize_lenient_opt_string")]
    pub file_path: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_DISPLAY_ID.to_string(),
            target: DisplayKind::Console,
            delay_ms: DEFAULT_DISPLAY_DELAY_MS,
            file_path: None,
        }
    }
}

impl DisplayConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Appletree client configuration / Appletree客户端配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub display: DisplayConfig,
    /// Logging configuration / 日志配置
    pub log: LogConfig,
}

impl ClientConfig {
    /// Load configuration with CLI arguments / 使用CLI参数加载配置
    pub fn load_with_cli(args: &CliArgs) -> ClientResult<Self> {
        let mut config: ClientConfig = Self::figment(args)?.extract()?;
        config.apply_cli(args);
        config.validate()?;
        Ok(config)
    }

    /// Defaults, file and environment layers / 默认值、文件与环境变量层
    pub fn figment(args: &CliArgs) -> ClientResult<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(ClientConfig::default()));

        match &args.config {
            // An explicit path must exist / 显式指定的路径必须存在
            Some(path) => {
                std::fs::metadata(path)?;
                figment = figment.merge(Toml::file(path));
            }
            None => {
                if let Some(home_path) = home_config_path().filter(|p| p.exists()) {
                    figment = figment.merge(Toml::file(home_path));
                }
            }
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Override with CLI arguments / 使用CLI参数覆盖
    pub fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(base_url) = &args.base_url {
            self.api.base_url = base_url.clone();
        }
        if let Some(delay_ms) = args.delay_ms {
            self.display.delay_ms = delay_ms;
        }
        if let Some(target) = args.display {
            self.display.target = target;
        }
        if let Some(path) = &args.display_file {
            self.display.file_path = Some(path.clone());
        }
        if let Some(level) = &args.log_level {
            self.log.level = level.clone();
        }
        if let Some(format) = &args.log_format {
            self.log.format = format.clone();
        }
    }

    /// Validate the configuration / 验证配置
    pub fn validate(&self) -> ClientResult<()> {
        self.api.parsed_base_url()?;
        if self.display.id.trim().is_empty() {
            return Err(ClientError::InvalidSetting {
                message: "display.id must not be empty".to_string(),
            });
        }
        if self.display.target == DisplayKind::File
            && self
                .display
                .file_path
                .as_deref()
                .map_or(true, |p| p.trim().is_empty())
        {
            return Err(ClientError::InvalidSetting {
                message: "display.file_path is required for the file target".to_string(),
            });
        }
        Ok(())
    }
}

/// `~/.appletree/config.toml`, with `APPLETREE_HOME` taking precedence over `HOME`
fn home_config_path() -> Option<PathBuf> {
    let base_home = std::env::var_os(HOME_ENV).or_else(|| std::env::var_os("HOME"))?;
    Some(
        PathBuf::from(base_home)
            .join(".appletree")
            .join("config.toml"),
    )
}
