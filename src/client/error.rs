//! Error types for client setup
//! 客户端初始化的错误类型
//!
//! Only construction and configuration can fail with these. Once a request is
//! dispatched its outcome is rendered, never returned.
//! 只有构造与配置阶段会返回这些错误。请求发出后，其结果只会被渲染，不会返回。

use thiserror::Error;

/// Appletree client error types / Appletree客户端错误类型
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration error / 配置错误
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    /// Base URL does not parse / 基础URL无法解析
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Base URL is not http or https / 基础URL不是http或https
    #[error("Unsupported base URL scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { scheme: String },

    /// HTTP client construction error / HTTP客户端构造错误
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error / IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid setting / 无效设置
    #[error("Invalid setting: {message}")]
    InvalidSetting { message: String },
}

/// Result type alias for client operations / 客户端操作的结果类型别名
pub type ClientResult<T> = Result<T, ClientError>;
