//! Base configuration structures and utilities
//! 基础配置结构和工具

use serde::{Deserialize, Deserializer, Serialize};

/// Scalars that may stand in for a string setting
/// 可作为字符串配置值的标量
///
/// Environment values are typed by figment, so `APPLETREE_DISPLAY__ID=42`
/// arrives as a number rather than `"42"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringLike {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl From<StringLike> for String {
    fn from(value: StringLike) -> Self {
        match value {
            StringLike::Str(s) => s,
            StringLike::Int(n) => n.to_string(),
            StringLike::UInt(n) => n.to_string(),
            StringLike::Float(n) => n.to_string(),
            StringLike::Bool(b) => b.to_string(),
        }
    }
}

/// Deserialize a string, accepting numbers and booleans as their text form
/// 反序列化字符串，数字和布尔值按其文本形式接受
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringLike::deserialize(deserializer).map(String::from)
}

/// Optional variant of [`deserialize_lenient_string`]
pub fn deserialize_lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringLike>::deserialize(deserializer).map(|v| v.map(String::from))
}

/// Base logging configuration / 基础日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Log level / 日志级别
    pub level: String,
    /// Log format (pretty, compact, json) / 日志格式
    pub format: String,
    /// Log output file / 日志输出文件
    #[serde(default, deserialize_with = "deserialize_lenient_opt_string")]
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Convert to the common LoggingConfig used by init_tracing
    /// 转换为init_tracing使用的通用LoggingConfig
    pub fn to_logging_config(&self) -> crate::config::LoggingConfig {
        crate::config::LoggingConfig {
            level: self.level.clone(),
            format: self.format.clone(),
            file_enabled: self.file.is_some(),
            file_path: self.file.as_ref().map(std::path::PathBuf::from),
        }
    }
}
