//! Constants used throughout the client
//! 客户端中使用的常量

/// API host the browser page talked to / 浏览器页面访问的API地址
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Delay between settle and display write, in milliseconds
/// 请求完成到写入显示之间的延迟（毫秒）
pub const DEFAULT_DISPLAY_DELAY_MS: u64 = 4000;

/// Identifier of the single output region / 唯一输出区域的标识
pub const DEFAULT_DISPLAY_ID: &str = "fetch-result";

/// Environment variable prefix for configuration / 配置环境变量前缀
pub const ENV_PREFIX: &str = "APPLETREE_";

/// Overrides `$HOME` when locating `.appletree/config.toml`
/// 定位 `.appletree/config.toml` 时用于覆盖 `$HOME`
pub const HOME_ENV: &str = "APPLETREE_HOME";

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// API paths / API路径
pub mod paths {
    pub const HEALTHCHECK: &str = "/api/v1/healthcheck";
    pub const REGISTER_USER: &str = "/api/v1/register/user";
    pub const ACTIVATE_USER: &str = "/api/v1/users/activated";
    pub const PASSWORD_RESET: &str = "/api/v1/tokens/password-reset";
}
