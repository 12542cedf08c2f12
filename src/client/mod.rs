//! Appletree account API client
//! Appletree账户API客户端
//!
//! Fires fixed account requests at the Appletree API and renders each raw
//! response into a display target after a delay.
//! 向Appletree API发送固定的账户请求，并在延迟后将原始响应渲染到显示目标。
//!
//! ## Module Structure / 模块结构
//!
//! - `config`: layered client configuration / 分层客户端配置
//! - `operations`: the fixed operations and their literal payloads / 固定操作及字面量请求体
//! - `request`: method, URL and JSON body of one call / 单次调用的方法、URL与JSON请求体
//! - `display`: output surfaces / 输出区域
//! - `runner`: dispatch, delay and render / 发送、延迟与渲染
//! - `error`: setup errors / 初始化错误

pub mod config;
pub mod display;
pub mod error;
pub mod operations;
pub mod request;
pub mod runner;


// Re-export commonly used types / 重新导出常用类型
pub use config::{ClientConfig, CliArgs, Command, DisplayKind};
pub use display::{build_display, ConsoleDisplay, DisplayTarget, FileDisplay, MemoryDisplay};
pub use error::{ClientError, ClientResult};
pub use operations::Operation;
pub use request::{JsonBody, Method, RequestSpec};
pub use runner::{PendingDisplay, RequestRunner, Settlement};
