//! appletree-client: account API client for the Appletree reading community
//! appletree-client：Appletree阅读社区账户API客户端

// Shared modules / 共享模块
pub mod config;
pub mod constants;

// Client modules / 客户端模块
pub mod client;

// Re-exports / 重新导出
pub use client::{
    ClientConfig, ClientError, ClientResult, DisplayTarget, MemoryDisplay, Operation,
    PendingDisplay, RequestRunner, RequestSpec, Settlement,
};
