//! Display targets / 显示目标
//!
//! A display target is a single named surface. Every render overwrites what
//! was there before; concurrent renders are not ordered, the last one wins.
//! 显示目标是单个具名输出区域。每次渲染都会覆盖原有内容；并发渲染无序，最后一次生效。

use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::client::config::{DisplayConfig, DisplayKind};
use crate::client::error::{ClientError, ClientResult};

/// Output surface for settled results / 已完成结果的输出区域
#[async_trait]
pub trait DisplayTarget: Send + Sync {
    /// Identifier of the surface / 输出区域标识
    fn id(&self) -> &str;

    /// Replace the surface content with `text` / 用 `text` 替换输出区域内容
    async fn render(&self, text: &str) -> ClientResult<()>;
}

#[derive(Debug, Default)]
struct MemoryState {
    content: Option<String>,
    writes: u64,
}

/// In-process surface; clones share the same content
/// 进程内输出区域；克隆体共享同一内容
#[derive(Debug, Clone)]
pub struct MemoryDisplay {
    id: String,
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryDisplay {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: Arc::new(Mutex::new(MemoryState::default())),
        }
    }

    /// Latest rendered text, `None` before the first write
    /// 最近一次渲染的文本；首次写入前为 `None`
    pub fn content(&self) -> Option<String> {
        self.state.lock().content.clone()
    }

    /// Number of renders so far / 已渲染次数
    pub fn writes(&self) -> u64 {
        self.state.lock().writes
    }
}

#[async_trait]
impl DisplayTarget for MemoryDisplay {
    fn id(&self) -> &str {
        &self.id
    }

    async fn render(&self, text: &str) -> ClientResult<()> {
        let mut state = self.state.lock();
        state.content = Some(text.to_string());
        state.writes += 1;
        Ok(())
    }
}

/// Prints `[<id>] <text>` to stdout / 向stdout打印 `[<id>] <text>`
#[derive(Debug, Clone)]
pub struct ConsoleDisplay {
    id: String,
}

impl ConsoleDisplay {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Body is kept byte for byte; only the separator newline is added
    /// 响应体逐字节保留，仅追加分隔换行
    fn line(&self, text: &str) -> String {
        format!("[{}] {}\n", self.id, text)
    }
}

#[async_trait]
impl DisplayTarget for ConsoleDisplay {
    fn id(&self) -> &str {
        &self.id
    }

    async fn render(&self, text: &str) -> ClientResult<()> {
        use tokio::io::AsyncWriteExt;

        let line = self.line(text);
        let mut out = tokio::io::stdout();
        out.write_all(line.as_bytes()).await?;
        out.flush().await?;
        Ok(())
    }
}

/// Overwrites a file with the latest text / 用最新文本覆盖文件
///
/// Renders are serialized so the file always holds exactly one complete text.
/// 渲染串行执行，文件内容始终是某一次完整的文本。
#[derive(Debug, Clone)]
pub struct FileDisplay {
    id: String,
    path: PathBuf,
    write_lock: Arc<tokio::sync::Mutex<()>>,
}

impl FileDisplay {
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            write_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DisplayTarget for FileDisplay {
    fn id(&self) -> &str {
        &self.id
    }

    async fn render(&self, text: &str) -> ClientResult<()> {
        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, text.as_bytes()).await?;
        Ok(())
    }
}

/// Build the display target selected by configuration
/// 根据配置构建显示目标
pub fn build_display(cfg: &DisplayConfig) -> ClientResult<Arc<dyn DisplayTarget>> {
    let target: Arc<dyn DisplayTarget> = match cfg.target {
        DisplayKind::Console => Arc::new(ConsoleDisplay::new(cfg.id.clone())),
        DisplayKind::Memory => Arc::new(MemoryDisplay::new(cfg.id.clone())),
        DisplayKind::File => {
            let path = cfg
                .file_path
                .as_deref()
                .filter(|p| !p.trim().is_empty())
                .ok_or_else(|| ClientError::InvalidSetting {
                    message: "display.file_path is required for the file target".to_string(),
                })?;
            Arc::new(FileDisplay::new(cfg.id.clone(), path))
        }
    };
    Ok(target)
}
