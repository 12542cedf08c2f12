//! Request runner / 请求运行器
//!
//! Every submission is one spawned task with two suspension points:
//! the network call (send plus body read), then the display delay.
//! Nothing is retried, deduplicated or cancelled, and the HTTP status is
//! never inspected. Whatever settles gets rendered.
//!
//! 每次提交都是一个独立任务，只有两个挂起点：网络调用（发送与读取响应体），
//! 然后是显示延迟。不重试、不去重、不取消，也不检查HTTP状态码。

use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};
use tracing::Instrument;
use uuid::Uuid;

use crate::client::config::ClientConfig;
use crate::client::display::DisplayTarget;
use crate::client::error::ClientResult;
use crate::client::operations::Operation;
use crate::client::request::RequestSpec;
use crate::constants::JSON_CONTENT_TYPE;

/// How a network call settled / 网络调用的完成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// A response arrived, whatever its status / 收到响应（不论状态码）
    Response { status: u16, body: String },
    /// Transport-level failure, kept as its string form / 传输层失败，保存其字符串形式
    Failure(String),
}

impl Settlement {
    /// Text written to the display target / 写入显示目标的文本
    pub fn display_text(&self) -> &str {
        match self {
            Settlement::Response { body, .. } => body,
            Settlement::Failure(err) => err,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Settlement::Failure(_))
    }
}

/// Handle to one scheduled display write / 一次待执行显示写入的句柄
///
/// Dropping it does not cancel anything; the write still lands.
#[derive(Debug)]
pub struct PendingDisplay {
    submission_id: Uuid,
    label: String,
    handle: JoinHandle<Settlement>,
}

impl PendingDisplay {
    pub fn submission_id(&self) -> Uuid {
        self.submission_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait until the display write has happened / 等待显示写入完成
    pub async fn settled(self) -> Result<Settlement, JoinError> {
        self.handle.await
    }
}

/// Issues API calls and renders their outcome after a fixed delay
/// 发出API调用，并在固定延迟后渲染结果
#[derive(Clone)]
pub struct RequestRunner {
    http: reqwest::Client,
    base_url: Url,
    display: Arc<dyn DisplayTarget>,
    delay: Duration,
}

impl RequestRunner {
    pub fn new(base_url: Url, display: Arc<dyn DisplayTarget>, delay: Duration) -> ClientResult<Self> {
        // No request timeout: a call may stay pending indefinitely
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url,
            display,
            delay,
        })
    }

    pub fn from_config(cfg: &ClientConfig, display: Arc<dyn DisplayTarget>) -> ClientResult<Self> {
        Self::new(cfg.api.parsed_base_url()?, display, cfg.display.delay())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn display(&self) -> &Arc<dyn DisplayTarget> {
        &self.display
    }

    /// POST /api/v1/register/user
    pub fn submit_registration(&self) -> PendingDisplay {
        self.submit_operation(Operation::Registration)
    }

    /// PUT /api/v1/users/activated
    pub fn submit_activation(&self) -> PendingDisplay {
        self.submit_operation(Operation::Activation)
    }

    /// POST /api/v1/tokens/password-reset
    pub fn submit_password_reset_request(&self) -> PendingDisplay {
        self.submit_operation(Operation::PasswordResetRequest)
    }

    /// PUT /api/v1/tokens/password-reset
    pub fn submit_password_reset(&self) -> PendingDisplay {
        self.submit_operation(Operation::PasswordReset)
    }

    /// GET /api/v1/healthcheck
    pub fn check_health(&self) -> PendingDisplay {
        self.submit_operation(Operation::HealthCheck)
    }

    pub fn submit_operation(&self, op: Operation) -> PendingDisplay {
        self.submit(op.name(), op.request_spec(&self.base_url))
    }

    /// Send `spec` on a new task and render its outcome after the delay
    /// 在新任务中发送 `spec`，并在延迟后渲染结果
    pub fn submit(&self, label: &str, spec: RequestSpec) -> PendingDisplay {
        let submission_id = Uuid::new_v4();
        let span = tracing::info_span!("submission", operation = %label, id = %submission_id);

        let http = self.http.clone();
        let surface = self.display.clone();
        let delay = self.delay;

        let task = async move {
            tracing::debug!(method = %spec.method, url = %spec.url, "dispatching request");
            let settlement = dispatch(&http, &spec).await;
            match &settlement {
                Settlement::Response { status, body } => {
                    tracing::info!(status, bytes = body.len(), "request settled");
                }
                Settlement::Failure(err) => {
                    tracing::info!(error = %err, "request failed");
                }
            }

            tokio::time::sleep(delay).await;

            let surface_id = surface.id();
            match surface.render(settlement.display_text()).await {
                Ok(()) => tracing::debug!(surface_id, "display updated"),
                Err(e) => tracing::warn!(surface_id, error = %e, "display write failed"),
            }
            settlement
        }
        .instrument(span);

        PendingDisplay {
            submission_id,
            label: label.to_string(),
            handle: tokio::spawn(task),
        }
    }
}

async fn dispatch(http: &reqwest::Client, spec: &RequestSpec) -> Settlement {
    let mut req = http.request(spec.method.into(), spec.url.clone());
    match spec.body_bytes() {
        Ok(Some(bytes)) => {
            req = req.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(bytes);
        }
        Ok(None) => {}
        Err(e) => return Settlement::Failure(e.to_string()),
    }

    let resp = match req.send().await {
        Ok(resp) => resp,
        Err(e) => return Settlement::Failure(e.to_string()),
    };
    let status = resp.status().as_u16();
    match resp.text().await {
        Ok(body) => Settlement::Response { status, body },
        Err(e) => Settlement::Failure(e.to_string()),
    }
}
