//! Appletree client main entry point
//! Appletree客户端主入口点

use anyhow::Context;
use appletree_client::client::{build_display, ClientConfig, CliArgs, RequestRunner};
use appletree_client::config::init_tracing;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments / 解析命令行参数
    let args = CliArgs::parse();

    let config = ClientConfig::load_with_cli(&args).context("load client configuration")?;

    // Initialize logging with configuration / 使用配置初始化日志
    init_tracing(&config.log.to_logging_config())?;

    tracing::info!(
        base_url = %config.api.base_url,
        delay_ms = config.display.delay_ms,
        display = ?config.display.target,
        command = ?args.command,
        "appletree client starting"
    );

    let display = build_display(&config.display)?;
    let runner = RequestRunner::from_config(&config, display)?;

    // Fire everything first, then wait: overlapping writes race, the last one wins
    // 先全部发出再等待：重叠的写入相互竞争，最后完成者生效
    let pending: Vec<_> = args
        .command
        .operations()
        .iter()
        .map(|op| runner.submit_operation(*op))
        .collect();

    for p in pending {
        let label = p.label().to_string();
        let id = p.submission_id();
        match p.settled().await {
            Ok(settlement) if settlement.is_failure() => {
                tracing::warn!(operation = %label, %id, "request did not reach the API");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(operation = %label, %id, error = %e, "submission task aborted");
            }
        }
    }

    Ok(())
}
