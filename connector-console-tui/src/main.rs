//! Connector Console TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//! 启动流程：
//!     1. 初始化文件日志
//!     2. 加载配置（theme / language / page size）
//!     3. 创建状态事件通道与演示后端，组装 ServiceContext
//!     4. 初始化终端，运行主循环，无论成功与否都恢复终端
//!     5. 语言或主题被切换过时保存配置

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test_support;
mod update;
mod util;
mod view;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use connector_console_core::{status_channel, ServiceContext};
use tokio::runtime::Handle;

use backend::{ConfigService, DemoConnectorService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 初始化日志并加载配置
    let config_service = LocalConfigService::new();
    init_logging(&config_service.log_path())?;
    let config = config_service.load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {e}");
        backend::ConsoleConfig::default()
    });

    if let Some(language) = i18n::Language::from_code(&config.language) {
        i18n::set_language(language);
    }
    view::theme::set_theme(config.theme);

    // 2. 组装后端
    let (events_tx, events_rx) = status_channel();
    let demo = Arc::new(
        DemoConnectorService::seeded(events_tx, Handle::current())
            .with_command_delay(Duration::from_millis(800))
            .with_fetch_latency(Duration::from_millis(150)),
    );
    let ctx = Arc::new(ServiceContext::new(demo.clone(), demo));
    tracing::info!("Connector console starting, page size {}", config.page_size);

    // 3. 创建应用实例
    let mut app = model::App::new(ctx, events_rx, config);

    // 4. 运行主循环，恢复终端（无论成功失败都执行）
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    // 5. 保存切换过的语言 / 主题
    if app.config_dirty {
        if let Err(e) = config_service.save(&app.config) {
            tracing::error!("Failed to save config: {e}");
        }
    }

    result
}
