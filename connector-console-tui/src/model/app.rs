//! 应用主状态结构

use std::sync::Arc;

use connector_console_core::{ConnectorsCollectionController, ServiceContext, StatusEventReceiver};
use tokio::sync::mpsc;

use crate::backend::{ConsoleConfig, PageLoadReceiver, PageLoadSender};

use super::{ConnectorsState, ModalState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 连接器页面状态
    pub connectors: ConnectorsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前配置
    pub config: ConsoleConfig,
    /// 语言或主题被切换过，退出时需要保存
    pub config_dirty: bool,

    /// 后端服务
    pub ctx: Arc<ServiceContext>,
    /// 生命周期命令的完成事件
    pub status_events: StatusEventReceiver,
    /// 后台分页结果
    pub page_load_tx: PageLoadSender,
    pub page_load_rx: PageLoadReceiver,
}

impl App {
    /// 创建新的应用实例
    pub fn new(
        ctx: Arc<ServiceContext>,
        status_events: StatusEventReceiver,
        config: ConsoleConfig,
    ) -> Self {
        let collection = ConnectorsCollectionController::new(Arc::clone(&ctx), config.page_size);
        let (page_load_tx, page_load_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            status_message: None,
            connectors: ConnectorsState::new(collection),
            modal: ModalState::new(),
            config,
            config_dirty: false,
            ctx,
            status_events,
            page_load_tx,
            page_load_rx,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
