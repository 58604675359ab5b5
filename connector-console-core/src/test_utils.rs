//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::{ConnectorsCollectionController, ServiceContext};
use crate::traits::{ConnectorListing, LifecycleBackend};
use crate::types::{
    Connector, ConnectorStatus, LifecycleCommand, PaginatedResponse, PaginationParams,
};

pub fn connector(id: &str, status: ConnectorStatus) -> Connector {
    Connector::new(id, format!("{id}-name"), "http_source_0.1", status)
}

// ===== MockConnectorListing =====

pub struct MockConnectorListing {
    connectors: RwLock<Vec<Connector>>,
    /// 如果 Some，fetch_page 时返回此错误
    fetch_error: RwLock<Option<String>>,
}

impl MockConnectorListing {
    pub fn new(connectors: Vec<Connector>) -> Self {
        Self {
            connectors: RwLock::new(connectors),
            fetch_error: RwLock::new(None),
        }
    }

    pub async fn set_fetch_error(&self, err: Option<String>) {
        *self.fetch_error.write().await = err;
    }
}

#[async_trait]
impl ConnectorListing for MockConnectorListing {
    async fn fetch_page(
        &self,
        params: &PaginationParams,
    ) -> CoreResult<PaginatedResponse<Connector>> {
        if let Some(ref msg) = *self.fetch_error.read().await {
            return Err(CoreError::FetchError {
                page: params.page,
                message: msg.clone(),
            });
        }
        let all = self.connectors.read().await;
        let start = ((params.page.max(1) - 1) * params.page_size) as usize;
        let items = all
            .iter()
            .skip(start)
            .take(params.page_size as usize)
            .cloned()
            .collect();
        let total = u32::try_from(all.len()).unwrap_or(u32::MAX);
        Ok(PaginatedResponse::new(items, params.page, params.page_size, total))
    }
}

// ===== MockLifecycleBackend =====

pub struct MockLifecycleBackend {
    sent: Mutex<Vec<(LifecycleCommand, String)>>,
    /// 如果 Some，所有命令立即被拒绝
    reject: Mutex<Option<String>>,
}

impl MockLifecycleBackend {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject: Mutex::new(None),
        }
    }

    pub fn set_reject(&self, reason: Option<String>) {
        *self.reject.lock().unwrap() = reason;
    }

    pub fn sent(&self) -> Vec<(LifecycleCommand, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn count(&self, command: LifecycleCommand) -> usize {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == command)
            .count()
    }

    fn record(&self, command: LifecycleCommand, id: &str) -> CoreResult<()> {
        if let Some(ref reason) = *self.reject.lock().unwrap() {
            return Err(CoreError::CommandRejected {
                id: id.to_string(),
                command,
                reason: reason.clone(),
            });
        }
        self.sent.lock().unwrap().push((command, id.to_string()));
        Ok(())
    }
}

impl LifecycleBackend for MockLifecycleBackend {
    fn send_start(&self, id: &str) -> CoreResult<()> {
        self.record(LifecycleCommand::Start, id)
    }

    fn send_stop(&self, id: &str) -> CoreResult<()> {
        self.record(LifecycleCommand::Stop, id)
    }

    fn send_delete(&self, id: &str) -> CoreResult<()> {
        self.record(LifecycleCommand::Delete, id)
    }
}

// ===== 工厂方法 =====

/// 创建测试用 ConnectorsCollectionController，返回 (controller, listing, backend)
pub fn create_test_collection(
    connectors: Vec<Connector>,
    page_size: u32,
) -> (
    ConnectorsCollectionController,
    Arc<MockConnectorListing>,
    Arc<MockLifecycleBackend>,
) {
    let listing = Arc::new(MockConnectorListing::new(connectors));
    let backend = Arc::new(MockLifecycleBackend::new());
    let ctx = Arc::new(ServiceContext::new(listing.clone(), backend.clone()));
    (
        ConnectorsCollectionController::new(ctx, page_size),
        listing,
        backend,
    )
}
