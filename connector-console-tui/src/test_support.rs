//! 测试辅助：基于演示后端构造 App

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use connector_console_core::{
    status_channel, Connector, ConnectorListing, ConnectorStatus, ConnectorsCollectionController,
    CoreError, CoreResult, PaginatedResponse, PaginationParams, ServiceContext, StatusEventReceiver,
};
use tokio::runtime::Handle;

use crate::backend::{ConsoleConfig, DemoConnectorService};
use crate::message::AppMessage;
use crate::model::App;
use crate::update::update;

/// 名称为 `{id}-connector` 的连接器
pub fn named(id: &str, status: ConnectorStatus) -> Connector {
    Connector::new(id, format!("{id}-connector"), "http_source_0.1", status)
}

fn demo(connectors: Vec<Connector>) -> (Arc<DemoConnectorService>, StatusEventReceiver) {
    let (tx, rx) = status_channel();
    let demo = DemoConnectorService::new(tx, Handle::current());
    demo.replace_all(connectors);
    (Arc::new(demo), rx)
}

/// 已应用一页数据的集合控制器
pub fn collection_with(connectors: Vec<Connector>) -> ConnectorsCollectionController {
    let (demo, _rx) = demo(Vec::new());
    let ctx = Arc::new(ServiceContext::new(demo.clone(), demo));
    let mut collection = ConnectorsCollectionController::new(ctx, 10);
    let total = u32::try_from(connectors.len()).unwrap();
    collection.apply_page(PaginatedResponse::new(connectors, 1, 10, total));
    collection
}

/// 每页 3 条、尚未加载的 App
pub fn test_app(connectors: Vec<Connector>) -> (App, Arc<DemoConnectorService>) {
    let (demo, rx) = demo(connectors);
    let ctx = Arc::new(ServiceContext::new(demo.clone(), demo.clone()));
    let config = ConsoleConfig {
        page_size: 3,
        ..ConsoleConfig::default()
    };
    (App::new(ctx, rx, config), demo)
}

/// 已加载第一页的 App
pub async fn loaded_app(connectors: Vec<Connector>) -> (App, Arc<DemoConnectorService>) {
    let (mut app, demo) = test_app(connectors);
    update(&mut app, AppMessage::Refresh);
    assert!(settle_until(&mut app, |a| a.connectors.loading.is_none()).await);
    (app, demo)
}

/// 反复 Tick 直到条件成立（最多约 0.5 秒）
pub async fn settle_until(app: &mut App, done: impl Fn(&App) -> bool) -> bool {
    for _ in 0..100 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        update(app, AppMessage::Tick);
        if done(app) {
            return true;
        }
    }
    false
}

/// 可切换为失败的分页后端
pub struct FlakyListing {
    inner: Arc<DemoConnectorService>,
    failing: AtomicBool,
}

impl FlakyListing {
    pub fn new(inner: Arc<DemoConnectorService>) -> Self {
        Self {
            inner,
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl ConnectorListing for FlakyListing {
    async fn fetch_page(
        &self,
        params: &PaginationParams,
    ) -> CoreResult<PaginatedResponse<Connector>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CoreError::StorageError("connection reset".to_string()));
        }
        self.inner.fetch_page(params).await
    }
}
