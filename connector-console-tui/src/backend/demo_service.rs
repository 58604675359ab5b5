//! 演示后端
//!
//! 进程内的连接器服务，同时实现 `ConnectorListing` 与 `LifecycleBackend`。
//! 命令在 tokio 运行时上延迟完成，完成结果通过状态事件通道回报。

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use connector_console_core::{
    Connector, ConnectorListing, ConnectorStatus, CoreError, CoreResult, LifecycleBackend,
    LifecycleCommand, PaginatedResponse, PaginationParams, StatusEvent, StatusEventSender,
};
use tokio::runtime::Handle;

use super::config_service::MAX_PAGE_SIZE;

/// 已停止维护的连接器类型前缀，后端会直接拒绝启动
const DEPRECATED_TYPE_PREFIX: &str = "deprecated_";

/// 名称包含该标记的连接器启动后会失败
const BROKEN_MARKER: &str = "broken";

const SEED: &[(&str, &str, ConnectorStatus)] = &[
    ("orders-s3-sink", "aws_s3_sink_0.1", ConnectorStatus::Running),
    ("clickstream-http", "http_source_0.1", ConnectorStatus::Stopped),
    ("billing-postgres", "postgres_source_0.2", ConnectorStatus::Running),
    ("audit-log-sink", "aws_s3_sink_0.1", ConnectorStatus::Stopped),
    ("broken-webhook", "http_sink_0.1", ConnectorStatus::Failed),
    ("inventory-mysql", "mysql_source_0.1", ConnectorStatus::Stopped),
    ("legacy-tweets", "deprecated_twitter_source_0.1", ConnectorStatus::Stopped),
    ("metrics-bridge", "prometheus_sink_0.1", ConnectorStatus::Running),
    ("user-events", "kafka_mirror_0.3", ConnectorStatus::Running),
    ("payments-stream", "postgres_source_0.2", ConnectorStatus::Stopped),
    ("search-indexer", "elasticsearch_sink_0.1", ConnectorStatus::Running),
    ("crm-sync", "salesforce_source_0.1", ConnectorStatus::Stopped),
    ("ledger-archive", "aws_s3_sink_0.1", ConnectorStatus::Stopped),
    ("notifications", "http_sink_0.1", ConnectorStatus::Running),
    ("telemetry-ingest", "mqtt_source_0.1", ConnectorStatus::Running),
    ("backup-gcs", "gcs_sink_0.1", ConnectorStatus::Stopped),
    ("orders-dlq", "kafka_mirror_0.3", ConnectorStatus::Stopped),
    ("support-tickets", "zendesk_source_0.1", ConnectorStatus::Running),
    ("geo-lookup", "http_source_0.1", ConnectorStatus::Stopped),
    ("warehouse-load", "snowflake_sink_0.2", ConnectorStatus::Running),
    ("sensor-feed", "mqtt_source_0.1", ConnectorStatus::Stopped),
    ("marketing-export", "gcs_sink_0.1", ConnectorStatus::Stopped),
    ("session-cache", "redis_sink_0.1", ConnectorStatus::Running),
];

/// 进程内演示服务
pub struct DemoConnectorService {
    store: Arc<RwLock<Vec<Connector>>>,
    events: StatusEventSender,
    runtime: Handle,
    command_delay: Duration,
    fetch_latency: Duration,
}

impl DemoConnectorService {
    /// 创建空的演示服务（命令立即完成）
    pub fn new(events: StatusEventSender, runtime: Handle) -> Self {
        Self {
            store: Arc::new(RwLock::new(Vec::new())),
            events,
            runtime,
            command_delay: Duration::ZERO,
            fetch_latency: Duration::ZERO,
        }
    }

    /// 创建带示例数据的演示服务
    pub fn seeded(events: StatusEventSender, runtime: Handle) -> Self {
        let service = Self::new(events, runtime);
        let now = Utc::now();
        let connectors = SEED
            .iter()
            .zip(0_i64..)
            .map(|(&(name, connector_type, status), age)| {
                let mut connector = Connector::new(
                    uuid::Uuid::new_v4().to_string(),
                    name,
                    connector_type,
                    status,
                );
                connector.metadata.created_at = Some(now - ChronoDuration::days(age * 3 + 1));
                connector
            })
            .collect();
        service.replace_all(connectors);
        service
    }

    /// 设置命令完成延迟
    #[must_use]
    pub fn with_command_delay(mut self, delay: Duration) -> Self {
        self.command_delay = delay;
        self
    }

    /// 设置分页请求延迟
    #[must_use]
    pub fn with_fetch_latency(mut self, latency: Duration) -> Self {
        self.fetch_latency = latency;
        self
    }

    /// 替换全部连接器
    pub fn replace_all(&self, connectors: Vec<Connector>) {
        match self.store.write() {
            Ok(mut store) => *store = connectors,
            Err(_) => log::error!("Demo store lock poisoned"),
        }
    }

    /// 当前连接器快照（按创建顺序）
    pub fn snapshot(&self) -> CoreResult<Vec<Connector>> {
        self.store
            .read()
            .map(|store| store.clone())
            .map_err(|_| CoreError::StorageError("demo store lock poisoned".to_string()))
    }

    fn find(&self, id: &str) -> CoreResult<Connector> {
        self.snapshot()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CoreError::ConnectorNotFound(id.to_string()))
    }

    /// 在运行时上延迟完成命令并发送状态事件
    fn complete_later(&self, id: &str, command: LifecycleCommand, outcome: ConnectorStatus) {
        let store = Arc::clone(&self.store);
        let events = self.events.clone();
        let delay = self.command_delay;
        let id = id.to_string();

        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;

            match store.write() {
                Ok(mut store) => {
                    if outcome == ConnectorStatus::Deleted {
                        store.retain(|c| c.id != id);
                    } else if let Some(connector) = store.iter_mut().find(|c| c.id == id) {
                        connector.status = outcome;
                    }
                }
                Err(_) => {
                    log::error!("Demo store lock poisoned, dropping {command} result for {id}");
                    return;
                }
            }

            log::debug!("Demo backend finished {command} for {id}: {outcome:?}");
            if events.send(StatusEvent::new(id, outcome)).is_err() {
                log::debug!("Status channel closed, dropping {command} completion");
            }
        });
    }
}

#[async_trait]
impl ConnectorListing for DemoConnectorService {
    async fn fetch_page(
        &self,
        params: &PaginationParams,
    ) -> CoreResult<PaginatedResponse<Connector>> {
        if !self.fetch_latency.is_zero() {
            tokio::time::sleep(self.fetch_latency).await;
        }

        let params = params.validated(MAX_PAGE_SIZE);
        let all = self.snapshot()?;
        let total_count = u32::try_from(all.len()).unwrap_or(u32::MAX);
        let start = params.page.saturating_sub(1).saturating_mul(params.page_size) as usize;
        let items = all
            .into_iter()
            .skip(start)
            .take(params.page_size as usize)
            .collect();

        Ok(PaginatedResponse::new(
            items,
            params.page,
            params.page_size,
            total_count,
        ))
    }
}

impl LifecycleBackend for DemoConnectorService {
    fn send_start(&self, id: &str) -> CoreResult<()> {
        let connector = self.find(id)?;
        if connector.connector_type_id.starts_with(DEPRECATED_TYPE_PREFIX) {
            return Err(CoreError::CommandRejected {
                id: id.to_string(),
                command: LifecycleCommand::Start,
                reason: format!(
                    "connector type {} is deprecated",
                    connector.connector_type_id
                ),
            });
        }

        let outcome = if connector.name().is_some_and(|n| n.contains(BROKEN_MARKER)) {
            ConnectorStatus::Failed
        } else {
            ConnectorStatus::Running
        };
        self.complete_later(id, LifecycleCommand::Start, outcome);
        Ok(())
    }

    fn send_stop(&self, id: &str) -> CoreResult<()> {
        self.find(id)?;
        self.complete_later(id, LifecycleCommand::Stop, ConnectorStatus::Stopped);
        Ok(())
    }

    fn send_delete(&self, id: &str) -> CoreResult<()> {
        self.find(id)?;
        self.complete_later(id, LifecycleCommand::Delete, ConnectorStatus::Deleted);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use connector_console_core::status_channel;

    fn service() -> (DemoConnectorService, connector_console_core::StatusEventReceiver) {
        let (tx, rx) = status_channel();
        let service = DemoConnectorService::seeded(tx, Handle::current());
        (service, rx)
    }

    fn id_of(service: &DemoConnectorService, name: &str) -> String {
        service
            .snapshot()
            .unwrap()
            .into_iter()
            .find(|c| c.name() == Some(name))
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn pages_follow_store_order() {
        let (service, _rx) = service();
        let params = PaginationParams {
            page: 3,
            page_size: 10,
        };
        let page = service.fetch_page(&params).await.unwrap();

        assert_eq!(page.total_count, SEED.len() as u32);
        assert_eq!(page.items.len(), SEED.len() - 20);
        assert_eq!(page.items[0].name(), Some(SEED[20].0));
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn start_completes_through_status_channel() {
        let (service, mut rx) = service();
        let id = id_of(&service, "clickstream-http");

        service.send_start(&id).unwrap();
        let event = rx.recv().await.unwrap();

        assert_eq!(event, StatusEvent::new(id.clone(), ConnectorStatus::Running));
        assert_eq!(service.find(&id).unwrap().status, ConnectorStatus::Running);
    }

    #[tokio::test]
    async fn broken_connector_fails_to_start() {
        let (service, mut rx) = service();
        let id = id_of(&service, "broken-webhook");

        service.send_start(&id).unwrap();
        assert_eq!(rx.recv().await.unwrap().status, ConnectorStatus::Failed);
    }

    #[tokio::test]
    async fn deprecated_type_is_rejected_immediately() {
        let (service, _rx) = service();
        let id = id_of(&service, "legacy-tweets");

        let err = service.send_start(&id).unwrap_err();
        assert!(matches!(
            err,
            CoreError::CommandRejected {
                command: LifecycleCommand::Start,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn delete_removes_from_store() {
        let (service, mut rx) = service();
        let id = id_of(&service, "orders-dlq");

        service.send_delete(&id).unwrap();
        assert_eq!(rx.recv().await.unwrap().status, ConnectorStatus::Deleted);
        assert!(matches!(
            service.find(&id),
            Err(CoreError::ConnectorNotFound(_))
        ));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let (service, _rx) = service();
        assert!(matches!(
            service.send_stop("nope"),
            Err(CoreError::ConnectorNotFound(_))
        ));
    }
}
