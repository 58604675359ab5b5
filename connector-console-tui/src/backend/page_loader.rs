//! 后台分页加载
//!
//! 页面请求在 tokio 任务中执行，结果通过通道交回主循环，
//! 再由 Update 层调用 `apply_page`。

use std::sync::Arc;

use connector_console_core::{
    Connector, ConnectorListing, CoreError, CoreResult, PaginatedResponse, PaginationParams,
};
use tokio::sync::mpsc;

/// 一次分页请求的结果
#[derive(Debug)]
pub struct PageLoad {
    pub page: u32,
    pub result: CoreResult<PaginatedResponse<Connector>>,
}

pub type PageLoadSender = mpsc::UnboundedSender<PageLoad>;
pub type PageLoadReceiver = mpsc::UnboundedReceiver<PageLoad>;

/// 在后台请求一页连接器
pub fn spawn_page_load(
    listing: Arc<dyn ConnectorListing>,
    params: PaginationParams,
    results: PageLoadSender,
) {
    tokio::spawn(async move {
        let result = listing
            .fetch_page(&params)
            .await
            .map_err(|e| match e {
                CoreError::FetchError { .. } => e,
                other => CoreError::FetchError {
                    page: params.page,
                    message: other.to_string(),
                },
            });
        if results
            .send(PageLoad {
                page: params.page,
                result,
            })
            .is_err()
        {
            log::debug!("Main loop gone, dropping page {}", params.page);
        }
    });
}
