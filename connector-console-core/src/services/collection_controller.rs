//! Connector page, selection and pagination ownership

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::StatusEventReceiver;
use crate::types::{
    Connector, ConnectorStatus, PaginatedResponse, PaginationParams, PaginationWindow, StatusEvent,
};

use super::lifecycle_controller::{
    ConnectorLifecycleController, ConnectorSnapshot, SelectionRequest,
};
use super::row_actions::RowAction;

/// Result of dispatching a row action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A command was issued to the backend
    Issued,
    /// The backend refused the command on the spot; the connector is now failed
    Rejected,
    /// The guard was false, nothing happened
    Ignored,
    /// Delete is allowed and must now pass through a confirmation gate
    ConfirmationRequired,
    /// The connector became the selection
    Selected,
}

/// Collection controller for the current page of connectors
///
/// Single writer of the visible order and the selection. Lifecycle
/// controllers are keyed by connector id and reused across page loads.
pub struct ConnectorsCollectionController {
    ctx: Arc<ServiceContext>,
    controllers: HashMap<String, ConnectorLifecycleController>,
    order: Vec<String>,
    selected: Option<String>,
    window: PaginationWindow,
}

impl ConnectorsCollectionController {
    /// 创建集合控制器实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, page_size: u32) -> Self {
        Self {
            ctx,
            controllers: HashMap::new(),
            order: Vec::new(),
            selected: None,
            window: PaginationWindow::new(page_size),
        }
    }

    // ===== 分页 =====

    pub fn window(&self) -> PaginationWindow {
        self.window
    }

    /// Request parameters for `page` under the current page size
    pub fn page_params(&self, page: u32) -> PaginationParams {
        self.window.params_for(page)
    }

    /// Fetch `page` and make it the visible page.
    ///
    /// On failure the previous page stays visible and the error is returned.
    pub async fn load_page(&mut self, page: u32) -> CoreResult<()> {
        let params = self.page_params(page);
        let result = self.ctx.listing.fetch_page(&params).await;
        match result {
            Ok(response) => {
                self.apply_page(response);
                Ok(())
            }
            Err(e) => {
                let err = match e {
                    CoreError::FetchError { .. } => e,
                    other => CoreError::FetchError {
                        page: params.page,
                        message: other.to_string(),
                    },
                };
                log::error!("{err}");
                Err(err)
            }
        }
    }

    /// Reload the current page
    pub async fn reload(&mut self) -> CoreResult<()> {
        self.load_page(self.window.page).await
    }

    /// Load the next page. Returns `false` when already on the last page.
    pub async fn next_page(&mut self) -> CoreResult<bool> {
        if !self.window.has_next() {
            return Ok(false);
        }
        self.load_page(self.window.page + 1).await?;
        Ok(true)
    }

    /// Load the previous page. Returns `false` when already on the first page.
    pub async fn previous_page(&mut self) -> CoreResult<bool> {
        if !self.window.has_previous() {
            return Ok(false);
        }
        self.load_page(self.window.page - 1).await?;
        Ok(true)
    }

    /// Replace the visible page with a fetched response.
    ///
    /// Backend order is kept. Connectors already reported as `deleted` are
    /// skipped, controllers are reused by id, and controllers that fell off
    /// the page are dropped together with a dangling selection.
    pub fn apply_page(&mut self, response: PaginatedResponse<Connector>) {
        let mut previous = std::mem::take(&mut self.controllers);
        let mut order = Vec::with_capacity(response.items.len());

        for connector in response.items {
            if connector.status == ConnectorStatus::Deleted {
                continue;
            }
            if self.controllers.contains_key(&connector.id) {
                log::warn!("Duplicate connector id {} in page {}", connector.id, response.page);
                continue;
            }

            let id = connector.id.clone();
            let controller = match previous.remove(&id) {
                Some(mut existing) => {
                    existing.refresh(connector);
                    existing
                }
                None => ConnectorLifecycleController::new(
                    connector,
                    Arc::clone(&self.ctx.lifecycle_backend),
                ),
            };
            self.controllers.insert(id.clone(), controller);
            order.push(id);
        }

        self.order = order;
        self.window = PaginationWindow {
            page: response.page.max(1),
            page_size: if response.page_size > 0 {
                response.page_size
            } else {
                self.window.page_size
            },
            total_count: response.total_count,
        };

        let dangling = self
            .selected
            .as_ref()
            .is_some_and(|id| !self.controllers.contains_key(id));
        if dangling {
            log::debug!("Selected connector is no longer on the page");
            self.selected = None;
        }

        log::info!(
            "Loaded page {}/{} with {} connectors ({} discarded)",
            self.window.page,
            self.window.total_pages(),
            self.order.len(),
            previous.len()
        );
    }

    // ===== 查询 =====

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visible connector ids, in page order
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn controller(&self, id: &str) -> Option<&ConnectorLifecycleController> {
        self.controllers.get(id)
    }

    /// Snapshots of the visible connectors, in page order
    pub fn rows(&self) -> Vec<ConnectorSnapshot> {
        self.order
            .iter()
            .filter_map(|id| self.controllers.get(id))
            .map(ConnectorLifecycleController::snapshot)
            .collect()
    }

    // ===== 选择 =====

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_snapshot(&self) -> Option<ConnectorSnapshot> {
        self.selected
            .as_ref()
            .and_then(|id| self.controllers.get(id))
            .map(ConnectorLifecycleController::snapshot)
    }

    /// Select `id` if it is on the current page. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.controllers.contains_key(id) {
            log::debug!("{}", CoreError::InvalidSelection(id.to_string()));
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    pub fn handle_selection(&mut self, request: SelectionRequest) -> bool {
        self.select(&request.id)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ===== 生命周期命令 =====

    pub fn start(&mut self, id: &str) -> CoreResult<bool> {
        Ok(self.controller_mut(id)?.start())
    }

    pub fn stop(&mut self, id: &str) -> CoreResult<bool> {
        Ok(self.controller_mut(id)?.stop())
    }

    pub fn request_delete(&mut self, id: &str) -> CoreResult<bool> {
        Ok(self.controller_mut(id)?.request_delete())
    }

    /// Issue the delete once the confirmation gate has been passed
    pub fn confirm_delete(&mut self, id: &str) -> CoreResult<ActionOutcome> {
        let controller = self.controller_mut(id)?;
        let allowed = controller.capabilities().can_delete;
        Ok(command_outcome(allowed, controller.confirm_delete()))
    }

    /// Dispatch one entry of the row action table
    pub fn perform(&mut self, id: &str, action: RowAction) -> CoreResult<ActionOutcome> {
        let controller = self.controller_mut(id)?;
        let outcome = match action {
            RowAction::Start => {
                command_outcome(controller.capabilities().can_start, controller.start())
            }
            RowAction::Stop => {
                command_outcome(controller.capabilities().can_stop, controller.stop())
            }
            RowAction::Delete => {
                if controller.request_delete() {
                    ActionOutcome::ConfirmationRequired
                } else {
                    ActionOutcome::Ignored
                }
            }
            RowAction::Separator => ActionOutcome::Ignored,
            RowAction::Details => {
                let request = controller.select();
                self.handle_selection(request);
                ActionOutcome::Selected
            }
        };
        log::debug!("Row action {} on {id}: {outcome:?}", action.label());
        Ok(outcome)
    }

    // ===== 状态事件 =====

    /// Apply one status event to the matching controller.
    ///
    /// Returns `false` when the connector is not on the current page.
    pub fn apply_status_event(&mut self, event: StatusEvent) -> bool {
        let Some(controller) = self.controllers.get_mut(&event.id) else {
            log::debug!(
                "Ignoring status {:?} for connector {} not on the current page",
                event.status,
                event.id
            );
            return false;
        };
        controller.apply_status(event.status);

        if event.status == ConnectorStatus::Deleted {
            self.controllers.remove(&event.id);
            self.order.retain(|id| *id != event.id);
            self.window.total_count = self.window.total_count.saturating_sub(1);
            if self.selected.as_deref() == Some(event.id.as_str()) {
                self.selected = None;
            }
            log::info!("Connector {} deleted", event.id);

            // 最后一页删空后退回到仍然存在的最后一页
            let last_page = self.window.total_pages().max(1);
            if self.order.is_empty() && self.window.page > last_page {
                log::debug!("Page {} emptied, moving to page {last_page}", self.window.page);
                self.window.page = last_page;
            }
        }
        true
    }

    /// Apply every event currently queued on `events` without waiting.
    /// Returns the number of events applied to a visible connector.
    pub fn drain_events(&mut self, events: &mut StatusEventReceiver) -> usize {
        let mut applied = 0;
        while let Ok(event) = events.try_recv() {
            if self.apply_status_event(event) {
                applied += 1;
            }
        }
        applied
    }

    fn controller_mut(&mut self, id: &str) -> CoreResult<&mut ConnectorLifecycleController> {
        self.controllers
            .get_mut(id)
            .ok_or_else(|| CoreError::ConnectorNotFound(id.to_string()))
    }
}

fn command_outcome(allowed: bool, sent: bool) -> ActionOutcome {
    match (allowed, sent) {
        (false, _) => ActionOutcome::Ignored,
        (true, true) => ActionOutcome::Issued,
        (true, false) => ActionOutcome::Rejected,
    }
}
