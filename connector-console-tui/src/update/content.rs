//! 连接器表格消息处理

use connector_console_core::{ActionOutcome, ConnectorLifecycleController, RowAction};

use crate::i18n::{action_label, t};
use crate::message::ContentMessage;
use crate::model::App;

use super::request_page;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.connectors.select_previous(),
        ContentMessage::SelectNext => app.connectors.select_next(),
        ContentMessage::SelectFirst => app.connectors.select_first(),
        ContentMessage::SelectLast => app.connectors.select_last(),

        ContentMessage::Confirm => {
            // 行点击：由 lifecycle 控制器发出选中请求，集合控制器处理
            let request = app
                .connectors
                .cursor_id()
                .and_then(|id| app.connectors.collection.controller(id))
                .map(ConnectorLifecycleController::select);
            if let Some(request) = request {
                app.connectors.collection.handle_selection(request);
            }
        }

        ContentMessage::OpenActions => {
            if let Some(id) = app.connectors.cursor_id().map(str::to_string) {
                app.modal.show_row_actions(&id);
            }
        }

        ContentMessage::Action(action) => {
            if let Some(id) = app.connectors.cursor_id().map(str::to_string) {
                perform_action(app, &id, action);
            }
        }

        ContentMessage::NextPage => {
            let window = app.connectors.collection.window();
            if window.has_next() {
                request_page(app, window.page + 1);
            }
        }

        ContentMessage::PrevPage => {
            let window = app.connectors.collection.window();
            if window.has_previous() {
                request_page(app, window.page - 1);
            }
        }

        ContentMessage::ClearSelection => {
            app.connectors.collection.clear_selection();
            app.clear_status();
        }
    }
}

/// 通过行操作表对连接器执行操作
pub(super) fn perform_action(app: &mut App, id: &str, action: RowAction) {
    let outcome = match app.connectors.collection.perform(id, action) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::warn!("{e}");
            app.modal.show_error(t().modal.error_title, &e.to_string());
            return;
        }
    };

    let Some(controller) = app.connectors.collection.controller(id) else {
        return;
    };
    let name = controller
        .connector()
        .name()
        .unwrap_or(t().table.unnamed)
        .to_string();

    match outcome {
        ActionOutcome::Rejected => {
            app.set_status(format!(
                "{}: {} {name}",
                t().status_bar.command_rejected,
                action_label(action)
            ));
        }
        ActionOutcome::Issued => {
            app.set_status(format!(
                "{}: {} {name}",
                t().status_bar.command_issued,
                action_label(action)
            ));
        }
        ActionOutcome::ConfirmationRequired => {
            app.modal.show_confirm_delete(id, &name);
        }
        ActionOutcome::Ignored | ActionOutcome::Selected => {}
    }
}
