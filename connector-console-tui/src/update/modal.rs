//! 弹窗消息处理

use connector_console_core::{ActionOutcome, RowAction, ROW_ACTIONS};

use crate::i18n::{action_label, t};
use crate::message::ModalMessage;
use crate::model::state::{next_menu_index, prev_menu_index};
use crate::model::{App, Modal};

use super::content::perform_action;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::RowActions { .. } => handle_row_actions(app, msg),
        Modal::ConfirmDelete { .. } => handle_confirm_delete(app, msg),
        Modal::Error { .. } | Modal::Help => handle_simple_modal(app, msg),
    }
}

/// 处理行操作菜单
fn handle_row_actions(app: &mut App, msg: ModalMessage) {
    let Some(Modal::RowActions {
        ref connector_id,
        ref mut cursor,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::NextField => *cursor = next_menu_index(*cursor),
        ModalMessage::PrevField => *cursor = prev_menu_index(*cursor),
        ModalMessage::Confirm => {
            let id = connector_id.clone();
            let action = ROW_ACTIONS[*cursor];

            // 不可用的菜单项不响应
            let enabled = app
                .connectors
                .collection
                .controller(&id)
                .is_some_and(|c| action.guard(&c.capabilities()));
            if !enabled {
                return;
            }

            app.modal.close();
            perform_action(app, &id, action);
        }
    }
}

/// 处理确认删除弹窗
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete {
        ref connector_id,
        ref mut gate,
        ref mut focus,
        ..
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            gate.cancel();
            app.modal.close();
        }

        ModalMessage::NextField | ModalMessage::PrevField => {
            *focus = if *focus == 0 { 1 } else { 0 };
        }

        ModalMessage::Confirm if *focus == 0 => {
            gate.cancel();
            app.modal.close();
        }

        ModalMessage::Confirm => {
            let id = connector_id.clone();
            let collection = &mut app.connectors.collection;
            let result = gate.confirm(|| collection.confirm_delete(&id));
            app.modal.close();

            match result {
                Some(Ok(ActionOutcome::Issued)) => app.set_status(t().status_bar.delete_issued),
                Some(Ok(ActionOutcome::Rejected)) => app.set_status(format!(
                    "{}: {}",
                    t().status_bar.command_rejected,
                    action_label(RowAction::Delete)
                )),
                Some(Ok(_)) => log::debug!("Delete of {id} no longer allowed"),
                Some(Err(e)) => app.modal.show_error(t().modal.error_title, &e.to_string()),
                None => {}
            }
        }
    }
}

/// 处理简单弹窗（帮助、错误）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => app.modal.close(),
        ModalMessage::NextField | ModalMessage::PrevField => {}
    }
}
