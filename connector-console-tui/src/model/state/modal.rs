//! 弹窗/对话框状态

use connector_console_core::{ConfirmationGate, ROW_ACTIONS};

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 行操作菜单
    RowActions {
        connector_id: String,
        /// 菜单光标（`ROW_ACTIONS` 下标，不会停在分隔线上）
        cursor: usize,
    },
    /// 确认删除
    ConfirmDelete {
        connector_id: String,
        connector_name: String,
        /// 弹窗只在 gate 处于 confirming 时绘制
        gate: ConfirmationGate,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 帮助信息
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示行操作菜单
    pub fn show_row_actions(&mut self, connector_id: &str) {
        self.active = Some(Modal::RowActions {
            connector_id: connector_id.to_string(),
            cursor: 0,
        });
    }

    /// 显示确认删除弹窗，gate 进入 confirming
    pub fn show_confirm_delete(&mut self, connector_id: &str, connector_name: &str) {
        let mut gate = ConfirmationGate::new();
        gate.request_confirm();
        self.active = Some(Modal::ConfirmDelete {
            connector_id: connector_id.to_string(),
            connector_name: connector_name.to_string(),
            gate,
            focus: 0,
        });
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}

/// 行操作菜单中下一个可停留的位置（跳过分隔线，循环）
pub fn next_menu_index(cursor: usize) -> usize {
    let len = ROW_ACTIONS.len();
    let mut next = (cursor + 1) % len;
    while ROW_ACTIONS[next].is_separator() {
        next = (next + 1) % len;
    }
    next
}

/// 行操作菜单中上一个可停留的位置（跳过分隔线，循环）
pub fn prev_menu_index(cursor: usize) -> usize {
    let len = ROW_ACTIONS.len();
    let mut prev = (cursor + len - 1) % len;
    while ROW_ACTIONS[prev].is_separator() {
        prev = (prev + len - 1) % len;
    }
    prev
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use connector_console_core::RowAction;

    #[test]
    fn confirm_dialog_opens_with_gate_confirming() {
        let mut modal = ModalState::new();
        modal.show_confirm_delete("c1", "orders-sink");

        let Some(Modal::ConfirmDelete { gate, focus, .. }) = &modal.active else {
            panic!("expected confirm dialog");
        };
        assert!(gate.is_confirming());
        assert_eq!(*focus, 0);
    }

    #[test]
    fn menu_cursor_skips_separator() {
        let delete = ROW_ACTIONS
            .iter()
            .position(|a| *a == RowAction::Delete)
            .unwrap();
        let details = ROW_ACTIONS
            .iter()
            .position(|a| *a == RowAction::Details)
            .unwrap();

        assert_eq!(next_menu_index(delete), details);
        assert_eq!(prev_menu_index(details), delete);
        assert_eq!(next_menu_index(details), 0);
        assert_eq!(prev_menu_index(0), details);
    }
}
