//! 事件处理：把终端事件翻译成消息

use std::time::Duration;

use anyhow::Result;
use connector_console_core::RowAction;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::TOGGLE_LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }
    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    handle_table_keys(key)
}

/// 处理连接器表格的按键
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::OPEN_ACTIONS.matches(&key) {
        return AppMessage::Content(ContentMessage::OpenActions);
    }
    if DefaultKeymap::ACTION_START.matches(&key) {
        return AppMessage::Content(ContentMessage::Action(RowAction::Start));
    }
    if DefaultKeymap::ACTION_STOP.matches(&key) {
        return AppMessage::Content(ContentMessage::Action(RowAction::Stop));
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Action(RowAction::Delete));
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearSelection);
    }

    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => ContentMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => ContentMessage::SelectNext,
        KeyCode::Home => ContentMessage::SelectFirst,
        KeyCode::End => ContentMessage::SelectLast,
        KeyCode::Enter => ContentMessage::Confirm,
        KeyCode::PageDown | KeyCode::Char(']') => ContentMessage::NextPage,
        KeyCode::PageUp | KeyCode::Char('[') => ContentMessage::PrevPage,
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 处理弹窗的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Esc => ModalMessage::Close,
        KeyCode::Enter => ModalMessage::Confirm,
        KeyCode::Tab | KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => {
            ModalMessage::NextField
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => {
            ModalMessage::PrevField
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Modal(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn table_shortcuts_route_through_row_actions() {
        let (app, _demo) = test_app(Vec::new());

        assert!(matches!(
            handle_event(press(KeyCode::Char('s')), &app),
            AppMessage::Content(ContentMessage::Action(RowAction::Start))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('d')), &app),
            AppMessage::Content(ContentMessage::Action(RowAction::Delete))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char(']')), &app),
            AppMessage::Content(ContentMessage::NextPage)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::PageUp), &app),
            AppMessage::Content(ContentMessage::PrevPage)
        ));
    }

    #[tokio::test]
    async fn open_modal_captures_keys() {
        let (mut app, _demo) = test_app(Vec::new());
        app.modal.show_confirm_delete("c1", "orders");

        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Confirm)
        ));
    }
}
