//!
//! src/update/mod.rs
//! Update 层：消费消息并修改 Model
//!
//!     - mod.rs       全局消息、分页请求、Tick 时收取异步结果
//!     - content.rs   连接器表格上的操作（光标、选中、行操作、翻页）
//!     - modal.rs     弹窗内的操作（行操作菜单、删除确认）
//!
//! Update 层本身是同步的：分页请求交给后台任务，结果与生命周期
//! 状态事件都在 Tick 时从通道中收取。
//!

mod content;
mod modal;

use std::sync::Arc;

use crate::backend::{spawn_page_load, PageLoad};
use crate::i18n::{current_language, set_language, t};
use crate::message::AppMessage;
use crate::model::{App, Modal};
use crate::view::theme::set_theme;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Refresh => {
            let page = app.connectors.collection.window().page;
            request_page(app, page);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ToggleLanguage => {
            let language = current_language().next();
            set_language(language);
            app.config.language = language.code().to_string();
            app.config_dirty = true;
            app.set_status(t().status_bar.language_changed);
        }

        AppMessage::ToggleTheme => {
            app.config.theme = app.config.theme.toggle();
            set_theme(app.config.theme);
            app.config_dirty = true;
            app.set_status(t().status_bar.theme_changed);
        }

        AppMessage::Tick => {
            while let Ok(load) = app.page_load_rx.try_recv() {
                apply_page_load(app, load);
            }
            let applied = app
                .connectors
                .collection
                .drain_events(&mut app.status_events);
            if applied > 0 {
                after_rows_changed(app);
                reload_if_page_emptied(app);
            }
        }

        AppMessage::Noop => {}
    }
}

/// 在后台请求一页；结果在 Tick 时应用
pub fn request_page(app: &mut App, page: u32) {
    let params = app.connectors.collection.page_params(page);
    app.connectors.loading = Some(params.page);
    app.set_status(format!("{} {}...", t().status_bar.loading_page, params.page));
    spawn_page_load(
        Arc::clone(&app.ctx.listing),
        params,
        app.page_load_tx.clone(),
    );
}

fn apply_page_load(app: &mut App, load: PageLoad) {
    if app.connectors.loading != Some(load.page) {
        log::debug!("Dropping superseded load of page {}", load.page);
        return;
    }
    app.connectors.loading = None;

    match load.result {
        Ok(response) => {
            app.connectors.collection.apply_page(response);
            app.connectors.error = None;
            app.clear_status();
            after_rows_changed(app);
        }
        Err(e) => {
            // 保留上一页内容，只在状态栏提示
            app.connectors.error = Some(e.to_string());
            app.set_status(format!("{}: {e}", t().status_bar.page_load_failed));
        }
    }
}

/// 行集合变化后修正光标，并关闭指向已消失连接器的菜单或删除确认框
fn after_rows_changed(app: &mut App) {
    app.connectors.clamp_cursor();

    let stale = match &app.modal.active {
        Some(
            Modal::RowActions { connector_id, .. } | Modal::ConfirmDelete { connector_id, .. },
        ) => app.connectors.collection.controller(connector_id).is_none(),
        _ => false,
    };
    if stale {
        app.modal.close();
    }
}

/// 删除事件清空了当前页但仍有其他数据时，重新请求窗口所在的页
fn reload_if_page_emptied(app: &mut App) {
    let collection = &app.connectors.collection;
    if collection.is_empty()
        && collection.window().total_count > 0
        && app.connectors.loading.is_none()
    {
        let page = collection.window().page;
        request_page(app, page);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::message::{ContentMessage, ModalMessage};
    use crate::test_support::{loaded_app, named, settle_until, test_app, FlakyListing};
    use connector_console_core::{ConnectorStatus, RowAction, ServiceContext};

    fn status_of(app: &App, id: &str) -> Option<ConnectorStatus> {
        app.connectors.collection.controller(id).map(|c| c.status())
    }

    fn seed() -> Vec<connector_console_core::Connector> {
        vec![
            named("c1", ConnectorStatus::Stopped),
            named("c2", ConnectorStatus::Running),
            named("c3", ConnectorStatus::Failed),
            named("c4", ConnectorStatus::Stopped),
        ]
    }

    #[tokio::test]
    async fn refresh_loads_first_page() {
        let (mut app, _demo) = loaded_app(seed()).await;

        assert_eq!(app.connectors.collection.ids(), ["c1", "c2", "c3"]);
        let window = app.connectors.collection.window();
        assert_eq!(window.total_count, 4);
        assert_eq!(window.total_pages(), 2);
        assert!(app.connectors.loading.is_none());

        update(&mut app, AppMessage::Content(ContentMessage::NextPage));
        assert!(settle_until(&mut app, |a| a.connectors.loading.is_none()).await);
        assert_eq!(app.connectors.collection.ids(), ["c4"]);
        assert_eq!(app.connectors.collection.window().page, 2);
    }

    #[tokio::test]
    async fn enter_selects_cursor_row() {
        let (mut app, _demo) = loaded_app(seed()).await;

        update(&mut app, AppMessage::Content(ContentMessage::SelectNext));
        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        assert_eq!(app.connectors.collection.selected(), Some("c2"));

        update(&mut app, AppMessage::Content(ContentMessage::ClearSelection));
        assert_eq!(app.connectors.collection.selected(), None);
    }

    #[tokio::test]
    async fn start_shortcut_completes_through_tick() {
        let (mut app, _demo) = loaded_app(seed()).await;

        update(
            &mut app,
            AppMessage::Content(ContentMessage::Action(RowAction::Start)),
        );
        assert_eq!(status_of(&app, "c1"), Some(ConnectorStatus::Starting));

        assert!(
            settle_until(&mut app, |a| status_of(a, "c1") == Some(ConnectorStatus::Running)).await
        );
        let caps = app.connectors.collection.controller("c1").unwrap().capabilities();
        assert!(caps.can_stop);
        assert!(!caps.can_start);
    }

    #[tokio::test]
    async fn cancelled_delete_keeps_connector() {
        let (mut app, demo) = loaded_app(seed()).await;

        update(
            &mut app,
            AppMessage::Content(ContentMessage::Action(RowAction::Delete)),
        );
        let Some(Modal::ConfirmDelete {
            connector_name,
            gate,
            ..
        }) = &app.modal.active
        else {
            panic!("expected confirm dialog");
        };
        assert_eq!(connector_name, "c1-connector");
        assert!(gate.is_confirming());

        update(&mut app, AppMessage::Modal(ModalMessage::Close));
        assert!(!app.modal.is_open());
        assert_eq!(status_of(&app, "c1"), Some(ConnectorStatus::Stopped));

        settle_until(&mut app, |_| false).await;
        assert_eq!(demo.snapshot().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn confirmed_delete_removes_row() {
        let (mut app, demo) = loaded_app(seed()).await;

        update(
            &mut app,
            AppMessage::Content(ContentMessage::Action(RowAction::Delete)),
        );
        update(&mut app, AppMessage::Modal(ModalMessage::NextField));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        assert!(!app.modal.is_open());
        assert_eq!(status_of(&app, "c1"), Some(ConnectorStatus::Deleting));

        assert!(settle_until(&mut app, |a| status_of(a, "c1").is_none()).await);
        assert_eq!(app.connectors.collection.window().total_count, 3);
        assert_eq!(demo.snapshot().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn deleting_last_row_of_last_page_moves_back() {
        let (mut app, _demo) = loaded_app(seed()).await;
        update(&mut app, AppMessage::Content(ContentMessage::NextPage));
        assert!(settle_until(&mut app, |a| a.connectors.loading.is_none()).await);
        assert_eq!(app.connectors.collection.ids(), ["c4"]);

        update(
            &mut app,
            AppMessage::Content(ContentMessage::Action(RowAction::Delete)),
        );
        update(&mut app, AppMessage::Modal(ModalMessage::NextField));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        assert!(
            settle_until(&mut app, |a| {
                a.connectors.loading.is_none()
                    && a.connectors.collection.ids() == ["c1", "c2", "c3"]
            })
            .await
        );
        let window = app.connectors.collection.window();
        assert_eq!(window.page, 1);
        assert_eq!(window.total_pages(), 1);
    }

    #[tokio::test]
    async fn confirm_dialog_closes_when_connector_disappears() {
        let (mut app, demo) = loaded_app(seed()).await;

        update(
            &mut app,
            AppMessage::Content(ContentMessage::Action(RowAction::Delete)),
        );
        assert!(matches!(app.modal.active, Some(Modal::ConfirmDelete { .. })));

        // c1 is removed elsewhere, the next refresh drops it from the page
        demo.replace_all(seed().into_iter().skip(1).collect());
        update(&mut app, AppMessage::Refresh);
        assert!(settle_until(&mut app, |a| a.connectors.loading.is_none()).await);

        assert!(status_of(&app, "c1").is_none());
        assert!(!app.modal.is_open());

        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        assert!(!app.modal.is_open());
    }

    #[tokio::test]
    async fn rejected_start_reports_rejection() {
        let mut rejected = named("c9", ConnectorStatus::Stopped);
        rejected.connector_type_id = "deprecated_twitter_source_0.1".to_string();
        let (mut app, _demo) = loaded_app(vec![rejected]).await;

        update(
            &mut app,
            AppMessage::Content(ContentMessage::Action(RowAction::Start)),
        );

        assert_eq!(status_of(&app, "c9"), Some(ConnectorStatus::Failed));
        assert!(app.status_message.as_deref().unwrap().contains("c9-connector"));
        assert!(!app.modal.is_open());
    }

    #[tokio::test]
    async fn delete_on_running_connector_opens_nothing() {
        let (mut app, _demo) = loaded_app(seed()).await;

        update(&mut app, AppMessage::Content(ContentMessage::SelectNext));
        update(
            &mut app,
            AppMessage::Content(ContentMessage::Action(RowAction::Delete)),
        );
        assert!(!app.modal.is_open());
        assert_eq!(status_of(&app, "c2"), Some(ConnectorStatus::Running));
    }

    #[tokio::test]
    async fn disabled_menu_entry_is_inert() {
        let (mut app, _demo) = loaded_app(seed()).await;

        // c2 is running: Start (first entry) is disabled
        update(&mut app, AppMessage::Content(ContentMessage::SelectNext));
        update(&mut app, AppMessage::Content(ContentMessage::OpenActions));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        assert!(matches!(app.modal.active, Some(Modal::RowActions { .. })));
        assert_eq!(status_of(&app, "c2"), Some(ConnectorStatus::Running));

        // Stop is enabled
        update(&mut app, AppMessage::Modal(ModalMessage::NextField));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        assert!(!app.modal.is_open());
        assert_eq!(status_of(&app, "c2"), Some(ConnectorStatus::Stopping));
    }

    #[tokio::test]
    async fn failed_page_load_keeps_previous_rows() {
        let (mut app, demo) = test_app(seed());
        let flaky = std::sync::Arc::new(FlakyListing::new(demo.clone()));
        app.ctx = std::sync::Arc::new(ServiceContext::new(flaky.clone(), demo.clone()));

        update(&mut app, AppMessage::Refresh);
        assert!(settle_until(&mut app, |a| a.connectors.loading.is_none()).await);
        assert_eq!(app.connectors.collection.len(), 3);

        flaky.set_failing(true);
        update(&mut app, AppMessage::Content(ContentMessage::NextPage));
        assert!(settle_until(&mut app, |a| a.connectors.loading.is_none()).await);

        assert_eq!(app.connectors.collection.ids(), ["c1", "c2", "c3"]);
        assert_eq!(app.connectors.collection.window().page, 1);
        assert!(app.connectors.error.as_deref().unwrap().contains("page 2"));
    }

    #[tokio::test]
    async fn superseded_page_load_is_dropped() {
        let (mut app, _demo) = loaded_app(seed()).await;

        request_page(&mut app, 2);
        request_page(&mut app, 1);
        assert!(settle_until(&mut app, |a| a.connectors.loading.is_none()).await);
        assert_eq!(app.connectors.collection.window().page, 1);
    }

    #[tokio::test]
    async fn toggles_mark_config_dirty() {
        let (mut app, _demo) = test_app(seed());
        let before = app.config.theme;

        update(&mut app, AppMessage::ToggleTheme);
        assert!(app.config_dirty);
        assert_eq!(app.config.theme, before.toggle());

        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.config.theme, before);

        let language = app.config.language.clone();
        update(&mut app, AppMessage::ToggleLanguage);
        assert_ne!(app.config.language, language);
        update(&mut app, AppMessage::ToggleLanguage);
        assert_eq!(app.config.language, language);
    }
}
