//! 英文翻译 (en-US)

use connector_console_core::StatusLabels;

use super::keys::{
    CommonTexts, ConfirmDeleteTexts, DetailsTexts, HelpTexts, HintTexts, ModalTexts,
    PaginationTexts, RowActionTexts, StatusBarTexts, TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Connector Console",
        cancel: "Cancel",
        delete: "Delete",
        close: "Close",
        loading: "Loading...",
        yes: "Yes",
        no: "No",
    },

    table: TableTexts {
        title: "Connectors",
        name: "Name",
        type_: "Type",
        category: "Category",
        status: "Status",
        actions: "Actions",
        category_missing: "-",
        unnamed: "(loading)",
        empty: "No connectors",
    },

    status: StatusLabels::EN,

    actions: RowActionTexts {
        title: "Actions",
        start: "Start",
        stop: "Stop",
        delete: "Delete",
        details: "Details",
    },

    details: DetailsTexts {
        title: "Details",
        nothing_selected: "Press Enter on a row to select a connector",
        id: "ID",
        created_at: "Created",
        can_start: "Can start",
        can_stop: "Can stop",
        can_delete: "Can delete",
    },

    pagination: PaginationTexts {
        page: "Page",
        of: "of",
        items: "items",
    },

    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "Delete connector",
            message: "This connector will be permanently deleted:",
        },
        help: HelpTexts {
            title: "Help",
            lines: &[
                ("↑↓ / j k", "Move cursor"),
                ("Enter", "Select connector"),
                ("a", "Open row actions"),
                ("s / x / d", "Start / Stop / Delete"),
                ("[ ] / PgUp PgDn", "Previous / next page"),
                ("r", "Refresh page"),
                ("l / t", "Toggle language / theme"),
                ("Esc", "Close dialog / clear selection"),
                ("q", "Quit"),
            ],
        },
        error_title: "Error",
    },

    status_bar: StatusBarTexts {
        loading_page: "Loading page",
        page_load_failed: "Page load failed",
        command_issued: "Command sent",
        command_rejected: "Command rejected",
        delete_issued: "Delete requested",
        language_changed: "Language: English",
        theme_changed: "Theme changed",
    },

    hints: HintTexts {
        select: "Select",
        open: "Open",
        actions: "Actions",
        page: "Page",
        help: "Help",
        quit: "Quit",
    },
};
