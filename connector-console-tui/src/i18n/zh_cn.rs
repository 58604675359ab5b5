//! 简体中文翻译 (zh-CN)

use connector_console_core::StatusLabels;

use super::keys::{
    CommonTexts, ConfirmDeleteTexts, DetailsTexts, HelpTexts, HintTexts, ModalTexts,
    PaginationTexts, RowActionTexts, StatusBarTexts, TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "连接器控制台",
        cancel: "取消",
        delete: "删除",
        close: "关闭",
        loading: "加载中...",
        yes: "是",
        no: "否",
    },

    table: TableTexts {
        title: "连接器",
        name: "名称",
        type_: "类型",
        category: "类别",
        status: "状态",
        actions: "操作",
        category_missing: "-",
        unnamed: "（加载中）",
        empty: "暂无连接器",
    },

    status: StatusLabels {
        stopped: "已停止",
        starting: "启动中",
        running: "运行中",
        stopping: "停止中",
        deleting: "删除中",
        deleted: "已删除",
        failed: "失败",
        unknown: "未知",
    },

    actions: RowActionTexts {
        title: "操作",
        start: "启动",
        stop: "停止",
        delete: "删除",
        details: "详情",
    },

    details: DetailsTexts {
        title: "详情",
        nothing_selected: "在列表中按 Enter 选择连接器",
        id: "ID",
        created_at: "创建时间",
        can_start: "可启动",
        can_stop: "可停止",
        can_delete: "可删除",
    },

    pagination: PaginationTexts {
        page: "第",
        of: "/",
        items: "条",
    },

    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "删除连接器",
            message: "以下连接器将被永久删除：",
        },
        help: HelpTexts {
            title: "帮助",
            lines: &[
                ("↑↓ / j k", "移动光标"),
                ("Enter", "选择连接器"),
                ("a", "打开行操作"),
                ("s / x / d", "启动 / 停止 / 删除"),
                ("[ ] / PgUp PgDn", "上一页 / 下一页"),
                ("r", "刷新当前页"),
                ("l / t", "切换语言 / 主题"),
                ("Esc", "关闭弹窗 / 取消选择"),
                ("q", "退出"),
            ],
        },
        error_title: "错误",
    },

    status_bar: StatusBarTexts {
        loading_page: "正在加载第",
        page_load_failed: "页面加载失败",
        command_issued: "命令已发送",
        command_rejected: "命令被拒绝",
        delete_issued: "已请求删除",
        language_changed: "语言：简体中文",
        theme_changed: "主题已切换",
    },

    hints: HintTexts {
        select: "选择",
        open: "打开",
        actions: "操作",
        page: "翻页",
        help: "帮助",
        quit: "退出",
    },
};
