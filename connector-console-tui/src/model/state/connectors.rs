//! 连接器页面状态

use connector_console_core::ConnectorsCollectionController;

/// 连接器页面状态
///
/// `collection` 持有当前页与选中项；`cursor` 只是键盘光标所在的行，
/// 与选中项相互独立（按 Enter 才会选中）。
pub struct ConnectorsState {
    pub collection: ConnectorsCollectionController,
    /// 光标所在行
    pub cursor: usize,
    /// 正在加载的页码（只接受最近一次请求的结果）
    pub loading: Option<u32>,
    /// 最近一次分页失败的信息
    pub error: Option<String>,
}

impl ConnectorsState {
    pub fn new(collection: ConnectorsCollectionController) -> Self {
        Self {
            collection,
            cursor: 0,
            loading: None,
            error: None,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let len = self.collection.len();
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.cursor = self.collection.len().saturating_sub(1);
    }

    /// 光标所在行的连接器 ID
    pub fn cursor_id(&self) -> Option<&str> {
        self.collection.ids().get(self.cursor).map(String::as_str)
    }

    /// 页面内容变化后让光标回到有效范围
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.collection.len().saturating_sub(1));
    }
}
