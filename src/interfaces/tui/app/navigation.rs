//! Navigation and selection logic

use super::state::{App, Focus};

impl App {
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn move_selection_down(&mut self) {
        let len = self.session.len();
        if self.selected_index < len.saturating_sub(1) {
            self.selected_index += 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        let len = self.session.len();
        if len > 0 {
            self.selected_index = len - 1;
        }
        self.adjust_scroll_offset();
    }

    /// 删除记录后把光标夹回合法范围，列表空了焦点退回表单
    pub fn clamp_selection(&mut self) {
        let len = self.session.len();
        if len == 0 {
            self.selected_index = 0;
            self.scroll_offset = 0;
            if self.focus == Focus::LinkList {
                self.focus = Focus::UrlField;
            }
            return;
        }
        if self.selected_index >= len {
            self.selected_index = len - 1;
        }
        self.adjust_scroll_offset();
    }

    /// 调整 scroll_offset 确保 selected_index 在可见窗口内
    pub fn adjust_scroll_offset(&mut self) {
        let vh = self.last_visible_height.max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
        if self.selected_index >= self.scroll_offset + vh {
            self.scroll_offset = self.selected_index - vh + 1;
        }
    }
}
