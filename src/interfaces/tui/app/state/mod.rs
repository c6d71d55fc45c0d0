//! App state definition and basic state management
//!
//! 包含核心 App 结构和基础状态管理，以及拆分后的子状态模块

mod form_state;

pub use form_state::FormState;

use crate::services::{SubmissionFlow, SubmissionService};
use crate::session::{CopiedMarker, SessionList, ShortenedLink};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    Help,
    Exiting,
}

/// 键盘焦点
///
/// Tab 在可见的焦点之间循环：别名框只在展开时参与，
/// 列表只在非空时参与。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    UrlField,
    AliasField,
    LinkList,
}

pub struct App {
    pub service: SubmissionService,
    pub session: SessionList,
    pub flow: SubmissionFlow,
    pub copied: CopiedMarker,
    pub current_screen: CurrentScreen,
    pub focus: Focus,

    // Form state for the shorten panel
    pub form: FormState,

    // List UI state
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub last_visible_height: usize,

    // Status bar
    pub status_message: String,
    pub error_message: String,
}

impl App {
    pub fn new(service: SubmissionService) -> App {
        App {
            service,
            session: SessionList::new(),
            flow: SubmissionFlow::new(),
            copied: CopiedMarker::new(),
            current_screen: CurrentScreen::Main,
            focus: Focus::UrlField,
            form: FormState::new(),
            selected_index: 0,
            scroll_offset: 0,
            last_visible_height: 1,
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    pub fn get_selected_link(&self) -> Option<&ShortenedLink> {
        self.session.get(self.selected_index)
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    /// 切换到下一个可用焦点
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::UrlField if self.form.alias_visible => Focus::AliasField,
            Focus::UrlField | Focus::AliasField => {
                if self.session.is_empty() {
                    Focus::UrlField
                } else {
                    Focus::LinkList
                }
            }
            Focus::LinkList => Focus::UrlField,
        };
    }

    /// 焦点是否落在表单输入框上
    pub fn is_editing(&self) -> bool {
        matches!(self.focus, Focus::UrlField | Focus::AliasField)
    }
}
