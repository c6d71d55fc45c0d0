//! TUI 事件类型
//!
//! 键盘输入、后台缩短任务与定时清除都汇入同一条事件通道，
//! 主循环串行消费，状态永远只被一个任务修改。

use ratatui::crossterm::event::KeyEvent;

use crate::errors::Result;
use crate::session::ShortenedLink;

/// All events the main loop consumes
#[derive(Debug)]
pub enum TuiEvent {
    /// Raw key press from the input pump
    Key(KeyEvent),
    /// A background shortening task finished
    SubmissionFinished(Result<ShortenedLink>),
    /// A copied marker's display window elapsed
    CopiedExpired { token: u64 },
}
