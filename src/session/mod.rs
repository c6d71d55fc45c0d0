//! 会话期状态：短链记录、列表与「已复制」角标
//!
//! 这一层完全驻留内存，进程退出即消失。

mod copied;
mod list;
mod models;

pub use copied::CopiedMarker;
pub use list::SessionList;
pub use models::ShortenedLink;
