//! 短链后端服务模块
//!
//! 提供链接缩短能力，支持：
//! - 远程服务委托（TinyURL，失败回退 is.gd）
//! - 本地模拟后端（不联网，演示用）

mod local;
mod provider;
mod remote;

pub use local::LocalShortener;
pub use provider::{ShortenResult, Shortener, ShortenerProvider};
pub use remote::RemoteShortener;
