use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 一条成功创建的短链接记录
///
/// 创建后除删除外不可变。`short_code` 与 `clicks` 只有
/// 本地后端会填充，远程后端返回的短链按原样保存。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenedLink {
    pub id: Uuid,
    pub original_url: String,
    pub short_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicks: Option<usize>,
}

impl ShortenedLink {
    /// 展示用的创建时间，例如 `14:32:05 · 2026-08-23`
    pub fn created_display(&self) -> String {
        self.created_at.format("%H:%M:%S · %Y-%m-%d").to_string()
    }
}
