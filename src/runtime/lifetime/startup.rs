use tracing::debug;

use crate::config::get_config;
use crate::services::{ShortenerProvider, SubmissionService};

/// 构建提交服务（CLI / TUI 共用）
///
/// 从全局配置选择缩短后端并包装成 SubmissionService，
/// 后端选择只在这里发生一次。
pub fn build_submission_service() -> SubmissionService {
    debug!("Starting pre-startup processing...");

    let config = get_config();
    let provider = ShortenerProvider::from_config(&config);
    SubmissionService::new(provider)
}
