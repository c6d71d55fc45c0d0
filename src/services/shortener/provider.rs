//! 短链后端抽象层
//!
//! 统一的缩短接口，根据配置选择实现：
//! 1. backend = remote → RemoteShortener（主服务失败后换备用服务）
//! 2. backend = local → LocalShortener（本地生成短码，不发请求）
//!
//! 选择只发生在启动时，之后调用方不再关心后端种类。

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::local::LocalShortener;
use super::remote::RemoteShortener;
use crate::config::{ShortenerBackend, StaticConfig};
use crate::errors::Result;

/// 一次缩短调用的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResult {
    /// 完整短链接
    pub short_url: String,
    /// 短码（仅本地后端填充）
    pub short_code: Option<String>,
    /// 装饰用点击数（仅本地后端填充，无真实含义）
    pub clicks: Option<usize>,
}

/// 缩短后端 trait
#[async_trait]
pub trait Shortener: Send + Sync {
    /// 缩短一个已规范化的长链接
    ///
    /// `alias` 仅在 `supports_alias()` 为 true 时有意义，
    /// 其他后端直接忽略。
    async fn shorten(&self, long_url: &str, alias: Option<&str>) -> Result<ShortenResult>;

    /// 获取后端名称（用于日志）
    fn name(&self) -> &'static str;

    /// 是否支持自定义别名
    fn supports_alias(&self) -> bool;

    /// 是否为演示后端（生成的短链接不可真实访问）
    fn is_demo(&self) -> bool;
}

/// 统一缩短 Provider
///
/// 启动时根据配置选择实现
pub struct ShortenerProvider {
    inner: Arc<dyn Shortener>,
}

impl ShortenerProvider {
    /// 根据 StaticConfig 初始化
    ///
    /// backend = remote → RemoteShortener（配置里的两个端点模板）
    /// backend = local → LocalShortener（展示域名 + 短码参数）
    pub fn from_config(config: &StaticConfig) -> Self {
        let inner: Arc<dyn Shortener> = match config.shortener.backend {
            ShortenerBackend::Remote => Arc::new(RemoteShortener::from_templates(
                &config.providers.primary_api,
                &config.providers.fallback_api,
            )),
            ShortenerBackend::Local => Arc::new(LocalShortener::new(&config.shortener)),
        };

        info!("Shortener: initialized with {} backend", inner.name());
        Self { inner }
    }

    /// 直接包装一个后端实现（测试用）
    pub fn with_backend(inner: Arc<dyn Shortener>) -> Self {
        Self { inner }
    }

    /// 缩短一个已规范化的长链接
    pub async fn shorten(&self, long_url: &str, alias: Option<&str>) -> Result<ShortenResult> {
        self.inner.shorten(long_url, alias).await
    }

    /// 获取当前使用的后端名称
    pub fn backend_name(&self) -> &'static str {
        self.inner.name()
    }

    /// 当前后端是否支持自定义别名
    pub fn supports_alias(&self) -> bool {
        self.inner.supports_alias()
    }

    /// 当前后端是否为演示后端
    pub fn is_demo(&self) -> bool {
        self.inner.is_demo()
    }
}

impl Clone for ShortenerProvider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
