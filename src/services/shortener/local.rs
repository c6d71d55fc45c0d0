//! 本地模拟后端
//!
//! 不发任何网络请求：本地生成短码，拼接展示域名，
//! 用人为延迟模拟网络耗时。生成的短链接不可真实访问。

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::provider::{ShortenResult, Shortener};
use crate::config::ShortenerConfig;
use crate::errors::Result;
use crate::utils::generate_random_code;

/// 装饰用点击数上限（不含）
const FAKE_CLICKS_MAX: usize = 100;

/// 本地模拟后端
pub struct LocalShortener {
    display_domain: String,
    code_length: usize,
    latency_min_ms: u64,
    latency_max_ms: u64,
}

impl LocalShortener {
    /// 从配置构造，延迟区间颠倒时自动交换
    pub fn new(config: &ShortenerConfig) -> Self {
        let (latency_min_ms, latency_max_ms) =
            if config.latency_min_ms <= config.latency_max_ms {
                (config.latency_min_ms, config.latency_max_ms)
            } else {
                warn!(
                    "Local shortener: latency_min_ms {} > latency_max_ms {}, swapping",
                    config.latency_min_ms, config.latency_max_ms
                );
                (config.latency_max_ms, config.latency_min_ms)
            };

        Self {
            display_domain: config.display_domain.clone(),
            code_length: config.code_length,
            latency_min_ms,
            latency_max_ms,
        }
    }

    /// 展示域名 + 短码，域名尾部斜杠可有可无
    fn compose_short_url(&self, code: &str) -> String {
        if self.display_domain.ends_with('/') {
            format!("{}{}", self.display_domain, code)
        } else {
            format!("{}/{}", self.display_domain, code)
        }
    }
}

#[async_trait]
impl Shortener for LocalShortener {
    async fn shorten(&self, long_url: &str, alias: Option<&str>) -> Result<ShortenResult> {
        // 模拟网络往返耗时
        let delay_ms = rand::random_range(self.latency_min_ms..=self.latency_max_ms);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        let code = match alias {
            Some(alias) => alias.to_string(),
            None => generate_random_code(self.code_length),
        };
        let short_url = self.compose_short_url(&code);

        debug!("Local shorten: {} -> {}", long_url, short_url);

        Ok(ShortenResult {
            short_url,
            short_code: Some(code),
            clicks: Some(rand::random_range(0..FAKE_CLICKS_MAX)),
        })
    }

    fn name(&self) -> &'static str {
        "Local"
    }

    /// 短码本来就是本地生成的，别名只是替换它
    fn supports_alias(&self) -> bool {
        true
    }

    fn is_demo(&self) -> bool {
        true
    }
}
