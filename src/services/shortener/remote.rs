//! 远程缩短后端
//!
//! 把长链接提交给外部缩短服务（HTTP GET，响应体即短链接）。
//! 主服务失败后换备用服务再试一次，两个都失败才报错。

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use ureq::Agent;

use super::provider::{ShortenResult, Shortener};
use crate::errors::{LinksnipError, Result};

/// HTTP 请求超时时间
const HTTP_TIMEOUT_SECS: u64 = 10;

/// 全局 HTTP Agent（ureq 的 Agent 是 Send + Sync）
static HTTP_AGENT: OnceLock<Agent> = OnceLock::new();

fn get_agent() -> &'static Agent {
    HTTP_AGENT.get_or_init(|| {
        Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
            .build()
            .into()
    })
}

/// 单个缩短服务端点
///
/// 成功返回短链接字符串，任何失败（网络、非 2xx、响应体不是 URL）
/// 都返回 None，由调用方决定是否换下一个端点。
trait ShortenApi: Send + Sync {
    fn create(&self, long_url: &str) -> Option<String>;
    fn name(&self) -> &'static str;
}

/// 基于 URL 模板的 HTTP 端点
///
/// 模板用 `{url}` 作为占位符，请求前对长链接做 URL 编码。
/// 例如: `https://tinyurl.com/api-create.php?url={url}`
struct HttpApi {
    label: &'static str,
    url_template: String,
}

impl HttpApi {
    fn new(label: &'static str, url_template: &str) -> Self {
        Self {
            label,
            url_template: url_template.to_string(),
        }
    }

    fn build_url(&self, long_url: &str) -> String {
        self.url_template
            .replace("{url}", &urlencoding::encode(long_url))
    }
}

impl ShortenApi for HttpApi {
    fn create(&self, long_url: &str) -> Option<String> {
        let url = self.build_url(long_url);
        let agent = get_agent();

        let resp = match agent.get(&url).call() {
            Ok(r) => r,
            Err(e) => {
                warn!("Shorten API request to \"{}\" failed: {}", url, e);
                return None;
            }
        };

        let body = match resp.into_body().read_to_string() {
            Ok(b) => b,
            Err(e) => {
                warn!("Shorten API response from \"{}\" read failed: {}", url, e);
                return None;
            }
        };

        // 服务约定：成功时响应体就是裸短链接
        let short_url = body.trim();
        if !short_url.starts_with("http") {
            warn!(
                "Shorten API response from \"{}\" is not a URL: {:?}",
                url, short_url
            );
            return None;
        }

        Some(short_url.to_string())
    }

    fn name(&self) -> &'static str {
        self.label
    }
}

/// 依次尝试各端点，第一个成功的即为结果
///
/// 备用端点只在前一个失败之后才会被调用，不做并发竞速。
fn run_provider_chain(apis: &[Box<dyn ShortenApi>], long_url: &str) -> Result<String> {
    for api in apis {
        debug!("Shorten: trying {} API", api.name());
        if let Some(short_url) = api.create(long_url) {
            return Ok(short_url);
        }
    }

    Err(LinksnipError::all_providers_unavailable(
        "primary and fallback APIs both failed",
    ))
}

/// 远程缩短后端
pub struct RemoteShortener {
    apis: Arc<Vec<Box<dyn ShortenApi>>>,
}

impl RemoteShortener {
    /// 用两个端点模板构造（主 + 备用）
    pub fn from_templates(primary: &str, fallback: &str) -> Self {
        Self {
            apis: Arc::new(vec![
                Box::new(HttpApi::new("primary", primary)),
                Box::new(HttpApi::new("fallback", fallback)),
            ]),
        }
    }
}

#[async_trait]
impl Shortener for RemoteShortener {
    /// 缩短长链接（同步 HTTP 调用放在 spawn_blocking 中执行）
    async fn shorten(&self, long_url: &str, _alias: Option<&str>) -> Result<ShortenResult> {
        let apis = Arc::clone(&self.apis);
        let url = long_url.to_string();

        let short_url = tokio::task::spawn_blocking(move || run_provider_chain(&apis, &url))
            .await
            .map_err(|e| {
                LinksnipError::all_providers_unavailable(format!("spawn_blocking failed: {}", e))
            })??;

        Ok(ShortenResult {
            short_url,
            short_code: None,
            clicks: None,
        })
    }

    fn name(&self) -> &'static str {
        "Remote"
    }

    /// 外部服务不接受自定义别名
    fn supports_alias(&self) -> bool {
        false
    }

    fn is_demo(&self) -> bool {
        false
    }
}
