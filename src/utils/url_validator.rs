//! URL 规范化与验证模块
//!
//! 把用户输入的原始文本整理成带 scheme 的绝对 URL

use url::Url;

/// URL 验证错误
#[derive(Debug)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidScheme(String),
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::InvalidScheme(scheme) => write!(
                f,
                "Invalid scheme: {}. Only http and https are allowed",
                scheme
            ),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

impl From<UrlValidationError> for crate::errors::LinksnipError {
    fn from(err: UrlValidationError) -> Self {
        match err {
            UrlValidationError::EmptyUrl => crate::errors::LinksnipError::empty_input(),
            other => crate::errors::LinksnipError::invalid_url(other.to_string()),
        }
    }
}

/// 输入是否自带 `scheme://` 前缀
///
/// 带任何显式 scheme 的输入不再补 https://，否则
/// `ftp://x` 会被补成 `https://ftp://x`（host 为 ftp）而混过校验。
fn has_explicit_scheme(s: &str) -> bool {
    match s.find("://") {
        Some(pos) if pos > 0 => s[..pos].chars().enumerate().all(|(i, c)| {
            if i == 0 {
                c.is_ascii_alphabetic()
            } else {
                c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.'
            }
        }),
        _ => false,
    }
}

/// 规范化并验证用户输入的 URL
///
/// 处理步骤：
/// 1. 去掉首尾空白，空串直接报错
/// 2. 没有显式 scheme 时自动补 https://
/// 3. 用 url crate 解析，scheme 必须是 http 或 https
///
/// 成功返回规范化后的字符串本身，不做任何进一步的
/// 标准化（不去尾部斜杠、不改写 query/fragment）。
pub fn normalize_url(raw: &str) -> Result<String, UrlValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let processed = if has_explicit_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed =
        Url::parse(&processed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(processed),
        other => Err(UrlValidationError::InvalidScheme(other.to_string())),
    }
}
