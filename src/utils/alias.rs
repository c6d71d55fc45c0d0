//! 自定义别名校验
//!
//! 别名只允许 `[A-Za-z0-9_-]`，长度至少 3 个字符。
//! 是否与已有短码冲突由提交流程结合会话列表判断。

/// 别名最短长度
pub const MIN_ALIAS_LENGTH: usize = 3;

/// 别名验证错误
#[derive(Debug)]
pub enum AliasValidationError {
    InvalidFormat(String),
    TooShort(usize),
}

impl std::fmt::Display for AliasValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(alias) => {
                write!(f, "Alias '{}' contains characters outside [A-Za-z0-9_-]", alias)
            }
            Self::TooShort(len) => write!(
                f,
                "Alias has {} characters, at least {} required",
                len, MIN_ALIAS_LENGTH
            ),
        }
    }
}

impl std::error::Error for AliasValidationError {}

impl From<AliasValidationError> for crate::errors::LinksnipError {
    fn from(err: AliasValidationError) -> Self {
        match err {
            AliasValidationError::InvalidFormat(_) => {
                crate::errors::LinksnipError::invalid_alias_format(err.to_string())
            }
            AliasValidationError::TooShort(_) => {
                crate::errors::LinksnipError::alias_too_short(err.to_string())
            }
        }
    }
}

/// 规范化并校验别名输入
///
/// 空白输入视为「未提供别名」，返回 `Ok(None)`。
pub fn normalize_alias(raw: &str) -> Result<Option<String>, AliasValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(None);
    }

    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AliasValidationError::InvalidFormat(trimmed.to_string()));
    }

    if trimmed.len() < MIN_ALIAS_LENGTH {
        return Err(AliasValidationError::TooShort(trimmed.len()));
    }

    Ok(Some(trimmed.to_string()))
}
