use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinksnipError {
    EmptyInput(String),
    InvalidUrl(String),
    InvalidAliasFormat(String),
    AliasTooShort(String),
    AliasTaken(String),
    DuplicateSubmission(String),
    AllProvidersUnavailable(String),
    Clipboard(String),
    Browser(String),
    Io(String),
    Config(String),
    Serialization(String),
}

impl LinksnipError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinksnipError::EmptyInput(_) => "E001",
            LinksnipError::InvalidUrl(_) => "E002",
            LinksnipError::InvalidAliasFormat(_) => "E003",
            LinksnipError::AliasTooShort(_) => "E004",
            LinksnipError::AliasTaken(_) => "E005",
            LinksnipError::DuplicateSubmission(_) => "E006",
            LinksnipError::AllProvidersUnavailable(_) => "E007",
            LinksnipError::Clipboard(_) => "E008",
            LinksnipError::Browser(_) => "E009",
            LinksnipError::Io(_) => "E010",
            LinksnipError::Config(_) => "E011",
            LinksnipError::Serialization(_) => "E012",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinksnipError::EmptyInput(_) => "Empty Input",
            LinksnipError::InvalidUrl(_) => "Invalid URL",
            LinksnipError::InvalidAliasFormat(_) => "Invalid Alias Format",
            LinksnipError::AliasTooShort(_) => "Alias Too Short",
            LinksnipError::AliasTaken(_) => "Alias Taken",
            LinksnipError::DuplicateSubmission(_) => "Duplicate Submission",
            LinksnipError::AllProvidersUnavailable(_) => "All Providers Unavailable",
            LinksnipError::Clipboard(_) => "Clipboard Error",
            LinksnipError::Browser(_) => "Browser Error",
            LinksnipError::Io(_) => "I/O Error",
            LinksnipError::Config(_) => "Configuration Error",
            LinksnipError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情（用于日志）
    pub fn detail(&self) -> &str {
        match self {
            LinksnipError::EmptyInput(msg) => msg,
            LinksnipError::InvalidUrl(msg) => msg,
            LinksnipError::InvalidAliasFormat(msg) => msg,
            LinksnipError::AliasTooShort(msg) => msg,
            LinksnipError::AliasTaken(msg) => msg,
            LinksnipError::DuplicateSubmission(msg) => msg,
            LinksnipError::AllProvidersUnavailable(msg) => msg,
            LinksnipError::Clipboard(msg) => msg,
            LinksnipError::Browser(msg) => msg,
            LinksnipError::Io(msg) => msg,
            LinksnipError::Config(msg) => msg,
            LinksnipError::Serialization(msg) => msg,
        }
    }

    /// 面向用户的固定文案（在输入框附近内联展示）
    ///
    /// 提交流程的每一种错误都对应一条固定的提示语；
    /// 其余错误给出通用提示，详情只进日志。
    pub fn user_message(&self) -> &'static str {
        match self {
            LinksnipError::EmptyInput(_) => "Please enter a URL to shorten",
            LinksnipError::InvalidUrl(_) => "Please enter a valid URL (e.g., https://example.com)",
            LinksnipError::InvalidAliasFormat(_) => {
                "Alias can only contain letters, numbers, hyphens and underscores"
            }
            LinksnipError::AliasTooShort(_) => "Alias must be at least 3 characters long",
            LinksnipError::AliasTaken(_) => "This alias is already taken. Try another one!",
            LinksnipError::DuplicateSubmission(_) => {
                "This URL has already been shortened. Check your list below!"
            }
            LinksnipError::AllProvidersUnavailable(_) => {
                "All URL shortening services are currently unavailable. Please try again later."
            }
            LinksnipError::Clipboard(_) => "Could not copy to the clipboard",
            LinksnipError::Browser(_) => "Could not open the browser",
            LinksnipError::Io(_) | LinksnipError::Config(_) | LinksnipError::Serialization(_) => {
                "Something went wrong. Please try again."
            }
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    #[cfg(feature = "cli")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.detail().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.detail())
    }
}

impl fmt::Display for LinksnipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinksnipError {}

// 便捷的构造函数
impl LinksnipError {
    pub fn empty_input() -> Self {
        LinksnipError::EmptyInput("input was empty after trimming".to_string())
    }

    pub fn invalid_url<T: Into<String>>(msg: T) -> Self {
        LinksnipError::InvalidUrl(msg.into())
    }

    pub fn invalid_alias_format<T: Into<String>>(msg: T) -> Self {
        LinksnipError::InvalidAliasFormat(msg.into())
    }

    pub fn alias_too_short<T: Into<String>>(msg: T) -> Self {
        LinksnipError::AliasTooShort(msg.into())
    }

    pub fn alias_taken<T: Into<String>>(msg: T) -> Self {
        LinksnipError::AliasTaken(msg.into())
    }

    pub fn duplicate_submission<T: Into<String>>(msg: T) -> Self {
        LinksnipError::DuplicateSubmission(msg.into())
    }

    pub fn all_providers_unavailable<T: Into<String>>(msg: T) -> Self {
        LinksnipError::AllProvidersUnavailable(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        LinksnipError::Clipboard(msg.into())
    }

    pub fn browser<T: Into<String>>(msg: T) -> Self {
        LinksnipError::Browser(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        LinksnipError::Io(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinksnipError::Config(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinksnipError::Serialization(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for LinksnipError {
    fn from(err: std::io::Error) -> Self {
        LinksnipError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LinksnipError {
    fn from(err: serde_json::Error) -> Self {
        LinksnipError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinksnipError>;
