use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// 短链后端选择
///
/// remote：把 URL 委托给外部服务（TinyURL，失败换 is.gd）
/// local：本地生成短码，纯演示，不发任何网络请求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShortenerBackend {
    #[default]
    Remote,
    Local,
}

impl std::fmt::Display for ShortenerBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Local => write!(f, "local"),
        }
    }
}

impl std::str::FromStr for ShortenerBackend {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "local" => Ok(Self::Local),
            _ => Err(format!(
                "Invalid shortener backend: '{}'. Valid: remote, local",
                s
            )),
        }
    }
}

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - shortener: 后端选择与本地模式参数
/// - providers: 远程模式的两个服务端点
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub shortener: ShortenerConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：SNIP，分隔符：__
    /// 示例：SNIP__SHORTENER__BACKEND=local
    pub fn load() -> Self {
        Self::load_from("config.toml")
    }

    /// 从指定路径加载配置（供 `-c/--config` 使用）
    pub fn load_from(path: &str) -> Self {
        use config::{Config, Environment, File};

        let builder = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖，前缀 SNIP，分隔符 __
            .add_source(
                Environment::with_prefix("SNIP")
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => {
                    if std::path::Path::new(path).exists() {
                        eprintln!("[INFO] Configuration loaded from: {}", path);
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;

        // Create parent directories if needed
        if let Some(parent) = path.as_ref().parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 短链后端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenerConfig {
    #[serde(default)]
    pub backend: ShortenerBackend,
    /// 本地模式展示域名，短码直接拼接在后面
    #[serde(default = "default_display_domain")]
    pub display_domain: String,
    /// 本地模式随机短码长度
    #[serde(default = "default_code_length")]
    pub code_length: usize,
    /// 本地模式人造延迟下限（毫秒）
    #[serde(default = "default_latency_min_ms")]
    pub latency_min_ms: u64,
    /// 本地模式人造延迟上限（毫秒）
    #[serde(default = "default_latency_max_ms")]
    pub latency_max_ms: u64,
}

/// 远程服务端点配置
///
/// URL 模板用 `{url}` 作为长链接占位符，请求前会做 URL 编码。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default = "default_primary_api")]
    pub primary_api: String,
    #[serde(default = "default_fallback_api")]
    pub fallback_api: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_display_domain() -> String {
    "https://sho.rt/".to_string()
}

fn default_code_length() -> usize {
    6
}

fn default_latency_min_ms() -> u64 {
    600
}

fn default_latency_max_ms() -> u64 {
    1000
}

fn default_primary_api() -> String {
    "https://tinyurl.com/api-create.php?url={url}".to_string()
}

fn default_fallback_api() -> String {
    "https://is.gd/create.php?format=simple&url={url}".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            backend: ShortenerBackend::default(),
            display_domain: default_display_domain(),
            code_length: default_code_length(),
            latency_min_ms: default_latency_min_ms(),
            latency_max_ms: default_latency_max_ms(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            primary_api: default_primary_api(),
            fallback_api: default_fallback_api(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_real_providers() {
        let config = StaticConfig::default();
        assert_eq!(config.shortener.backend, ShortenerBackend::Remote);
        assert!(config.providers.primary_api.contains("tinyurl.com"));
        assert!(config.providers.fallback_api.contains("is.gd"));
        assert!(config.providers.primary_api.contains("{url}"));
        assert!(config.providers.fallback_api.contains("{url}"));
    }

    #[test]
    fn test_backend_round_trip() {
        assert_eq!(
            "local".parse::<ShortenerBackend>().unwrap(),
            ShortenerBackend::Local
        );
        assert_eq!(
            "REMOTE".parse::<ShortenerBackend>().unwrap(),
            ShortenerBackend::Remote
        );
        assert!("carrier-pigeon".parse::<ShortenerBackend>().is_err());
        assert_eq!(ShortenerBackend::Local.to_string(), "local");
        assert_eq!(ShortenerBackend::Remote.as_ref(), "remote");
    }

    #[test]
    fn test_sample_config_parses_back() {
        let sample = StaticConfig::generate_sample_config();
        let parsed: StaticConfig = toml::from_str(&sample).expect("sample config should parse");
        assert_eq!(parsed.shortener.code_length, 6);
        assert_eq!(parsed.shortener.latency_min_ms, 600);
        assert_eq!(parsed.shortener.latency_max_ms, 1000);
    }
}
