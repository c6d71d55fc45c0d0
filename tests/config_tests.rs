use linksnip::config::{ShortenerBackend, StaticConfig};
use tempfile::TempDir;

#[cfg(test)]
mod default_tests {
    use super::*;

    #[test]
    fn test_defaults_use_remote_backend() {
        let config = StaticConfig::default();

        assert_eq!(config.shortener.backend, ShortenerBackend::Remote);
        assert!(config.providers.primary_api.contains("tinyurl.com"));
        assert!(config.providers.fallback_api.contains("is.gd"));
    }

    #[test]
    fn test_default_provider_templates_have_placeholder() {
        let config = StaticConfig::default();

        assert!(config.providers.primary_api.contains("{url}"));
        assert!(config.providers.fallback_api.contains("{url}"));
    }

    #[test]
    fn test_default_local_mode_parameters() {
        let config = StaticConfig::default();

        assert_eq!(config.shortener.display_domain, "https://sho.rt/");
        assert_eq!(config.shortener.code_length, 6);
        assert_eq!(config.shortener.latency_min_ms, 600);
        assert_eq!(config.shortener.latency_max_ms, 1000);
        assert!(config.shortener.latency_min_ms <= config.shortener.latency_max_ms);
    }

    #[test]
    fn test_default_logging() {
        let config = StaticConfig::default();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
        assert!(config.logging.file.is_none());
    }
}

#[cfg(test)]
mod sample_config_tests {
    use super::*;

    #[test]
    fn test_sample_config_contains_all_sections() {
        let sample = StaticConfig::generate_sample_config();

        assert!(sample.contains("[shortener]"));
        assert!(sample.contains("[providers]"));
        assert!(sample.contains("[logging]"));
    }

    #[test]
    fn test_sample_config_parses_back_to_defaults() {
        let sample = StaticConfig::generate_sample_config();
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();

        assert_eq!(parsed.shortener.backend, ShortenerBackend::Remote);
        assert_eq!(parsed.shortener.code_length, 6);
        assert_eq!(parsed.providers.primary_api, StaticConfig::default().providers.primary_api);
    }
}

#[cfg(test)]
mod file_loading_tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = StaticConfig::default();
        config.shortener.backend = ShortenerBackend::Local;
        config.shortener.display_domain = "https://lnk.example/".to_string();
        config.shortener.code_length = 8;
        config.logging.level = "debug".to_string();

        config.save_to_file(&path).unwrap();
        let loaded = StaticConfig::load_from(path.to_str().unwrap());

        assert_eq!(loaded.shortener.backend, ShortenerBackend::Local);
        assert_eq!(loaded.shortener.display_domain, "https://lnk.example/");
        assert_eq!(loaded.shortener.code_length, 8);
        assert_eq!(loaded.logging.level, "debug");
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("config.toml");

        StaticConfig::default().save_to_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_partial_file_fills_rest_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.toml");
        std::fs::write(
            &path,
            "[shortener]\nbackend = \"local\"\ncode_length = 4\n",
        )
        .unwrap();

        let loaded = StaticConfig::load_from(path.to_str().unwrap());

        assert_eq!(loaded.shortener.backend, ShortenerBackend::Local);
        assert_eq!(loaded.shortener.code_length, 4);
        // 未出现的键保持默认值
        assert_eq!(loaded.shortener.display_domain, "https://sho.rt/");
        assert!(loaded.providers.primary_api.contains("tinyurl.com"));
        assert_eq!(loaded.logging.level, "info");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does-not-exist.toml");

        let loaded = StaticConfig::load_from(path.to_str().unwrap());

        assert_eq!(loaded.shortener.backend, ShortenerBackend::Remote);
        assert_eq!(loaded.shortener.code_length, 6);
    }
}

#[cfg(test)]
mod backend_parse_tests {
    use super::*;

    #[test]
    fn test_parse_accepts_any_case() {
        assert_eq!(
            "local".parse::<ShortenerBackend>().unwrap(),
            ShortenerBackend::Local
        );
        assert_eq!(
            "Remote".parse::<ShortenerBackend>().unwrap(),
            ShortenerBackend::Remote
        );
        assert_eq!(
            "LOCAL".parse::<ShortenerBackend>().unwrap(),
            ShortenerBackend::Local
        );
    }

    #[test]
    fn test_parse_rejects_unknown_backend() {
        let err = "carrier-pigeon".parse::<ShortenerBackend>().unwrap_err();
        assert!(err.contains("carrier-pigeon"));
        assert!(err.contains("remote, local"));
    }

    #[test]
    fn test_display_matches_config_spelling() {
        assert_eq!(ShortenerBackend::Remote.to_string(), "remote");
        assert_eq!(ShortenerBackend::Local.to_string(), "local");
        assert_eq!(ShortenerBackend::Local.as_ref(), "local");
    }
}
