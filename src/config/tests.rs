#[cfg(test)]
mod tests {
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    use crate::config::Config;
    use crate::config::environment::{env_f32, env_string, env_u32, env_u64};

    fn env_lock<'a>() -> std::sync::MutexGuard<'a, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
    }

    struct EnvGuard {
        saved: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new(vars: &[(&str, Option<&str>)]) -> Self {
            let saved = vars
                .iter()
                .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
                .collect::<Vec<_>>();
            for (key, value) in vars {
                match value {
                    Some(val) => unsafe { std::env::set_var(key, val) },
                    None => unsafe { std::env::remove_var(key) },
                }
            }
            Self { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.saved {
                match value {
                    Some(val) => unsafe { std::env::set_var(key, val) },
                    None => unsafe { std::env::remove_var(key) },
                }
            }
        }
    }

    #[test]
    fn load_from_env_only() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();

        let _env = EnvGuard::new(&[
            ("HOME", Some(home.as_str())),
            ("OPENAI_API_KEY", Some("env-key")),
            ("OPENCAGE_API_KEY", Some("env-geo-key")),
            ("VOYA_TIMEOUT_SECS", Some("45")),
            ("VOYA_MAX_TOKENS", Some("800")),
            ("VOYA_MODEL", Some("env-model")),
            ("VOYA_TEMPERATURE", Some("0.5")),
            ("VOYA_LLM_BASE_URL", None),
            ("VOYA_GEOCODE_BASE_URL", None),
        ]);

        let config = Config::load().unwrap();
        assert_eq!(config.llm.api_key, "env-key");
        assert_eq!(config.llm.timeout_secs, 45);
        assert_eq!(config.geocoding.api_key, "env-geo-key");
        assert_eq!(config.trip.model, "env-model");
        assert_eq!(config.trip.max_tokens, 800);
        assert!((config.trip.temperature - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn load_prefers_env_over_file() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();
        let config_dir = temp_home.path().join(".voya");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config"),
            r#"{
                "llm": { "api_key": "file-key", "timeout_secs": 20 },
                "geocoding": { "api_key": "file-geo-key" },
                "trip": { "model": "file-model", "max_tokens": 512 }
            }"#,
        )
        .unwrap();

        let _env = EnvGuard::new(&[
            ("HOME", Some(home.as_str())),
            ("OPENAI_API_KEY", Some("env-key")),
            ("OPENCAGE_API_KEY", None),
            ("VOYA_TIMEOUT_SECS", Some("40")),
            ("VOYA_MAX_TOKENS", None),
            ("VOYA_MODEL", Some("env-model")),
            ("VOYA_TEMPERATURE", None),
            ("VOYA_LLM_BASE_URL", None),
            ("VOYA_GEOCODE_BASE_URL", None),
        ]);

        let config = Config::load().unwrap();
        assert_eq!(config.llm.api_key, "env-key");
        assert_eq!(config.llm.timeout_secs, 40);
        assert_eq!(config.geocoding.api_key, "file-geo-key");
        assert_eq!(config.trip.model, "env-model");
        assert_eq!(config.trip.max_tokens, 512);
    }

    #[test]
    fn load_errors_without_api_key() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();

        let _env = EnvGuard::new(&[
            ("HOME", Some(home.as_str())),
            ("OPENAI_API_KEY", None),
            ("OPENCAGE_API_KEY", None),
            ("VOYA_TIMEOUT_SECS", None),
            ("VOYA_MAX_TOKENS", None),
            ("VOYA_MODEL", None),
            ("VOYA_TEMPERATURE", None),
            ("VOYA_LLM_BASE_URL", None),
            ("VOYA_GEOCODE_BASE_URL", None),
        ]);

        let err = Config::load().unwrap_err();
        assert!(err.to_string().contains("OpenAI API key not found"));
    }

    #[test]
    fn save_persists_nested_structure() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();

        let _env = EnvGuard::new(&[("HOME", Some(home.as_str()))]);

        let mut config = Config::builder().build().unwrap();
        config.llm.api_key = "test-key".to_string();
        config.llm.timeout_secs = 55;
        config.geocoding.api_key = "geo-key".to_string();
        config.trip.model = "custom-model".to_string();
        config.trip.max_tokens = 999;
        config.save().unwrap();

        let persisted = std::fs::read_to_string(Config::config_path().unwrap()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&persisted).unwrap();
        assert_eq!(json["llm"]["api_key"], "test-key");
        assert_eq!(json["llm"]["timeout_secs"], 55);
        assert_eq!(json["geocoding"]["api_key"], "geo-key");
        assert_eq!(json["trip"]["model"], "custom-model");
        assert_eq!(json["trip"]["max_tokens"], 999);
    }

    #[test]
    fn test_env_string() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[("TEST_VAR", Some("test_value"))]);

        assert_eq!(env_string("TEST_VAR").unwrap(), Some("test_value".to_string()));
        assert_eq!(env_string("NONEXISTENT_VAR").unwrap(), None);
    }

    #[test]
    fn test_env_u64() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[("TEST_U64", Some("123"))]);

        assert_eq!(env_u64("TEST_U64").unwrap(), Some(123));
        assert_eq!(env_u64("NONEXISTENT_VAR").unwrap(), None);
    }

    #[test]
    fn test_env_u32() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[("TEST_U32", Some("456"))]);

        assert_eq!(env_u32("TEST_U32").unwrap(), Some(456));
        assert_eq!(env_u32("NONEXISTENT_VAR").unwrap(), None);
    }

    #[test]
    fn test_env_f32() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[("TEST_F32", Some("0.25")), ("TEST_F32_BAD", Some("warm"))]);

        assert_eq!(env_f32("TEST_F32").unwrap(), Some(0.25));
        assert_eq!(env_f32("NONEXISTENT_VAR").unwrap(), None);
        assert!(env_f32("TEST_F32_BAD").is_err());
    }
}
