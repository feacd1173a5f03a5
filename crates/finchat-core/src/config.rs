use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Process-level settings. Loaded once at startup and handed to whoever
/// constructs the session's collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Language replies should be delivered in (BCP-47 primary subtag).
    pub language: String,
    pub generation: GenerationSettings,
    pub translation: TranslationSettings,
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub model: String,
    pub api_key_env: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationSettings {
    pub base_url: Option<String>,
    /// Language the generation service answers in before translation.
    pub source_lang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Transcript directory; defaults to `~/.finchat/transcripts/`.
    pub data_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            generation: GenerationSettings {
                model: "gemini-1.5-flash".to_string(),
                api_key_env: "GEMINI_API_KEY".to_string(),
                base_url: None,
            },
            translation: TranslationSettings {
                base_url: None,
                source_lang: "en".to_string(),
            },
            store: StoreSettings { data_dir: None },
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("finchat")
            .join("config.toml")
    }

    pub fn load() -> Self {
        let config_path = Self::config_path();
        if config_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&config_path) {
                if let Ok(settings) = toml::from_str(&content) {
                    return settings;
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> std::io::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(config_path, content)
    }
}
