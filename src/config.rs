use serde::Deserialize;

/// Placeholder shipped in `.env.example` for the Together AI key
pub const TOGETHER_KEY_PLACEHOLDER: &str = "your_together_key_here";

/// Placeholder shipped in `.env.example` for the TMDB key
pub const TMDB_KEY_PLACEHOLDER: &str = "your_tmdb_key_here";

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Together AI API key; absent means every request is served from the offline catalog
    #[serde(default)]
    pub together_api_key: Option<String>,

    /// Together AI base URL (OpenAI-compatible)
    #[serde(default = "default_together_api_url")]
    pub together_api_url: String,

    /// Model identifier sent with every completion request
    #[serde(default = "default_together_model")]
    pub together_model: String,

    /// TMDB API key; absent means posters resolve to the "no key" placeholder
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Prefix joined with a TMDB `poster_path`
    #[serde(default = "default_tmdb_image_url")]
    pub tmdb_image_url: String,

    /// Upper bound for a single poster lookup
    #[serde(default = "default_poster_timeout_secs")]
    pub poster_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_together_api_url() -> String {
    "https://api.together.xyz/v1".to_string()
}

fn default_together_model() -> String {
    "ServiceNow-AI/Apriel-1.5-15b-Thinker".to_string()
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_poster_timeout_secs() -> u64 {
    5
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            together_api_key: None,
            together_api_url: default_together_api_url(),
            together_model: default_together_model(),
            tmdb_api_key: None,
            tmdb_api_url: default_tmdb_api_url(),
            tmdb_image_url: default_tmdb_image_url(),
            poster_timeout_secs: default_poster_timeout_secs(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// The model-access key, if one is usable
    pub fn model_credential(&self) -> Option<&str> {
        usable_credential(self.together_api_key.as_deref(), TOGETHER_KEY_PLACEHOLDER)
    }

    /// The metadata-service key, if one is usable
    pub fn tmdb_credential(&self) -> Option<&str> {
        usable_credential(self.tmdb_api_key.as_deref(), TMDB_KEY_PLACEHOLDER)
    }
}

fn usable_credential<'a>(value: Option<&'a str>, placeholder: &str) -> Option<&'a str> {
    value.filter(|key| !key.is_empty() && *key != placeholder)
}
