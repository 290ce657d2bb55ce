//! Environment-sourced configuration, read once at startup and passed down
//! explicitly so the core stays free of ambient process state.

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8700";
const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_LOCALE: &str = "en_US";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub data_dir: String,
    /// Locale requested from the remote profile API.
    pub locale: String,
    /// Optional host override for the remote profile API (tests, proxies).
    pub profile_api_base_url: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            listen_addr: env_or("ARMORY_LISTEN_ADDR", DEFAULT_LISTEN_ADDR),
            data_dir: env_or("ARMORY_DATA_DIR", DEFAULT_DATA_DIR),
            locale: env_or("ARMORY_LOCALE", DEFAULT_LOCALE),
            profile_api_base_url: env_opt("PROFILE_API_BASE_URL"),
        }
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    env_opt(key).unwrap_or_else(|| fallback.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
