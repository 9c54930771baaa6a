use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub version: String,
    pub release_id: String,
    pub server_info_url: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Settings {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            version: "v1".to_string(),
            release_id: env::var("API_VERSION").unwrap_or_else(|_| "snapshot".to_string()),
            server_info_url: env::var("SERVER_INFO_URL")
                .unwrap_or_else(|_| "http://localhost:15000/server_info".to_string()),
        }
    }
}
