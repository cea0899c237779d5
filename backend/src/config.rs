use std::env;

pub struct ServerConfig {
    // for dev its 'development' and for prod anything else
    pub environment: String,
    pub static_dir: String,
    pub bind_address: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "dist".to_string()),
            bind_address: env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
