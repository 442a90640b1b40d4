use std::env;

/// Process configuration, read once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mongodb_uri: String,
    pub database: String,
    pub collection: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// | Variable             | Default                     |
    /// |----------------------|-----------------------------|
    /// | `MONGODB_URI`        | `mongodb://localhost:27017` |
    /// | `MONGODB_DATABASE`   | `egen`                      |
    /// | `MONGODB_COLLECTION` | `users`                     |
    /// | `HOST`               | `0.0.0.0`                   |
    /// | `PORT`               | `8000`                      |
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = var("PORT", "8000");
        let port = port
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT '{}': {}", port, e))?;

        Ok(Self {
            mongodb_uri: var("MONGODB_URI", "mongodb://localhost:27017"),
            database: var("MONGODB_DATABASE", "egen"),
            collection: var("MONGODB_COLLECTION", "users"),
            host: var("HOST", "0.0.0.0"),
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
