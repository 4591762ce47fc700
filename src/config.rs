/// Configuration management
///
/// All settings come from the environment (optionally via a `.env` file
/// loaded in `main`). `envy` maps `HOST`, `PORT`, `DATABASE_URL`,
/// `JWT_SECRET` and `JWT_EXPIRES_IN_SECS` onto the fields below.
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database_url: String,
    /// Process-wide secret used to sign and verify tokens.
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    #[serde(default = "default_jwt_expires_in_secs")]
    pub jwt_expires_in_secs: i64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_jwt_expires_in_secs() -> i64 {
    86_400
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_optional_fields() {
        let config: Config = envy::from_iter(vec![
            ("DATABASE_URL".to_string(), "postgres://localhost/blog".to_string()),
            ("JWT_SECRET".to_string(), "secret".to_string()),
        ])
        .expect("config should deserialize");

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.jwt_expires_in_secs, 86_400);
    }
}
