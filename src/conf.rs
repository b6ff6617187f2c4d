use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub service_name: String,
    pub port: u16,
    pub database_url: String,
    pub database_pool_max_connections: u32,
    /// The single browser origin allowed to call the API.
    pub cors_origin: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("service_name", "jobboard")?
            .set_default("port", 4000)?
            .set_default("database_url", "postgres://localhost:5432/jobboard")?
            .set_default("database_pool_max_connections", 10)?
            .set_default("cors_origin", "http://localhost:3000")?
            .add_source(Environment::default())
            .build()?;
        Self::from_config(conf)
    }

    pub fn from_config(conf: Config) -> Result<Self, ConfigError> {
        conf.try_deserialize()
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}

#[cfg(test)]
mod tests {
    use config::Config;

    use super::Settings;

    #[test]
    fn test_from_config_overrides() {
        let conf = Config::builder()
            .set_override("service_name", "jobboard-test")
            .and_then(|b| b.set_override("port", "8081"))
            .and_then(|b| b.set_override("database_url", "postgres://db/test"))
            .and_then(|b| b.set_override("database_pool_max_connections", 3))
            .and_then(|b| b.set_override("cors_origin", "http://example.com"))
            .and_then(|b| b.build())
            .unwrap();
        let s = Settings::from_config(conf).unwrap();
        assert_eq!(s.port, 8081);
        assert_eq!(s.database_pool_max_connections, 3);
        assert_eq!(s.cors_origin, "http://example.com");
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let conf = Config::builder()
            .set_override("port", 4000)
            .and_then(|b| b.build())
            .unwrap();
        assert!(Settings::from_config(conf).is_err());
    }
}
