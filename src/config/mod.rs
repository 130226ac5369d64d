use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Runtime settings for status-service. The HTTP contract itself is fixed;
/// the listen port is the only deployment knob.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Port for the HTTP listener. 0 requests an ephemeral port from the
    /// OS; the bound port is reported by `Application::port()`.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Layered load: `.env`, then an optional `configuration` file, then
    /// `APP__`-prefixed environment variables (e.g. `APP__PORT=9000`).
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let settings = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
