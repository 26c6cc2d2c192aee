use serde::Deserialize;

/// Configuration options for the web server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind to.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from an optional `config.yaml` and the environment.
    ///
    /// Environment variables use the `TECHSUMMIT_` prefix
    /// (`TECHSUMMIT_HOST`, `TECHSUMMIT_PORT`) and take precedence over the
    /// file. Defaults to `127.0.0.1:5000`.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 5000)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("TECHSUMMIT"))
            .build()?
            .try_deserialize()
    }
}
