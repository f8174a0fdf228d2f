//! For reading application configuration.

use super::error::InitError;
use config::{builder::DefaultState, ConfigBuilder};
use serde::Deserialize;

/// Application configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Greeting configuration.
    pub greeting: GreetingConfig,
}

/// Greeting configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct GreetingConfig {
    /// The name to greet.
    pub name: String,
}

/// A builder with every setting given its default value.
fn with_defaults() -> Result<ConfigBuilder<DefaultState>, InitError> {
    let builder = config::Config::builder().set_default("greeting.name", "World")?;
    Ok(builder)
}

/// The process environment, skipping variables that are not valid UTF-8.
fn utf8_env() -> config::Map<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Retrieve [`Config`] from the defaults, an optional `config.toml` file
/// and `APP__`-prefixed environment variables, in increasing priority.
#[tracing::instrument]
pub fn load_config() -> Result<Config, InitError> {
    let config = with_defaults()?
        .add_source(config::File::new("config.toml", config::FileFormat::Toml).required(false))
        .add_source(
            config::Environment::with_prefix("app")
                .separator("__")
                .source(Some(utf8_env())),
        )
        .build()?
        .try_deserialize()?;
    Ok(config)
}
