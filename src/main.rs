//! Prints a greeting.

use hello::{
    core::greeting::greeting_service::greet,
    infra::{config, logging},
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }
    let _guard = logging::init_logging()?;
    let config = config::load_config()?;
    tracing::debug!(?config, "Loaded configuration");

    println!("{}", greet(&config.greeting.name));

    Ok(())
}
