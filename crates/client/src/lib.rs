//! Client-side data layer for CitizenConnect.
//!
//! Wires the entity store, the remote sync client, and the session rules into
//! the [`directory::Directory`] facade that UI shells drive. There is no CLI
//! surface: embedders call [`bootstrap`] once and construct a `Directory`.

use anyhow::Result;

pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
pub mod remote;

pub use config::Config;
pub use directory::Directory;
pub use error::{ApiError, ClientError};

/// Loads `.env`, the layered configuration, and initializes logging.
pub fn bootstrap() -> Result<Config> {
    dotenvy::dotenv().ok();
    let config = Config::load()?;
    logging::init_logging(&config.logging);
    tracing::info!("CitizenConnect data layer v{}", env!("CARGO_PKG_VERSION"));
    Ok(config)
}
