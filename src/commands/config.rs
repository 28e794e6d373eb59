use crate::{
    libs::{config::Config, messages::Message},
    msg_info,
};
use anyhow::Result;

/// Prints the effective configuration as JSON.
pub fn cmd() -> Result<()> {
    let path = Config::path()?;
    let mut config = Config::read()?;
    if !path.exists() {
        msg_info!(Message::ConfigFileNotFound);
    }
    config.session = Some(config.session());

    msg_info!(Message::ConfigPath(path.display().to_string()));
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
