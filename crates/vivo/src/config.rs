use anyhow::Context;
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::Path;
use vivo_server::ServiceConfig;

#[derive(Deserialize, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub service: ServiceConfig,
}

impl Config {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        serde_yaml::from_str(
            &read_to_string(path).context("Failed to read config file from disk, is it present?")?,
        )
        .context("Failed to deserialize config file, please make sure its in the right format")
    }
}
