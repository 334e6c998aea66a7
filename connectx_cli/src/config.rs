use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use connectx::{GameConfig, StorageKind};

/// Values given on the command line, which take precedence over the config file.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overrides {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub win_length: Option<usize>,
    pub players: Option<usize>,
    pub storage: Option<StorageKind>,
}

/// Reads a [`GameConfig`] from a JSON file. Fields that are missing get their default value.
pub fn load(path: &Path) -> anyhow::Result<GameConfig> {
    let file = File::open(path)
        .with_context(|| format!("Could not open config file '{}'", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse config file '{}'", path.display()))?;
    Ok(config)
}

/// Combines the config file (if any) with the command line values and validates the result.
pub fn resolve(path: Option<&Path>, overrides: Overrides) -> anyhow::Result<GameConfig> {
    let mut config = match path {
        Some(path) => load(path)?,
        None => GameConfig::default(),
    };
    config.rows = overrides.rows.unwrap_or(config.rows);
    config.columns = overrides.columns.unwrap_or(config.columns);
    config.win_length = overrides.win_length.unwrap_or(config.win_length);
    config.players = overrides.players.unwrap_or(config.players);
    config.storage = overrides.storage.unwrap_or(config.storage);
    config.validate().context("Invalid game configuration")?;
    Ok(config)
}
