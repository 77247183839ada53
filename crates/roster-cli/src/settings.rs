//! Runtime configuration, layered from an optional TOML file and `ROSTER_*`
//! environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use roster_core::role::RoleVocabulary;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
  /// JSON file holding the persons to load.
  #[serde(default)]
  pub roster_path: Option<PathBuf>,
  /// Replacement role vocabulary. Empty keeps the built-in roles.
  #[serde(default)]
  pub roles:       Vec<String>,
}

impl Settings {
  /// Read `path` (if it exists) and then the environment, which wins.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("ROSTER")
          .try_parsing(true)
          .list_separator(",")
          .with_list_parse_key("roles"),
      )
      .build()
      .context("failed to read config file")?
      .try_deserialize()
      .context("failed to deserialise settings")
  }

  pub fn vocabulary(&self) -> anyhow::Result<RoleVocabulary> {
    if self.roles.is_empty() {
      return Ok(RoleVocabulary::default());
    }
    RoleVocabulary::from_names(self.roles.iter().cloned())
      .context("invalid `roles` setting")
  }
}
