use log::debug;

use crate::{project::Project, seed};

const SHOWCASE_CONFIG_ENV: &str = "SHOWCASE_CONFIG";
const SHOWCASE_DEFAULT_CONFIG_NAME: &str = ".showcase.json";

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
  /// JSON file with the starting projects, the built-in seed when unset.
  pub seed_path: Option<String>,
  pub default_query: String,
}

impl Config {
  /// `$SHOWCASE_CONFIG`, falling back to `~/.showcase.json`. A missing file
  /// means the default config.
  pub fn load() -> Result<Self, String> {
    match config_file_path() {
      Some(path) => Self::from_file(&path),
      None => Ok(Self::default()),
    }
  }

  pub fn from_file(filepath: &std::path::Path) -> Result<Self, String> {
    if !filepath.exists() {
      debug!("no config at {}, using defaults", filepath.display());
      return Ok(Self::default());
    }

    let content = std::fs::read_to_string(filepath)
      .map_err(|err| format!("couldn't read config {}: {}", filepath.display(), err))?;
    let config = serde_json::from_str(&content)
      .map_err(|err| format!("couldn't parse config {}: {}", filepath.display(), err))?;

    debug!("config loaded from: {}", filepath.display());
    return Ok(config);
  }

  pub fn seed(&self) -> Result<Vec<Project>, String> {
    match &self.seed_path {
      Some(path) => seed::load_seed(path),
      None => Ok(seed::default_seed()),
    }
  }
}

fn config_file_path() -> Option<std::path::PathBuf> {
  if let Ok(file_path) = std::env::var(SHOWCASE_CONFIG_ENV) {
    return Some(std::path::PathBuf::from(file_path));
  }
  let home = std::env::var("HOME").ok()?;
  return Some(std::path::Path::new(&home).join(SHOWCASE_DEFAULT_CONFIG_NAME));
}
