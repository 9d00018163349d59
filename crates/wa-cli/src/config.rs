//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use wa_core::DEFAULT_PLAN_SIZE;
use wa_store::{CsvStore, DEFAULT_FILE_NAME, LoadMode};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Ledger file offered when the user does not name one.
    pub data_file: PathBuf,
    /// Number of heaviest categories covered by the action plan.
    pub plan_size: usize,
    /// Reject loaded rows with unknown categories, bad dates or negative weights.
    pub strict_load: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_FILE_NAME),
            plan_size: DEFAULT_PLAN_SIZE,
            strict_load: false,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // WA_DATA_FILE, WA_PLAN_SIZE, WA_STRICT_LOAD
        figment = figment.merge(Env::prefixed("WA_"));

        figment.extract()
    }

    pub const fn load_mode(&self) -> LoadMode {
        if self.strict_load {
            LoadMode::Strict
        } else {
            LoadMode::Permissive
        }
    }

    /// A store at `path`, or at the configured data file.
    pub fn store(&self, path: Option<&Path>) -> CsvStore {
        let path = path.unwrap_or(&self.data_file);
        CsvStore::with_mode(path, self.load_mode())
    }
}

/// Returns the platform-specific config directory.
///
/// On Linux: `~/.config/waste-audit`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("waste-audit"))
}
