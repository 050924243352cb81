//! Loading the ruleset for a run

use std::path::Path;

use fm_content::Ruleset;
use fm_fs::ConfigStore;

/// Config file looked up when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "frontmatter_config.json";

/// A loaded ruleset, plus the reason it is empty if loading failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulesetLoad {
    pub ruleset: Ruleset,
    pub warning: Option<String>,
}

impl RulesetLoad {
    pub fn is_degraded(&self) -> bool {
        self.warning.is_some()
    }
}

/// Load a ruleset from a JSON, TOML or YAML file.
///
/// Never fails: a missing, unreadable or malformed file yields an empty
/// ruleset (documents are re-rendered without reordering) and a warning.
pub fn load_ruleset(path: &Path) -> RulesetLoad {
    match ConfigStore::new().load::<Ruleset>(path) {
        Ok(ruleset) => {
            tracing::debug!(
                path = %path.display(),
                top = ruleset.top.len(),
                bottom = ruleset.bottom.len(),
                "loaded ruleset"
            );
            RulesetLoad {
                ruleset,
                warning: None,
            }
        }
        Err(e) => {
            let warning = if e.is_not_found() {
                format!("Configuration file '{}' not found", path.display())
            } else {
                format!("Error reading configuration file: {e}")
            };
            tracing::warn!(%warning, "using empty ruleset, no reordering will occur");
            RulesetLoad {
                ruleset: Ruleset::default(),
                warning: Some(warning),
            }
        }
    }
}
