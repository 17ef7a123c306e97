//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/numtree/numtree.toml`
//! 3. Local config: a file passed by the caller
//! 4. Environment variables: `NUMTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::traversal::LoopType;

/// Traversal defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct TraversalSettings {
    /// Method handed to `dfs_with` by callers that take it from settings.
    /// Plain `dfs` always walks with an explicit stack.
    pub dfs_method: LoopType,
}

/// How node values are printed by `TreeNodeConvert`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Fixed number of decimal places, shortest representation if unset
    pub precision: Option<usize>,
    /// Shown in place of the value of an unset node
    pub unset_label: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            precision: None,
            unset_label: "<unset>".into(),
        }
    }
}

impl RenderSettings {
    pub fn format_value(&self, value: Option<f64>) -> String {
        match (value, self.precision) {
            (Some(v), Some(p)) => format!("{:.*}", p, v),
            (Some(v), None) => v.to_string(),
            (None, _) => self.unset_label.clone(),
        }
    }
}

/// Raw traversal config for intermediate parsing (`None` → not specified).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawTraversalSettings {
    pub dfs_method: Option<LoopType>,
}

/// Raw render config for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRenderSettings {
    pub precision: Option<usize>,
    pub unset_label: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub traversal: RawTraversalSettings,
    pub render: RawRenderSettings,
}

/// Unified configuration for numtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub traversal: TraversalSettings,
    pub render: RenderSettings,
}

/// Get the XDG config directory for numtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "numtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("numtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> TreeResult<RawSettings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| TreeError::config(format!("read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| TreeError::config(format!("parse {}: {}", path.display(), e)))
}

impl Settings {
    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            traversal: TraversalSettings {
                dfs_method: overlay
                    .traversal
                    .dfs_method
                    .unwrap_or(self.traversal.dfs_method),
            },
            render: RenderSettings {
                precision: overlay.render.precision.or(self.render.precision),
                unset_label: overlay
                    .render
                    .unset_label
                    .clone()
                    .unwrap_or_else(|| self.render.unset_label.clone()),
            },
        }
    }

    /// Load settings with layered precedence, using the XDG global config file.
    ///
    /// # Arguments
    /// * `local` - Optional local config file, overrides the global one
    pub fn load(local: Option<&Path>) -> TreeResult<Self> {
        let global = global_config_path();
        Self::load_from(global.as_deref(), local)
    }

    /// Load settings from explicit global and local config files.
    ///
    /// Missing files are skipped; unreadable or malformed files are errors.
    /// Environment variables are applied last.
    #[instrument(level = "debug")]
    pub fn load_from(global: Option<&Path>, local: Option<&Path>) -> TreeResult<Self> {
        let mut current = Self::default();

        for path in [global, local].into_iter().flatten() {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
                debug!("Applied config file: {}", path.display());
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply NUMTREE_* environment variables as explicit overrides.
    ///
    /// Keys use `__` between section and field: `NUMTREE_RENDER__PRECISION=2`.
    fn apply_env_overrides(mut settings: Self) -> TreeResult<Self> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("NUMTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("traversal.dfs_method") {
            settings.traversal.dfs_method = val.parse()?;
        }
        if let Ok(val) = config.get_string("render.precision") {
            let precision = val
                .trim()
                .parse::<usize>()
                .map_err(|e| TreeError::config(format!("render.precision '{val}': {e}")))?;
            settings.render.precision = Some(precision);
        }
        if let Ok(val) = config.get_string("render.unset_label") {
            settings.render.unset_label = val;
        }

        Ok(settings)
    }

    /// Parse settings from a TOML document, filling in defaults.
    pub fn from_toml_str(content: &str) -> TreeResult<Self> {
        let raw: RawSettings = toml::from_str(content)
            .map_err(|e| TreeError::config(format!("parse config: {e}")))?;
        Ok(Self::default().merge_with(&raw))
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> TreeResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| TreeError::config(format!("serialize config: {e}")))
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# numtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/numtree/numtree.toml
#   Local:  file passed to Settings::load
#   Env:    NUMTREE_<SECTION>__<KEY>, e.g. NUMTREE_RENDER__PRECISION=2

[traversal]
# How depth-first search is computed: "recursive" or "iterative"
# dfs_method = "recursive"

[render]
# Decimal places for rendered values (shortest representation if unset)
# precision = 2

# Label shown for nodes without a value
# unset_label = "<unset>"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> TreeError {
    TreeError::config(e.to_string())
}
