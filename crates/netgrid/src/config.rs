use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::grid::Geometry;
use crate::rules::ConnectionRules;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "netgrid";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<EditorConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<RulesConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_size: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_threshold: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<u32>,

    /// Device types that ignore the distance limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_exempt: Option<Vec<String>>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `netgrid config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# netgrid configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Pointer geometry with configured overrides applied.
    pub fn geometry(&self) -> Geometry {
        let mut geometry = Geometry::default();
        if let Some(editor) = &self.editor {
            if let Some(cell_size) = editor.cell_size {
                geometry.cell_size = cell_size;
            }
            if let Some(threshold) = editor.snap_threshold {
                geometry.snap_threshold = threshold;
            }
        }
        geometry
    }

    /// Connection rules with configured overrides applied.
    pub fn rules(&self) -> ConnectionRules {
        let mut rules = ConnectionRules::default();
        if let Some(cfg) = &self.rules {
            if let Some(max) = cfg.max_distance {
                rules.max_distance = max;
            }
            if let Some(exempt) = &cfg.distance_exempt {
                rules.distance_exempt = exempt.clone();
            }
        }
        rules
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "editor.cell_size" | "editor.snap_threshold" => {
                let parsed: f64 = value
                    .parse()
                    .ok()
                    .filter(|v: &f64| v.is_finite() && *v > 0.0)
                    .ok_or_else(|| {
                        anyhow::anyhow!("Invalid {key}: {value}. Must be a positive number.")
                    })?;
                let editor = self.editor.get_or_insert_with(EditorConfig::default);
                if key == "editor.cell_size" {
                    editor.cell_size = Some(parsed);
                } else {
                    editor.snap_threshold = Some(parsed);
                }
            }
            "rules.max_distance" => {
                let parsed: u32 = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid max_distance: {value}. Must be a whole number.")
                })?;
                self.rules
                    .get_or_insert_with(RulesConfig::default)
                    .max_distance = Some(parsed);
            }
            "rules.distance_exempt" => {
                let names: Vec<String> = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                self.rules
                    .get_or_insert_with(RulesConfig::default)
                    .distance_exempt = Some(names);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: editor.cell_size, editor.snap_threshold, rules.max_distance, rules.distance_exempt"
            ),
        }
        Ok(())
    }
}
