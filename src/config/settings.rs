//! Configuration settings for the Game of Life simulator

use crate::game_of_life::{patterns, PatternFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_WIDTH: usize = 80;
const DEFAULT_HEIGHT: usize = 38;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub seed: SeedConfig,
    pub pattern: PatternFormat,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub generations: usize,
    /// Worker threads for the per-cell loop; `None` uses rayon's global pool
    pub workers: Option<usize>,
    /// Stop as soon as a generation is identical to the previous one
    pub stop_when_static: bool,
}

/// Where generation zero comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeedConfig {
    Random {
        width: usize,
        height: usize,
        seed: Option<u64>,
    },
    File {
        path: PathBuf,
    },
    /// A built-in pattern, optionally placed on a larger board
    Named {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        x: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        y: Option<usize>,
    },
}

impl SeedConfig {
    /// A named pattern on a board of its own size
    pub fn named(name: impl Into<String>) -> Self {
        SeedConfig::Named {
            name: name.into(),
            width: None,
            height: None,
            x: None,
            y: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub enabled: bool,
    pub alive_glyph: String,
    pub dead_glyph: String,
    /// Pause between generations in milliseconds
    pub wait_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                generations: 10_000,
                workers: None,
                stop_when_static: true,
            },
            seed: SeedConfig::Random {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
                seed: None,
            },
            pattern: PatternFormat::default(),
            render: RenderConfig {
                enabled: true,
                alive_glyph: "\u{2588}\u{2588}".to_string(),
                dead_glyph: "\u{2591}\u{2591}".to_string(),
                wait_ms: 60,
            },
        }
    }
}

impl Settings {
    /// Load and validate settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let settings = Self::read_file(path)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a YAML file without validating them, for callers
    /// that still apply overrides
    pub fn read_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if self.simulation.workers == Some(0) {
            anyhow::bail!("Worker count must be at least 1");
        }

        match &self.seed {
            SeedConfig::Random { width, height, .. } => {
                if *width == 0 || *height == 0 {
                    anyhow::bail!("Random grid dimensions must be positive, got {}x{}", width, height);
                }
            }
            SeedConfig::File { path } => {
                if !path.exists() {
                    anyhow::bail!("Pattern file does not exist: {}", path.display());
                }
            }
            SeedConfig::Named {
                name,
                width,
                height,
                x,
                y,
            } => {
                patterns::named_on(name, *width, *height, *x, *y)
                    .with_context(|| format!("Invalid named pattern seed '{}'", name))?;
            }
        }

        if self.pattern.alive == self.pattern.dead {
            anyhow::bail!("Alive and dead pattern glyphs must differ");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(workers) = cli_overrides.workers {
            self.simulation.workers = Some(workers);
        }
        if let Some(wait_ms) = cli_overrides.wait_ms {
            self.render.wait_ms = wait_ms;
        }

        if let Some(ref path) = cli_overrides.pattern_file {
            self.seed = SeedConfig::File { path: path.clone() };
        } else if let Some(ref name) = cli_overrides.named_pattern {
            self.seed = SeedConfig::Named {
                name: name.clone(),
                width: cli_overrides.width,
                height: cli_overrides.height,
                x: None,
                y: None,
            };
        } else if matches!(self.seed, SeedConfig::Named { .. })
            && cli_overrides.random_seed.is_none()
        {
            // A named seed from the config keeps its pattern and takes the new board size
            if let SeedConfig::Named { width, height, .. } = &mut self.seed {
                if cli_overrides.width.is_some() {
                    *width = cli_overrides.width;
                }
                if cli_overrides.height.is_some() {
                    *height = cli_overrides.height;
                }
            }
        } else if cli_overrides.width.is_some()
            || cli_overrides.height.is_some()
            || cli_overrides.random_seed.is_some()
        {
            let (width, height, seed) = match self.seed {
                SeedConfig::Random { width, height, seed } => (width, height, seed),
                _ => (DEFAULT_WIDTH, DEFAULT_HEIGHT, None),
            };
            self.seed = SeedConfig::Random {
                width: cli_overrides.width.unwrap_or(width),
                height: cli_overrides.height.unwrap_or(height),
                seed: cli_overrides.random_seed.or(seed),
            };
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<usize>,
    pub workers: Option<usize>,
    pub wait_ms: Option<u64>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub random_seed: Option<u64>,
    pub pattern_file: Option<PathBuf>,
    pub named_pattern: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_is_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.seed = SeedConfig::Named {
            name: "glider".to_string(),
            width: Some(12),
            height: Some(8),
            x: Some(2),
            y: None,
        };
        settings.simulation.workers = Some(2);
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r##"
simulation:
  generations: 5
  workers: null
  stop_when_static: false
seed:
  kind: random
  width: 10
  height: 4
  seed: 99
pattern:
  alive: '#'
  dead: ' '
render:
  enabled: false
  alive_glyph: "#"
  dead_glyph: " "
  wait_ms: 0
"##;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            settings.seed,
            SeedConfig::Random {
                width: 10,
                height: 4,
                seed: Some(99)
            }
        );
        assert_eq!(settings.pattern.alive, '#');
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.simulation.generations = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.workers = Some(0);
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.seed = SeedConfig::Random {
            width: 0,
            height: 3,
            seed: None,
        };
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.seed = SeedConfig::File {
            path: PathBuf::from("missing/state_nothing.txt"),
        };
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.seed = SeedConfig::named("unknown");
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.seed = SeedConfig::Named {
            name: "beacon".to_string(),
            width: Some(3),
            height: None,
            x: None,
            y: None,
        };
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.pattern.dead = settings.pattern.alive;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            generations: Some(7),
            width: Some(20),
            random_seed: Some(5),
            ..Default::default()
        });
        assert_eq!(settings.simulation.generations, 7);
        assert_eq!(
            settings.seed,
            SeedConfig::Random {
                width: 20,
                height: 38,
                seed: Some(5)
            }
        );

        settings.merge_with_cli(&CliOverrides {
            named_pattern: Some("glider".to_string()),
            width: Some(10),
            height: Some(10),
            ..Default::default()
        });
        assert_eq!(
            settings.seed,
            SeedConfig::Named {
                name: "glider".to_string(),
                width: Some(10),
                height: Some(10),
                x: None,
                y: None,
            }
        );

        // A named seed already in the config only takes the new board size
        settings.merge_with_cli(&CliOverrides {
            height: Some(9),
            ..Default::default()
        });
        assert_eq!(
            settings.seed,
            SeedConfig::Named {
                name: "glider".to_string(),
                width: Some(10),
                height: Some(9),
                x: None,
                y: None,
            }
        );

        // An explicit random seed switches back to a random fill with default dimensions
        settings.merge_with_cli(&CliOverrides {
            random_seed: Some(4),
            ..Default::default()
        });
        assert_eq!(
            settings.seed,
            SeedConfig::Random {
                width: 80,
                height: 38,
                seed: Some(4)
            }
        );
    }

    #[test]
    fn test_read_file_defers_validation() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("stale.yaml");

        let mut settings = Settings::default();
        settings.seed = SeedConfig::File {
            path: temp_dir.path().join("gone/state_old.txt"),
        };
        settings.to_file(&path).unwrap();

        assert!(Settings::from_file(&path).is_err());

        let mut loaded = Settings::read_file(&path).unwrap();
        assert!(loaded.validate().is_err());
        loaded.merge_with_cli(&CliOverrides {
            named_pattern: Some("toad".to_string()),
            ..Default::default()
        });
        assert!(loaded.validate().is_ok());
    }
}
