//! User-adjustable editor options, optionally loaded from a TOML file.

use crate::grid::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::hit_test::{HitTester, FEATURE_THRESHOLD, WALL_THRESHOLD};
use anyhow::{anyhow, Context, Error};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What a click in the middle of a cell does
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    /// Only walls can be edited; center clicks do nothing
    Walls,
    /// Center clicks cycle the cell's gold/helipad state
    #[default]
    Features,
}

/// Options for the editor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Which editing mode to start in
    pub mode: EditorMode,
    /// Rows of the grid created at startup
    pub rows: usize,
    /// Columns of the grid created at startup
    pub columns: usize,
    /// Upper limit for the row/column controls
    pub max_dimension: usize,
    /// Edge band width in [`EditorMode::Walls`]
    pub wall_threshold: f32,
    /// Edge band width in [`EditorMode::Features`]
    pub feature_threshold: f32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            mode: Default::default(),
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            max_dimension: 50,
            wall_threshold: WALL_THRESHOLD,
            feature_threshold: FEATURE_THRESHOLD,
        }
    }
}

impl EditorSettings {
    /// Read settings from a TOML file; missing keys keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    /// Parse settings from TOML text
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_editor::settings::{EditorMode, EditorSettings};
    ///
    /// let settings = EditorSettings::from_toml("mode = \"walls\"\nrows = 10").unwrap();
    /// assert_eq!(settings.mode, EditorMode::Walls);
    /// assert_eq!(settings.rows, 10);
    /// assert_eq!(settings.columns, 6);
    /// ```
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings describe a usable editor
    pub fn validate(&self) -> Result<(), Error> {
        for (name, threshold) in [
            ("wall_threshold", self.wall_threshold),
            ("feature_threshold", self.feature_threshold),
        ] {
            if !(threshold > 0.0 && threshold < 0.5) {
                return Err(anyhow!("{name} must be between 0 and 0.5, got {threshold}"));
            }
        }
        if self.max_dimension == 0 {
            return Err(anyhow!("max_dimension must be at least 1"));
        }
        for (name, value) in [("rows", self.rows), ("columns", self.columns)] {
            if value == 0 || value > self.max_dimension {
                return Err(anyhow!(
                    "{name} must be between 1 and {}, got {value}",
                    self.max_dimension
                ));
            }
        }
        Ok(())
    }

    /// The hit tester for the given mode, using the configured thresholds
    pub fn hit_tester(&self, mode: EditorMode) -> HitTester {
        match mode {
            EditorMode::Walls => HitTester {
                threshold: self.wall_threshold,
                ..HitTester::walls()
            },
            EditorMode::Features => HitTester {
                threshold: self.feature_threshold,
                ..HitTester::features()
            },
        }
    }
}
