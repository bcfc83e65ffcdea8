use crate::geometry::Position;
use serde::{Deserialize, Serialize};

/// Per-session designer preferences. Never history-committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignerSettings {
    pub snap_to_grid: bool,
    pub grid_size: f64,
    pub show_grid: bool,
    pub show_minimap: bool,
    pub auto_save: bool,
    pub theme: Theme,
}

impl Default for DesignerSettings {
    fn default() -> Self {
        Self {
            snap_to_grid: true,
            grid_size: 20.0,
            show_grid: true,
            show_minimap: true,
            auto_save: true,
            theme: Theme::Light,
        }
    }
}

impl DesignerSettings {
    /// Shallow-merges the set fields of the patch.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(snap_to_grid) = patch.snap_to_grid {
            self.snap_to_grid = snap_to_grid;
        }
        if let Some(grid_size) = patch.grid_size {
            self.grid_size = grid_size;
        }
        if let Some(show_grid) = patch.show_grid {
            self.show_grid = show_grid;
        }
        if let Some(show_minimap) = patch.show_minimap {
            self.show_minimap = show_minimap;
        }
        if let Some(auto_save) = patch.auto_save {
            self.auto_save = auto_save;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
    }

    /// Rounds a position to the nearest grid intersection when snapping is
    /// enabled; otherwise returns it unchanged.
    pub fn snap(&self, position: Position) -> Position {
        if !self.snap_to_grid || self.grid_size <= 0.0 {
            return position;
        }
        Position {
            x: (position.x / self.grid_size).round() * self.grid_size,
            y: (position.y / self.grid_size).round() * self.grid_size,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Partial update for [`DesignerSettings`]; unset fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub snap_to_grid: Option<bool>,
    pub grid_size: Option<f64>,
    pub show_grid: Option<bool>,
    pub show_minimap: Option<bool>,
    pub auto_save: Option<bool>,
    pub theme: Option<Theme>,
}
