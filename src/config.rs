//! Demo configuration, read from the environment.

use std::env;
use std::time::Duration;

use crate::core::resolve_color_or_default;
use crate::types::Color;

/// Settings for the demo scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub width: u16,
    pub height: u16,
    pub background: Color,
    pub frame_ms: u64,
    /// Stop after this many frames; 0 runs until quit.
    pub frames: u64,
    /// Terminal columns per cell.
    pub cell_w: u16,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            background: Color::Blue,
            frame_ms: 500,
            frames: 0,
            cell_w: 2,
        }
    }
}

impl DemoConfig {
    /// Create from `RASTER_*` environment variables.
    ///
    /// Unparsable numbers fall back to defaults. An unknown background color
    /// falls back to black with a `[Config]` warning on stderr.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`DemoConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let num = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let width = num("RASTER_WIDTH")
            .and_then(|v| u16::try_from(v).ok())
            .unwrap_or(defaults.width);
        let height = num("RASTER_HEIGHT")
            .and_then(|v| u16::try_from(v).ok())
            .unwrap_or(defaults.height);
        let frame_ms = num("RASTER_FRAME_MS").unwrap_or(defaults.frame_ms);
        let frames = num("RASTER_FRAMES").unwrap_or(defaults.frames);
        let cell_w = num("RASTER_CELL_WIDTH")
            .and_then(|v| u16::try_from(v).ok())
            .unwrap_or(defaults.cell_w);

        let background = match lookup("RASTER_BACKGROUND") {
            Some(token) => resolve_color_or_default(token.trim(), Color::Black, |err| {
                eprintln!("[Config] {}, defaulting to black", err);
            }),
            None => defaults.background,
        };

        Self {
            width,
            height,
            background,
            frame_ms,
            frames,
            cell_w,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> DemoConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DemoConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config(&[]), DemoConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            ("RASTER_WIDTH", "30"),
            ("RASTER_HEIGHT", "12"),
            ("RASTER_BACKGROUND", "cyan"),
            ("RASTER_FRAME_MS", "100"),
            ("RASTER_FRAMES", "5"),
            ("RASTER_CELL_WIDTH", "1"),
        ]);
        assert_eq!(cfg.width, 30);
        assert_eq!(cfg.height, 12);
        assert_eq!(cfg.background, Color::Cyan);
        assert_eq!(cfg.frame_interval(), Duration::from_millis(100));
        assert_eq!(cfg.frames, 5);
        assert_eq!(cfg.cell_w, 1);
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = config(&[
            ("RASTER_WIDTH", "wide"),
            ("RASTER_HEIGHT", "70000"),
            ("RASTER_BACKGROUND", "purple"),
        ]);
        assert_eq!(cfg.width, 20);
        assert_eq!(cfg.height, 20);
        assert_eq!(cfg.background, Color::Black);
    }
}
