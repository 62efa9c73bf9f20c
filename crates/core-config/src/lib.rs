//! Configuration loading and parsing.
//!
//! Parses `quill.toml` (or an override path provided by the binary),
//! currently a single `[text] tab_width = <n>` knob. Missing file, missing
//! fields, and parse errors all fall back to defaults so a broken config
//! never prevents the editor from starting; unknown fields are ignored to
//! allow forward evolution.
//!
//! The tab width feeds the row rendering and column mapping in `core-text`
//! and is clamped to `1..=16` — zero would make the tab-stop arithmetic
//! divide by zero and anything past 16 is unusable in a terminal.

use anyhow::Result;
use core_text::DEFAULT_TAB_WIDTH;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::info;

const MAX_TAB_WIDTH: usize = 16;

#[derive(Debug, Deserialize, Clone)]
pub struct TextConfig {
    #[serde(default = "TextConfig::default_tab_width")]
    pub tab_width: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            tab_width: Self::default_tab_width(),
        }
    }
}

impl TextConfig {
    const fn default_tab_width() -> usize {
        DEFAULT_TAB_WIDTH
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub text: TextConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub file: ConfigFile,
}

impl Config {
    /// Tab width clamped to a usable range.
    pub fn tab_width(&self) -> usize {
        let raw = self.file.text.tab_width;
        let clamped = raw.clamp(1, MAX_TAB_WIDTH);
        if clamped != raw {
            info!(target: "config", raw, clamped, "tab_width_clamped");
        }
        clamped
    }
}

/// Best-effort config path: working directory first, then the platform
/// config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from("quill.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("quill").join("quill.toml");
    }
    PathBuf::from("quill.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    if let Ok(content) = fs::read_to_string(&path) {
        match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => Ok(Config { file }),
            Err(e) => {
                info!(target: "config", error = %e, path = %path.display(), "config_parse_failed_using_defaults");
                Ok(Config::default())
            }
        }
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_missing() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_hopefully__.toml"))).unwrap();
        assert_eq!(cfg.tab_width(), DEFAULT_TAB_WIDTH);
    }

    #[test]
    fn parses_tab_width() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[text]\ntab_width = 4\n").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.tab_width(), 4);
    }

    #[test]
    fn zero_tab_width_clamps_to_one() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[text]\ntab_width = 0\n").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.tab_width(), 1);
    }

    #[test]
    fn oversized_tab_width_clamps() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[text]\ntab_width = 99\n").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.tab_width(), 16);
    }

    #[test]
    fn parse_error_falls_back_to_defaults() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "not valid toml [[[").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.tab_width(), DEFAULT_TAB_WIDTH);
    }

    #[test]
    fn unknown_fields_tolerated() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[text]\ntab_width = 2\nfuture_knob = true\n").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.tab_width(), 2);
    }
}
