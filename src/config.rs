use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub level: LevelFileConfig,
    #[serde(default)]
    pub visual: VisualConfig,
}

/// Fallback grid dimensions, used when no level can be loaded at all.
#[derive(Debug, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_rows")]
    pub rows: i32,
    #[serde(default = "default_cols")]
    pub cols: i32,
    #[serde(default)]
    pub keys: i32,
}

#[derive(Debug, Deserialize)]
pub struct LevelFileConfig {
    #[serde(default = "default_level_path")]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
}

// Default values
fn default_rows() -> i32 { 9 }
fn default_cols() -> i32 { 20 }
fn default_level_path() -> String { "assets/levels/introduction.json".to_string() }
fn default_window_title() -> String { "Isomaze".to_string() }
fn default_bg_r() -> u8 { 24 }
fn default_bg_g() -> u8 { 24 }
fn default_bg_b() -> u8 { 32 }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            keys: 0,
        }
    }
}

impl Default for LevelFileConfig {
    fn default() -> Self {
        Self {
            path: default_level_path(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            level: LevelFileConfig::default(),
            visual: VisualConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    println!("Loaded configuration from config.toml");
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse config.toml: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }
}
