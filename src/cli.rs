//! Command-line argument parsing for the headless layout shell
//!
//! Supports:
//! - Reading input events from a script file or stdin
//! - File-backed or in-memory layout storage
//! - Initial viewport and container sizes
//! - Starting from the default layout (ignore stored state)

use clap::Parser;
use std::path::PathBuf;

/// Drive the panel layout engine from scripted input events
#[derive(Parser, Debug)]
#[command(
    name = "documint-layout",
    version,
    about = "Headless shell for the panel layout engine"
)]
pub struct CliArgs {
    /// Read input events from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Directory for the persisted layout (default: config dir)
    #[arg(long, value_name = "DIR", conflicts_with = "ephemeral")]
    pub store_dir: Option<PathBuf>,

    /// Keep the layout in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Load configuration from this YAML file instead of the config dir
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial viewport width in logical pixels
    #[arg(long, value_name = "W")]
    pub viewport: Option<f32>,

    /// Initial layout container size, e.g. 1200x800
    #[arg(long, value_name = "WxH")]
    pub container: Option<String>,

    /// Ignore the stored layout and start from the default split
    #[arg(long)]
    pub reset: bool,

    /// Print the layout after every change, not only on `show`
    #[arg(long)]
    pub echo: bool,
}

/// Where the layout record lives
#[derive(Debug, Clone, PartialEq)]
pub enum StoreChoice {
    /// Files under the given directory
    Directory(PathBuf),
    /// Config-dir default location
    Default,
    /// In-memory only
    Ephemeral,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub script: Option<PathBuf>,
    pub store: StoreChoice,
    pub config_path: Option<PathBuf>,
    pub viewport: f32,
    pub container: (f32, f32),
    pub reset: bool,
    pub echo: bool,
}

/// Container size used when none is given
pub const DEFAULT_CONTAINER: (f32, f32) = (1200.0, 800.0);

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let store = if self.ephemeral {
            StoreChoice::Ephemeral
        } else if let Some(dir) = self.store_dir {
            StoreChoice::Directory(dir)
        } else {
            StoreChoice::Default
        };

        let container = match self.container.as_deref() {
            Some(size) => parse_size(size)?,
            None => DEFAULT_CONTAINER,
        };

        let viewport = self.viewport.unwrap_or(container.0);
        if !viewport.is_finite() || viewport < 0.0 {
            return Err(format!("Invalid viewport width: {}", viewport));
        }

        Ok(StartupConfig {
            script: self.script,
            store,
            config_path: self.config,
            viewport,
            container,
            reset: self.reset,
            echo: self.echo,
        })
    }
}

/// Parse `WxH` into a (width, height) pair
pub fn parse_size(raw: &str) -> Result<(f32, f32), String> {
    let (w, h) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Expected WxH, got '{}'", raw))?;
    let width: f32 = w
        .trim()
        .parse()
        .map_err(|_| format!("Invalid width in '{}'", raw))?;
    let height: f32 = h
        .trim()
        .parse()
        .map_err(|_| format!("Invalid height in '{}'", raw))?;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(format!("Container size must be positive, got '{}'", raw));
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            script: None,
            store_dir: None,
            ephemeral: false,
            config: None,
            viewport: None,
            container: None,
            reset: false,
            echo: false,
        }
    }

    #[test]
    fn test_defaults() {
        let config = args().into_config().unwrap();
        assert_eq!(config.store, StoreChoice::Default);
        assert_eq!(config.container, DEFAULT_CONTAINER);
        // Viewport defaults to the container width
        assert_eq!(config.viewport, DEFAULT_CONTAINER.0);
    }

    #[test]
    fn test_ephemeral_wins_over_default_store() {
        let config = CliArgs {
            ephemeral: true,
            ..args()
        }
        .into_config()
        .unwrap();
        assert_eq!(config.store, StoreChoice::Ephemeral);
    }

    #[test]
    fn test_store_dir() {
        let config = CliArgs {
            store_dir: Some(PathBuf::from("/tmp/state")),
            ..args()
        }
        .into_config()
        .unwrap();
        assert_eq!(
            config.store,
            StoreChoice::Directory(PathBuf::from("/tmp/state"))
        );
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1024x768"), Ok((1024.0, 768.0)));
        assert_eq!(parse_size("640X480"), Ok((640.0, 480.0)));
        assert!(parse_size("1024").is_err());
        assert!(parse_size("0x100").is_err());
        assert!(parse_size("axb").is_err());
    }

    #[test]
    fn test_invalid_viewport() {
        let result = CliArgs {
            viewport: Some(-10.0),
            ..args()
        }
        .into_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_clap_parses_flags() {
        let parsed = CliArgs::try_parse_from([
            "documint-layout",
            "--ephemeral",
            "--viewport",
            "600",
            "--container",
            "800x600",
        ])
        .unwrap();
        assert!(parsed.ephemeral);
        assert_eq!(parsed.viewport, Some(600.0));
        assert_eq!(parsed.container.as_deref(), Some("800x600"));
    }
}
