//! Command-line argument parsing for the viewer
//!
//! Supports:
//! - Passing a model path (accepted and logged; mesh import is external)
//! - Choosing the layout file used by save/load
//! - Starting from the default layout or a saved one
//! - Headless dump of a single rendered frame

use clap::Parser;
use std::path::PathBuf;

use crate::config::ViewerConfig;

/// A 3D model viewer with a dockable panel layout
#[derive(Parser, Debug)]
#[command(name = "panelview", version, about = "A 3D model viewer with dockable panels")]
pub struct CliArgs {
    /// Model file to open
    #[arg(value_name = "MODEL")]
    pub model: Option<PathBuf>,

    /// Layout file used by save (F5) and load (F9)
    #[arg(short = 'l', long, value_name = "PATH")]
    pub layout: Option<PathBuf>,

    /// Start with the default layout even if the config asks to restore one
    #[arg(short = 'd', long)]
    pub default_layout: bool,

    /// Print one rendered frame to stdout and exit without opening a window
    #[arg(long)]
    pub dump: bool,
}

/// How the initial layout is obtained
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutSource {
    /// The standard four-panel arrangement
    Default,
    /// Load from a layout file
    File(PathBuf),
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub model: Option<PathBuf>,
    /// File used by save/load without an explicit path
    pub layout_path: PathBuf,
    pub layout_source: LayoutSource,
    pub headless: bool,
}

impl CliArgs {
    /// Merge CLI arguments over the persisted configuration
    pub fn into_config(self, config: &ViewerConfig) -> StartupConfig {
        let explicit_layout = self.layout.is_some();
        let layout_path = self.layout.unwrap_or_else(|| config.layout_file.clone());

        let layout_source = if self.default_layout {
            LayoutSource::Default
        } else if explicit_layout || config.restore_layout {
            LayoutSource::File(layout_path.clone())
        } else {
            LayoutSource::Default
        };

        StartupConfig {
            model: self.model,
            layout_path,
            layout_source,
            headless: self.dump,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(layout: Option<&str>, default_layout: bool) -> CliArgs {
        CliArgs {
            model: None,
            layout: layout.map(PathBuf::from),
            default_layout,
            dump: false,
        }
    }

    #[test]
    fn test_no_args_uses_default_layout() {
        let config = args(None, false).into_config(&ViewerConfig::default());
        assert_eq!(config.layout_source, LayoutSource::Default);
        assert_eq!(config.layout_path, PathBuf::from("layout.txt"));
    }

    #[test]
    fn test_explicit_layout_is_loaded() {
        let config = args(Some("mine.txt"), false).into_config(&ViewerConfig::default());
        assert_eq!(
            config.layout_source,
            LayoutSource::File(PathBuf::from("mine.txt"))
        );
    }

    #[test]
    fn test_restore_layout_from_config() {
        let viewer = ViewerConfig {
            restore_layout: true,
            ..ViewerConfig::default()
        };
        let config = args(None, false).into_config(&viewer);
        assert_eq!(
            config.layout_source,
            LayoutSource::File(PathBuf::from("layout.txt"))
        );
    }

    #[test]
    fn test_default_flag_wins() {
        let viewer = ViewerConfig {
            restore_layout: true,
            ..ViewerConfig::default()
        };
        let config = args(Some("mine.txt"), true).into_config(&viewer);
        assert_eq!(config.layout_source, LayoutSource::Default);
        assert_eq!(config.layout_path, PathBuf::from("mine.txt"));
    }

    #[test]
    fn test_parse_from_command_line() {
        let parsed =
            CliArgs::try_parse_from(["panelview", "cube.obj", "--layout", "l.txt", "--dump"])
                .unwrap();
        assert_eq!(parsed.model, Some(PathBuf::from("cube.obj")));
        assert_eq!(parsed.layout, Some(PathBuf::from("l.txt")));
        assert!(parsed.dump);
    }
}
