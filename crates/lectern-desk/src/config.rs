use std::path::PathBuf;

use clap::Parser;
use lectern_engine::logging::LoggingConfig;
use lectern_engine::window::{CursorMode, RuntimeConfig};
use winit::dpi::LogicalSize;

/// Command-line overrides.
#[derive(Clone, Debug, Parser)]
#[command(name = "lectern-desk", version, about, long_about = None)]
pub struct CliArgs {
    /// Directory holding the six texture images.
    pub asset_root: Option<PathBuf>,

    /// env_logger filter, e.g. "lectern_desk=debug".
    #[arg(long)]
    pub log: Option<String>,
}

/// Application configuration: defaults, optionally overridden from the
/// command line.
#[derive(Debug, Clone, PartialEq)]
pub struct DeskConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    /// Directory holding the six texture images.
    pub asset_root: PathBuf,
    /// `env_logger` filter; `None` defers to `RUST_LOG`.
    pub log_filter: Option<String>,
    pub clear_color: wgpu::Color,
    pub cursor: CursorMode,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            title: "Lectern Desk".to_string(),
            width: 1000.0,
            height: 800.0,
            asset_root: PathBuf::from("textures"),
            log_filter: None,
            clear_color: wgpu::Color {
                r: 0.1,
                g: 0.1,
                b: 0.1,
                a: 1.0,
            },
            cursor: CursorMode::Captured,
        }
    }
}

impl DeskConfig {
    /// Defaults with whatever the command line set.
    pub fn from_cli(cli: CliArgs) -> Self {
        let defaults = Self::default();
        Self {
            asset_root: cli.asset_root.unwrap_or(defaults.asset_root),
            log_filter: cli.log.or(defaults.log_filter),
            ..defaults
        }
    }

    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            cursor: self.cursor,
        }
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            env_filter: self.log_filter.clone(),
            ..LoggingConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<DeskConfig, clap::Error> {
        let argv = std::iter::once("lectern-desk").chain(args.iter().copied());
        CliArgs::try_parse_from(argv).map(DeskConfig::from_cli)
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }

    #[test]
    fn no_arguments_keeps_defaults() {
        let cfg = parse(&[]).unwrap();
        assert_eq!(cfg, DeskConfig::default());
        assert_eq!(cfg.asset_root, PathBuf::from("textures"));
        assert_eq!(cfg.cursor, CursorMode::Captured);
    }

    #[test]
    fn positional_argument_sets_asset_root() {
        let cfg = parse(&["/srv/desk/images"]).unwrap();
        assert_eq!(cfg.asset_root, PathBuf::from("/srv/desk/images"));
    }

    #[test]
    fn log_flag_takes_a_filter() {
        let cfg = parse(&["--log", "lectern_desk=debug", "assets"]).unwrap();
        assert_eq!(cfg.log_filter.as_deref(), Some("lectern_desk=debug"));
        assert_eq!(cfg.asset_root, PathBuf::from("assets"));
        assert_eq!(cfg.logging().env_filter.as_deref(), Some("lectern_desk=debug"));
    }

    #[test]
    fn log_flag_without_value_is_an_error() {
        assert!(parse(&["--log"]).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = parse(&["--fullscreen"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn second_positional_is_rejected() {
        assert!(parse(&["a", "b"]).is_err());
    }

    #[test]
    fn help_is_handled_by_the_parser() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("--log"));
    }

    #[test]
    fn version_is_handled_by_the_parser() {
        let err = parse(&["--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn runtime_config_uses_window_settings() {
        let rt = DeskConfig::default().runtime();
        assert_eq!(rt.title, "Lectern Desk");
        assert_eq!(rt.initial_size, LogicalSize::new(1000.0, 800.0));
        assert_eq!(rt.cursor, CursorMode::Captured);
    }
}
