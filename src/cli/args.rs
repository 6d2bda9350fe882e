//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Make flat sprite backgrounds transparent, in place
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image files to process. If omitted, uses `[assets]` from the config file.
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path. Without it, `nobg.toml` is searched upward from the current directory.
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Log sampled background color and cleared pixel count
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether targets were given on the command line.
    pub const fn has_paths(&self) -> bool {
        !self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["nobg"]).unwrap();
        assert!(!cli.has_paths());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_positional_paths_keep_order() {
        let cli = Cli::try_parse_from(["nobg", "-v", "b.png", "a.png"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(
            cli.paths,
            vec![PathBuf::from("b.png"), PathBuf::from("a.png")]
        );
    }

    #[test]
    fn test_version_flag_kept_apart_from_verbose() {
        let err = Cli::try_parse_from(["nobg", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);

        let cli = Cli::try_parse_from(["nobg", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_config_and_color_flags() {
        let cli = Cli::try_parse_from(["nobg", "-C", "sprites.toml", "--color", "never"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("sprites.toml")));
        assert_eq!(cli.color, ColorChoice::Never);
    }
}
