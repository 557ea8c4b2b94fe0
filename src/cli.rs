use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "landing", version, about = "Browse a single-page marketing site in the terminal")]
pub struct Cli {
    /// Config file to load instead of ~/.config/landing/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the built-in configuration as TOML and exit
    #[arg(long)]
    pub print_default_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "landing",
            "--config",
            "/tmp/site.toml",
            "--log-file",
            "/tmp/landing.log",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/site.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/landing.log")));
        assert!(!cli.print_default_config);
    }

    #[test]
    fn flags_are_optional() {
        let cli = Cli::parse_from(["landing"]);
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
    }
}
