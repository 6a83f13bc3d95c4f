use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "iss-notifier")]
#[command(about = "Email an observer when the ISS passes overhead after dark")]
pub struct CliConfig {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Credentials file, overrides `credentials.env_file`
    #[arg(long)]
    pub env_file: Option<String>,

    /// Evaluate both conditions but never send mail
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "iss-notifier",
            "--config",
            "iss.toml",
            "--env-file",
            "secrets.env",
            "--dry-run",
            "-v",
        ]);

        assert_eq!(cli.config.as_deref(), Some("iss.toml"));
        assert_eq!(cli.env_file.as_deref(), Some("secrets.env"));
        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert!(!cli.log_json);
    }

    #[test]
    fn test_defaults() {
        let cli = CliConfig::parse_from(["iss-notifier"]);
        assert!(cli.config.is_none());
        assert!(!cli.dry_run);
    }
}
