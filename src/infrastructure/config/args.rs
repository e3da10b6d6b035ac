use super::app_config::LogLevel;
use super::storage::DEFAULT_SETTINGS_FILE;
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "account-relay",
    version,
    about = "Local relay server for exercising an account-service API",
    long_about = None
)]
pub struct CliArgs {
    /// Settings file path.
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "ACCOUNT_RELAY_CONFIG",
        default_value = DEFAULT_SETTINGS_FILE
    )]
    pub config: PathBuf,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, env = "ACCOUNT_RELAY_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Address to listen on.
    #[arg(long, value_name = "ADDR", default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// Open the local page in the browser once listening.
    #[arg(long)]
    pub open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["account-relay"]).unwrap();

        assert_eq!(args.config, PathBuf::from(DEFAULT_SETTINGS_FILE));
        assert_eq!(args.bind.to_string(), "127.0.0.1");
        assert!(!args.open);
        assert!(args.log_path.is_none());
    }

    #[test]
    fn test_flags() {
        let args = CliArgs::try_parse_from([
            "account-relay",
            "--config",
            "/tmp/relay.json",
            "--log-level",
            "debug",
            "--bind",
            "0.0.0.0",
            "--open",
        ])
        .unwrap();

        assert_eq!(args.config, PathBuf::from("/tmp/relay.json"));
        assert_eq!(args.log_level, Some(LogLevel::Debug));
        assert!(args.bind.is_unspecified());
        assert!(args.open);
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        assert!(CliArgs::try_parse_from(["account-relay", "--bind", "localhost:80"]).is_err());
    }
}
