use std::path::PathBuf;

use crate::cli::Cli;
use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub app_id: String,
    pub installation_id: u64,
    pub key_file: PathBuf,
    pub namespace: String,
    pub secret_name: String,
    pub username: String,
    pub ttl_secs: i64,
}

impl TryFrom<Cli> for Config {
    type Error = AppError;

    fn try_from(cli: Cli) -> AppResult<Self> {
        if cli.app_id.is_empty() {
            return Err(AppError::Cli("github app id is required (-a)".to_string()));
        }
        if cli.installation_id == 0 {
            return Err(AppError::Cli(
                "github app installation id is required (-i)".to_string(),
            ));
        }
        if cli.key_file.is_empty() {
            return Err(AppError::Cli(
                "path to the app private key is required (-k)".to_string(),
            ));
        }
        if cli.secret_name.is_empty() {
            return Err(AppError::Cli("secret name is required (-s)".to_string()));
        }
        if cli.ttl <= 0 {
            return Err(AppError::Cli(
                "token ttl must be a positive number of seconds (-t)".to_string(),
            ));
        }

        Ok(Self {
            app_id: cli.app_id,
            installation_id: cli.installation_id,
            key_file: PathBuf::from(cli.key_file),
            namespace: cli.namespace,
            secret_name: cli.secret_name,
            username: cli.username,
            ttl_secs: cli.ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("gh-token-secret").chain(args.iter().copied()))
    }

    #[test]
    fn full_args_build_a_config() {
        let cli = parse(&["-a", "1234", "-i", "42", "-k", "/tmp/key.pem", "-s", "ci-git"]);
        let config = Config::try_from(cli).unwrap();

        assert_eq!(config.app_id, "1234");
        assert_eq!(config.installation_id, 42);
        assert_eq!(config.key_file, PathBuf::from("/tmp/key.pem"));
        assert_eq!(config.namespace, "default");
        assert_eq!(config.secret_name, "ci-git");
        assert_eq!(config.username, "token");
        assert_eq!(config.ttl_secs, 600);
    }

    #[test]
    fn missing_app_id_is_a_usage_error() {
        let cli = parse(&["-i", "42", "-k", "/tmp/key.pem", "-s", "ci-git"]);
        let err = Config::try_from(cli).unwrap_err();
        assert!(matches!(err, AppError::Cli(_)), "got {err:?}");
    }

    #[test]
    fn zero_installation_id_is_a_usage_error() {
        let cli = parse(&["-a", "1234", "-k", "/tmp/key.pem", "-s", "ci-git"]);
        let err = Config::try_from(cli).unwrap_err();
        assert!(matches!(err, AppError::Cli(_)), "got {err:?}");
    }

    #[test]
    fn missing_key_file_is_a_usage_error() {
        let cli = parse(&["-a", "1234", "-i", "42", "-s", "ci-git"]);
        let err = Config::try_from(cli).unwrap_err();
        assert!(matches!(err, AppError::Cli(_)), "got {err:?}");
    }

    #[test]
    fn non_positive_ttl_is_a_usage_error() {
        let cli = parse(&[
            "-a", "1234", "-i", "42", "-k", "/tmp/key.pem", "-s", "ci-git", "-t", "0",
        ]);
        let err = Config::try_from(cli).unwrap_err();
        assert!(matches!(err, AppError::Cli(_)), "got {err:?}");
    }
}
