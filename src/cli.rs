use std::path::PathBuf;

use clap::Parser;

use crate::config::Environment;

/// Command-line client for the Tidepool health-data platform.
///
/// Operations run in a fixed order within one invocation: ping, login,
/// upload, query, then logout (unless `--no-logout` is given). The session
/// token lives only for the duration of the run.
#[derive(Parser, Debug)]
#[command(name = "tidepool", version)]
#[command(about = "Upload data blocks and run queries against the Tidepool platform")]
pub struct Cli {
    /// Platform environment to talk to
    #[arg(long, value_enum, default_value = "local")]
    pub server: Environment,

    /// Check platform availability before anything else
    #[arg(long)]
    pub ping: bool,

    /// Log in as this account; the password is prompted on the terminal
    #[arg(long, value_name = "EMAIL")]
    pub login: Option<String>,

    /// Upload a JSON array of data blocks from this file ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    pub upload: Option<PathBuf>,

    /// Run a raw query payload, e.g. a type filter: smbg, cbg, bolus, basal
    #[arg(long, value_name = "PAYLOAD")]
    pub query: Option<String>,

    /// Leave the session open instead of logging out at the end
    #[arg(long)]
    pub no_logout: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_local_environment() {
        let cli = Cli::parse_from(["tidepool"]);
        assert_eq!(cli.server, Environment::Local);
        assert!(!cli.ping);
        assert!(cli.login.is_none());
    }

    #[test]
    fn parses_the_full_flag_surface() {
        let cli = Cli::parse_from([
            "tidepool",
            "--server",
            "staging",
            "--ping",
            "--login",
            "user@example.com",
            "--upload",
            "blocks.json",
            "--query",
            "cbg",
            "--no-logout",
        ]);
        assert_eq!(cli.server, Environment::Staging);
        assert!(cli.ping);
        assert_eq!(cli.login.as_deref(), Some("user@example.com"));
        assert_eq!(cli.upload.as_deref(), Some(std::path::Path::new("blocks.json")));
        assert_eq!(cli.query.as_deref(), Some("cbg"));
        assert!(cli.no_logout);
    }
}
