use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Map permalinks: build them, or see what opening one does to the map.
#[derive(Debug, Parser)]
#[command(name = "waymark", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// print the permalink of an element id
    Permalink {
        id: String,
        /// overrides the host from the config file
        #[arg(long)]
        host: Option<String>,
    },
    /// open a page location and print the resulting ui state as json
    Open {
        /// page location, like `example.com/?id=abc123`
        location: String,
        /// feature data json
        #[arg(long, short)]
        features: PathBuf,
        /// extra string table json for the configured locale
        #[arg(long)]
        strings: Option<PathBuf>,
        /// overrides the locale from the config file
        #[arg(long)]
        locale: Option<String>,
    },
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::*;
    use similar_asserts::assert_eq;

    #[rstest]
    #[case(&["waymark", "permalink", "abc123"], "abc123", None)]
    #[case(&["waymark", "permalink", "42", "--host", "example.com"], "42", Some("example.com"))]
    fn parses_permalink(#[case] args: &[&str], #[case] id: &str, #[case] host: Option<&str>) {
        let cli = Cli::try_parse_from(args).expect("failed to parse args");
        match cli.command {
            Command::Permalink { id: parsed, host: parsed_host } => {
                assert_eq!(parsed, id);
                assert_eq!(parsed_host.as_deref(), host);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_open() {
        let cli = Cli::try_parse_from([
            "waymark",
            "open",
            "example.com/?id=42",
            "-f",
            "features.json",
            "--locale",
            "de",
        ])
        .expect("failed to parse args");
        match cli.command {
            Command::Open {
                location,
                features,
                strings,
                locale,
            } => {
                assert_eq!(location, "example.com/?id=42");
                assert_eq!(features, PathBuf::from("features.json"));
                assert_eq!(strings, None);
                assert_eq!(locale.as_deref(), Some("de"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn open_requires_features() {
        assert!(Cli::try_parse_from(["waymark", "open", "example.com/?id=42"]).is_err());
    }
}
