use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};

/// Command-line arguments accepted by the `roster` binary.
#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Search a contact roster by name with ranked match positions"
)]
pub(crate) struct CliArgs {
    #[arg(
        value_name = "PHRASE",
        help = "Phrase to locate within contact names"
    )]
    pub(crate) phrase: String,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "ROSTER_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'r',
        long = "roster",
        value_name = "FILE",
        env = "ROSTER_FILE",
        help = "JSON roster file holding the current user and contacts"
    )]
    pub(crate) roster: Option<PathBuf>,
    #[arg(
        long = "case-sensitive",
        value_parser = BoolishValueParser::new(),
        value_name = "BOOL",
        help = "Compare phrase characters exactly (default: disabled)"
    )]
    pub(crate) case_sensitive: Option<bool>,
    #[arg(
        short = 'l',
        long,
        value_name = "NUM",
        help = "Keep at most this many ranked matches (default: unlimited)"
    )]
    pub(crate) limit: Option<usize>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, FromArgMatches};

    use super::*;

    #[test]
    fn parse_cli_accepts_default_arguments() {
        let command = CliArgs::command();
        let mut matches = command.get_matches_from(vec!["roster", "anna"]);
        let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");

        assert_eq!(parsed.phrase, "anna");
        assert_eq!(parsed.output, OutputFormat::Plain);
        assert!(parsed.roster.is_none());
    }

    #[test]
    fn boolish_flags_accept_yes_and_no() {
        let command = CliArgs::command();
        let mut matches =
            command.get_matches_from(vec!["roster", "--case-sensitive", "yes", "anna"]);
        let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");

        assert_eq!(parsed.case_sensitive, Some(true));
    }
}
