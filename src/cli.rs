//! Command-line interface for asmalign.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

use crate::format::IndentStyle;

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// File to format (`-` reads stdin)
    pub input: PathBuf,

    /// Destination file; stdout when absent
    pub output: Option<PathBuf>,

    /// Column to align trailing comments to
    pub col: Option<usize>,

    /// Comment marker
    pub comment_char: Option<String>,

    /// Spaces between columns
    pub gapsize: Option<usize>,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Report indentation style problems
    pub check_indent: bool,

    /// Indentation style to check against
    pub indent_style: Option<IndentStyle>,

    /// Enable debug output
    pub debug: bool,
}

impl CliArgs {
    /// True when the input is standard input
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("asmalign")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Aligns labels, mnemonics, operands and comments in assembly source")
        .arg(
            Arg::new("input")
                .help("Input file (use - for stdin)")
                .value_name("FILE")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file (optional, default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("col")
                .short('c')
                .long("col")
                .help("Column to align comments to [default: 40]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("comment-char")
                .short('m')
                .long("comment-char")
                .help("Comment character [default: ;]")
                .value_name("CHAR"),
        )
        .arg(
            Arg::new("gapsize")
                .short('g')
                .long("gapsize")
                .help("Spaces between columns [default: 2]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("check-indent")
                .long("check-indent")
                .help("Warn about lines whose indentation breaks the indent style")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("indent-style")
                .long("indent-style")
                .help("Indentation style for --check-indent: spaces or tabs [default: spaces]")
                .value_name("STYLE")
                .value_parser(clap::value_parser!(IndentStyle)),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows config and column widths)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        input: matches
            .get_one::<PathBuf>("input")
            .cloned()
            .unwrap_or_default(),
        output: matches.get_one::<PathBuf>("output").cloned(),
        col: matches.get_one::<usize>("col").copied(),
        comment_char: matches.get_one::<String>("comment-char").cloned(),
        gapsize: matches.get_one::<usize>("gapsize").copied(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        check_indent: matches.get_flag("check-indent"),
        indent_style: matches.get_one::<IndentStyle>("indent-style").copied(),
        debug: matches.get_flag("debug"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_builds() {
        let cmd = build_cli();
        assert_eq!(cmd.get_name(), "asmalign");
        cmd.debug_assert();
    }

    #[test]
    fn test_input_required() {
        assert!(build_cli().try_get_matches_from(vec!["asmalign"]).is_err());
    }

    #[test]
    fn test_defaults_not_set() {
        let args = parse_args_from(vec!["asmalign", "boot.asm"]);
        assert_eq!(args.input, PathBuf::from("boot.asm"));
        assert_eq!(args.output, None);
        assert_eq!(args.col, None);
        assert_eq!(args.comment_char, None);
        assert_eq!(args.gapsize, None);
        assert_eq!(args.config, None);
        assert_eq!(args.indent_style, None);
        assert!(!args.check_indent);
        assert!(!args.debug);
        assert!(!args.reads_stdin());
    }

    #[test]
    fn test_short_flags() {
        let args = parse_args_from(vec![
            "asmalign", "-o", "out.asm", "-c", "48", "-m", "#", "-g", "4", "-D", "in.asm",
        ]);
        assert_eq!(args.output, Some(PathBuf::from("out.asm")));
        assert_eq!(args.col, Some(48));
        assert_eq!(args.comment_char.as_deref(), Some("#"));
        assert_eq!(args.gapsize, Some(4));
        assert!(args.debug);
    }

    #[test]
    fn test_long_flags() {
        let args = parse_args_from(vec![
            "asmalign",
            "--output=out.asm",
            "--col",
            "32",
            "--comment-char",
            "//",
            "--gapsize",
            "1",
            "--config",
            "fmt.toml",
            "--check-indent",
            "--indent-style",
            "tabs",
            "in.asm",
        ]);
        assert_eq!(args.output, Some(PathBuf::from("out.asm")));
        assert_eq!(args.col, Some(32));
        assert_eq!(args.comment_char.as_deref(), Some("//"));
        assert_eq!(args.gapsize, Some(1));
        assert_eq!(args.config, Some(PathBuf::from("fmt.toml")));
        assert!(args.check_indent);
        assert_eq!(args.indent_style, Some(IndentStyle::Tabs));
    }

    #[test]
    fn test_stdin_input() {
        let args = parse_args_from(vec!["asmalign", "-"]);
        assert!(args.reads_stdin());
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        assert!(build_cli()
            .try_get_matches_from(vec!["asmalign", "-c", "wide", "in.asm"])
            .is_err());
        assert!(build_cli()
            .try_get_matches_from(vec!["asmalign", "-g", "-1", "in.asm"])
            .is_err());
        assert!(build_cli()
            .try_get_matches_from(vec!["asmalign", "--indent-style", "both", "in.asm"])
            .is_err());
    }
}
