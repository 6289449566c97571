//! asmalign - Column-aligning formatter for assembly source

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{self, Cursor, Read, Write};
use std::path::Path;

use anyhow::Context;
use asmalign::process::{format_file, resolve_destination, Destination, StdinConfirm};
use asmalign::{find_directive, parse_args, CliArgs, Config, FormatReport, Result};

fn main() -> Result<()> {
    let args = parse_args();
    let mut config = build_config(&args)?;

    // Ask before touching the input file, before anything is read
    let destination = if args.reads_stdin() {
        args.output
            .clone()
            .map_or(Destination::Stdout, Destination::File)
    } else {
        resolve_destination(&args.input, args.output.as_deref(), &mut StdinConfirm)?
    };
    if destination == Destination::Skipped {
        eprintln!("Skipping...");
    }

    let contents = read_input(&args)?;
    let source_name = if args.reads_stdin() {
        "stdin".to_string()
    } else {
        args.input.display().to_string()
    };
    apply_directive_overrides(&mut config, &contents, args.debug, &source_name);

    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }
    if args.debug {
        print_config_debug(&config);
    }

    let mut output = Vec::new();
    let report = format_file(Cursor::new(&contents), &mut output, &config)
        .with_context(|| format!("failed to format {source_name}"))?;

    for warning in &report.indent_warnings {
        eprintln!("Warning: {warning}");
    }
    if args.debug {
        print_report_debug(&report);
    }

    match destination {
        Destination::File(path) => write_output(&path, &output)?,
        Destination::Stdout | Destination::Skipped => io::stdout().write_all(&output)?,
    }

    Ok(())
}

/// Build configuration from CLI args and config files
///
/// An explicit `--config` file replaces auto-discovery. Discovery starts at the
/// input file, or the current directory when reading stdin.
fn build_config(args: &CliArgs) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)
            .with_context(|| format!("failed to load config {}", config_path.display()))?
    } else {
        let start = if args.reads_stdin() {
            std::env::current_dir().unwrap_or_default()
        } else {
            args.input.clone()
        };
        if args.debug {
            let discovered = Config::discover_config_files(&start);
            if discovered.is_empty() {
                eprintln!("[DEBUG] No config files discovered for: {}", start.display());
            } else {
                eprintln!("[DEBUG] Discovered config files for {}:", start.display());
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(&start)
    };

    // Override with CLI arguments
    if let Some(col) = args.col {
        config.comment_column = col;
    }
    if let Some(comment_char) = &args.comment_char {
        config.comment_char.clone_from(comment_char);
    }
    if let Some(gap) = args.gapsize {
        config.gap = gap;
    }
    if args.check_indent {
        config.check_indent = true;
    }
    if let Some(style) = args.indent_style {
        config.indent_style = style;
    }

    Ok(config)
}

/// Apply directive overrides from file contents to a configuration
fn apply_directive_overrides(config: &mut Config, contents: &[u8], debug: bool, source_name: &str) {
    let mut cursor = Cursor::new(contents);
    if let Some(overrides) = find_directive(&mut cursor, &config.comment_char) {
        if debug {
            eprintln!("[DEBUG] Found file directive in {source_name}: {overrides:?}");
        }
        overrides.apply(config);
    }
}

/// Read the whole input into memory
fn read_input(args: &CliArgs) -> Result<Vec<u8>> {
    let mut contents = Vec::new();
    if args.reads_stdin() {
        io::stdin()
            .read_to_end(&mut contents)
            .context("failed to read stdin")?;
    } else {
        std::fs::File::open(&args.input)
            .and_then(|mut file| file.read_to_end(&mut contents))
            .with_context(|| format!("failed to read {}", args.input.display()))?;
    }
    Ok(contents)
}

fn write_output(path: &Path, output: &[u8]) -> Result<()> {
    std::fs::write(path, output).with_context(|| format!("failed to write {}", path.display()))
}

/// Print configuration values in debug mode
fn print_config_debug(config: &Config) {
    eprintln!("[DEBUG] Configuration:");
    eprintln!("[DEBUG]   comment_column: {}", config.comment_column);
    eprintln!("[DEBUG]   comment_char: {:?}", config.comment_char);
    eprintln!("[DEBUG]   gap: {}", config.gap);
    eprintln!("[DEBUG]   check_indent: {}", config.check_indent);
    eprintln!("[DEBUG]   indent_style: {}", config.indent_style);
}

/// Print measured column widths in debug mode
fn print_report_debug(report: &FormatReport) {
    eprintln!("[DEBUG] Lines: {}", report.line_count);
    eprintln!("[DEBUG] Label width: {}", report.widths.label);
    eprintln!("[DEBUG] Mnemonic width: {}", report.widths.mnemonic);
    eprintln!("[DEBUG] Operands width: {}", report.widths.operands);
    eprintln!("[DEBUG] Indent width: {}", report.indent_width);
}
