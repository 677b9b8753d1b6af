//! Command line front end: `h5table FILE [options]`.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use h5table::precision::split_formats;
use h5table::selector::split_list;
use h5table::{convert, Diagnostics, Options, Outcome};
use h5table_render::DEFAULT_DELIMITER;
use tracing_subscriber::EnvFilter;

/// Convert the one-dimensional numeric datasets of an HDF5 file into an
/// aligned text table.
#[derive(Debug, Parser)]
#[command(name = "h5table", version, about)]
struct Cli {
    /// Input file (.h5, .hdf5, .he5, .nc, or .json)
    filename: PathBuf,

    /// Output file [default: input with a .txt extension]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Comma-separated datasets (path or name) to use as columns, in order
    #[arg(short, long, value_name = "LIST")]
    columns: Option<String>,

    /// Comma-separated format tokens: one for all columns or one per column
    #[arg(short, long, value_name = "LIST", allow_hyphen_values = true)]
    precision: Option<String>,

    /// Comma-separated datasets (path or name) to leave out
    #[arg(long, value_name = "LIST")]
    ignore: Option<String>,

    /// String placed between columns
    #[arg(long, default_value = DEFAULT_DELIMITER, allow_hyphen_values = true)]
    delimiter: String,

    /// Use full dataset paths as column labels
    #[arg(short, long)]
    full_name: bool,

    /// Add a row number column
    #[arg(short, long)]
    number: bool,

    /// Report skipped datasets and other notices
    #[arg(short, long)]
    verbose: bool,

    /// Replace the output file if it exists
    #[arg(long)]
    overwrite: bool,

    /// Also print the table to stdout
    #[arg(long)]
    preview: bool,
}

impl Cli {
    fn options(&self) -> Options {
        let list = |value: &Option<String>| value.as_deref().map(split_list).unwrap_or_default();
        Options {
            input: self.filename.clone(),
            output: self.output.clone(),
            columns: list(&self.columns),
            precision: self
                .precision
                .as_deref()
                .map(split_formats)
                .unwrap_or_default(),
            ignore: list(&self.ignore),
            delimiter: self.delimiter.clone(),
            full_name: self.full_name,
            number: self.number,
            overwrite: self.overwrite,
            preview: self.preview,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = cli.options();
    let mut diagnostics = Diagnostics::new(cli.verbose);

    let outcome = convert(&options, &mut diagnostics)
        .with_context(|| format!("converting {}", options.input.display()))?;

    if let Outcome::Written { rows, columns, .. } = outcome {
        tracing::debug!(rows, columns, "done");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn lists_are_split() {
        let cli = Cli::parse_from([
            "h5table", "data.json", "-c", "a, /b/c", "-p", "-8.2f", "--ignore", "x",
        ]);
        let options = cli.options();
        assert_eq!(options.columns, vec!["a", "/b/c"]);
        assert_eq!(options.precision, vec!["-8.2f"]);
        assert_eq!(options.ignore, vec!["x"]);
        assert_eq!(options.delimiter, DEFAULT_DELIMITER);
    }

    #[test]
    fn precision_tokens_are_kept_verbatim() {
        let cli = Cli::parse_from(["h5table", "data.json", "-p", " .1f,,e", "-c", " a ,,c"]);
        let options = cli.options();
        assert_eq!(options.precision, vec![" .1f", "", "e"]);
        assert_eq!(options.columns, vec!["a", "c"]);
    }

    #[test]
    fn short_flags() {
        let cli = Cli::parse_from(["h5table", "d.h5", "-f", "-n", "-v", "-o", "t.txt"]);
        assert!(cli.full_name && cli.number && cli.verbose);
        assert_eq!(cli.output, Some(PathBuf::from("t.txt")));
    }
}
