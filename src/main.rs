use std::io;
use std::process;

use clap::Parser;
use tracing::{debug, Level};

use relnote::core::{
    print_error_message, print_info_message, InputTarget, ReleaseNoteProcessor, RelnoteError,
    RelnoteOptions,
};
use relnote::env::{EnvVar, LogLevel, NoColor};
use relnote::utils::path::get_filename_from_cli_or_prompt;

#[derive(Parser, Debug)]
#[command(
    name = "relnote",
    about = "Turns an exported HTML page into a branded release note",
    version
)]
struct Cli {
    /// HTML file to rewrite in place (".html" is appended when missing)
    filename: Option<String>,

    /// Anything after the filename is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(error) if !error.use_stderr() => error.exit(),
        Err(error) => {
            let _ = error.print();
            process::exit(1);
        }
    };
    init_tracing();

    if let Err(error) = run(cli) {
        print_error_message(&error.to_string());
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RelnoteError> {
    if !cli.ignored.is_empty() {
        debug!("Ignoring extra arguments: {:?}", cli.ignored);
    }

    let filename = get_filename_from_cli_or_prompt(cli.filename, io::stdin().lock(), io::stdout())
        .map_err(|source| RelnoteError::Io {
            action: "read filename from",
            path: "stdin".into(),
            source,
        })?
        .ok_or(RelnoteError::NoFilename)?;

    let target = InputTarget::resolve(&filename)?;
    let processor = ReleaseNoteProcessor::new(RelnoteOptions::default());
    let summary = processor.process_file(&target)?;

    print_info_message(&format!(
        "{}: {} image(s) relocated, {} reference(s) reused",
        target.path.display(),
        summary.relocation.moved.len(),
        summary.relocation.reused
    ));

    Ok(())
}

fn init_tracing() {
    let level = LogLevel::get().unwrap_or_else(|error| {
        print_error_message(&error.to_string());
        Level::INFO
    });

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(!NoColor::get_or_default(false))
        .with_writer(io::stderr)
        .init();
}
