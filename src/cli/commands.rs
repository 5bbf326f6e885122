use crate::cli::prompt::prompt_options;
use crate::core::selector::select_files;
use crate::core::serializer::render_files;
use crate::domain::models::{Destination, Options, Selection};
use crate::infra::file_system::{WorkTree, list_tracked_files};
use crate::infra::logger::{log_summary, print_summary, setup_logger};
use crate::infra::output::dispatch;
use anyhow::Context;
use clap::Parser;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Exit status when the output was produced but could not be delivered.
const EXIT_DELIVERY_FAILED: u8 = 2;

#[derive(Parser)]
#[command(name = "gitcat")]
#[command(about = "Concatenate the text files tracked by Git into one LLM context block", long_about = None)]
pub struct Cli {
    /// Copy the concatenated output to the clipboard
    #[arg(short = 'c', long = "clipboard")]
    pub clipboard: bool,

    /// Comma-separated extensions to include; an empty entry matches files without one
    #[arg(short, long)]
    pub ext: Option<String>,

    /// Prefix every line with its 1-based line number
    #[arg(short = 'n', long)]
    pub line_numbers: bool,

    /// Output file, or `stdout`/`-`, or `clipboard`
    #[arg(short, long)]
    pub output: Option<String>,

    /// Repository directory
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Choose the options in a terminal form
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn options(&self) -> Options {
        Options {
            copy_to_clipboard: self.clipboard,
            extensions: self.ext.clone(),
            include_line_numbers: self.line_numbers,
            output: self.output.clone(),
        }
    }
}

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;
    debug!(
        "Command parameters: path={}, options={:?}, interactive={}",
        cli.path.display(),
        cli.options(),
        cli.interactive
    );

    let options = if cli.interactive {
        match prompt_options(&cli.options())? {
            Some(options) => options,
            None => return Ok(ExitCode::SUCCESS),
        }
    } else {
        cli.options()
    };

    concatenate(&cli.path, &options, cli.interactive)
}

fn report_skips(selection: &Selection) {
    for skipped in &selection.skipped {
        info!("Skipping {} file: {}", skipped.reason, skipped.path);
    }
}

fn concatenate(root: &Path, options: &Options, interactive: bool) -> anyhow::Result<ExitCode> {
    let candidates = list_tracked_files(root)
        .context("Failed to list Git files; possibly not a Git repository or Git is not installed")?;
    let tree = WorkTree::new(root);

    info!("Selecting files in {}", tree.root().display());
    let filter = options.extension_filter();
    let selection = select_files(&candidates, filter.as_ref(), &tree);
    report_skips(&selection);

    info!("Building output");
    let rendered = render_files(&selection.eligible, options.include_line_numbers, &tree);

    let skipped = selection.skipped.len() + rendered.failed.len();
    log_summary(&rendered.stats, skipped);
    if interactive || options.destination() != Destination::Stdout {
        print_summary(&rendered.stats, skipped)?;
    }

    info!("Writing output");
    if let Err(e) = dispatch(&rendered.content, options) {
        error!("Failed to deliver output: {:#}", e);
        return Ok(ExitCode::from(EXIT_DELIVERY_FAILED));
    }

    Ok(ExitCode::SUCCESS)
}
