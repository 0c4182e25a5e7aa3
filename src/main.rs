use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use doccat::report::MergeReport;
use doccat::{InputFile, process_files, walker};

#[derive(Parser)]
#[command(name = "doccat")]
#[command(version)]
#[command(about = "Merge mixed-format documents into a single file", long_about = None)]
struct Cli {
    /// Input files to merge (in order); glob patterns are expanded
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output file path (defaults to merged_document.<ext> in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force the final output to be a PDF regardless of input types
    #[arg(long)]
    pdf: bool,

    /// Print a JSON summary of the merge to stdout
    #[arg(long)]
    json: bool,

    /// Suppress all non-error output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = walker::resolve_input_paths(&cli.inputs)?;
    if !cli.quiet {
        println!("Merging {} files...", paths.len());
    }

    let files = paths
        .iter()
        .map(|path| InputFile::from_path(path))
        .collect::<doccat::Result<Vec<_>>>()?;

    let outcome = process_files(&files, cli.pdf)?;

    if let Some(warning) = &outcome.warning {
        eprintln!("⚠ {warning}");
    }

    if cli.json {
        println!("{}", MergeReport::new(&files, &outcome).to_json()?);
    }

    match &outcome.data {
        Some(data) => {
            let output = cli
                .output
                .unwrap_or_else(|| PathBuf::from(&outcome.filename));
            std::fs::write(&output, data)?;
            if !cli.quiet {
                println!("✓ Successfully created {}", output.display());
            }
            Ok(())
        }
        None => {
            eprintln!("✗ Could not merge the files. Check the file types or their content.");
            std::process::exit(1);
        }
    }
}
