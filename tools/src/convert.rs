//! Converting a JSON tune collection into ABC files

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tunebook::{writer, Tunes};

/// Convert a JSON array of tunes into ABC notation
#[derive(Parser)]
#[clap(version)]
pub struct ConvertArgs {
    /// Path to the input JSON file
    #[clap(long)]
    input: PathBuf,

    /// Directory for output ABC files
    #[clap(long, default_value = ".")]
    output: PathBuf,

    /// Output to a single file instead of multiple files
    #[clap(long)]
    single: bool,

    /// Name of the single output file, relative to the output directory (used with -single)
    #[clap(long, default_value = "all_tunes.abc")]
    outfile: PathBuf,

    /// Log more details (can be repeated)
    #[clap(short, long, parse(from_occurrences))]
    pub verbose: u8,
}

impl ConvertArgs {
    /// Long flags that may also be spelled with a single dash, e.g. `-input`
    pub const LONG_FLAGS: &'static [&'static str] = &["input", "output", "single", "outfile"];
}

/// Convert a JSON array of tunes into ABC notation
pub fn convert(args: ConvertArgs) -> Result<()> {
    let tunes = Tunes::from_path(&args.input)
        .with_context(|| format!("Could not load tunes from {}", args.input.display()))?;

    println!("Found {} tunes in the input file", tunes.len());

    if writer::prepare_dir(&args.output).context("Could not create output directory")? {
        println!("Created output directory: {}", args.output.display());
    }

    if args.single {
        let path = args.output.join(&args.outfile);
        let count = writer::write_single(&tunes, &path).context("Could not write tunebook")?;

        println!("Successfully wrote {} tunes to {}", count, path.display());
    } else {
        let report = writer::write_per_tune(&tunes, &args.output)
            .context("Could not write tune files")?;

        println!(
            "Successfully wrote {} tunes to individual files in {}",
            report.written_count(),
            args.output.display()
        );
    }

    Ok(())
}
