use admonis_export::{ExportConfig, ExportPipelineBuilder, PipelineError, Strictness};
use clap::Parser;
use std::path::PathBuf;

/// Convert an XML product catalog feed into an Admonis JSON export.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// XML catalog feed to read
    #[arg(short, long, default_value = ExportConfig::DEFAULT_INPUT)]
    input: PathBuf,

    /// JSON file to write; parent directories are created
    #[arg(short, long, default_value = ExportConfig::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Fail on products without an id and on unresolved variants instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Write single-line JSON instead of indented output
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let strictness = if args.strict { Strictness::Strict } else { Strictness::Lenient };
    let summary = ExportPipelineBuilder::new()
        .with_input(&args.input)
        .with_output(&args.output)
        .with_strictness(strictness)
        .with_pretty(!args.compact)
        .build()?
        .run()?;

    println!(
        "Exported {} products with {} options to {} ({} unresolved variants, {} products without id)",
        summary.products,
        summary.options,
        summary.output.display(),
        summary.unresolved,
        summary.skipped_without_id
    );
    Ok(())
}
