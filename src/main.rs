use anyhow::Result;
use clap::Parser;
use citydir::config::{CollectorConfig, DEFAULT_DIRECTORY_LABEL, DEFAULT_OUTPUT_PATH};
use citydir::stats::{write_records, write_stats};
use citydir::PageCollector;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "citydir")]
#[command(about = "Extracts resident records from OCR text of city directory pages")]
#[command(version)]
struct Args {
    /// Directory containing one OCR text file per page (e.g. page_108.txt)
    input_dir: PathBuf,

    /// Output path for the JSON record collection
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Directory volume name stamped into every record
    #[arg(long, default_value = DEFAULT_DIRECTORY_LABEL)]
    directory_label: String,

    /// Abort on the first unusable page file
    #[arg(long)]
    fail_fast: bool,

    /// Suppress the console progress bar
    #[arg(long)]
    no_progress: bool,

    /// Optional run statistics output path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the run summary only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let config = CollectorConfig::new(&args.input_dir)
        .with_output_path(&args.output)
        .with_directory_label(&args.directory_label)
        .with_fail_fast(args.fail_fast);

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} pages ({elapsed})")?,
        );
        bar
    };

    let run = PageCollector::new(config.clone())
        .with_progress(progress)
        .run()
        .await?;

    write_records(&config.output_path, &run.records).await?;
    if let Some(stats_out) = &args.stats_out {
        write_stats(stats_out, &run.stats).await?;
        info!("Run statistics written to {}", stats_out.display());
    }

    if run.stats.pages_skipped > 0 {
        println!("Skipped {} page files (see log)", run.stats.pages_skipped);
    }
    println!("Parsed and saved {} entries to:", run.records.len());
    println!("{}", config.output_path.display());

    Ok(())
}
