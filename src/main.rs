// Tue Aug 25 2026 - Alex

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use linkmap_analyzer::{
    input::{read_link_map, write_report},
    linkmap::{LinkMapError, LinkMapParser},
    report::ReportBuilder,
    utils::LoggingUtils,
};
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "linkmap-analyzer")]
#[command(version = "1.0.0")]
#[command(about = "Size report generator for Apple linker map files", long_about = None)]
struct Args {
    /// Link map file produced by ld64's -map option
    input: PathBuf,

    /// Write the report here instead of stdout (a directory gets LPLinkMap.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Aggregate object files into their static libraries
    #[arg(short, long)]
    group: bool,

    /// Case-sensitive substring filter on the record's path
    #[arg(short, long, default_value = "")]
    search: String,

    /// Emit the records as pretty JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Debug logging, shows per-line parse anomalies
    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_banner: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    LoggingUtils::init_logger(LoggingUtils::level_from_verbosity(args.verbose));

    if !args.no_banner {
        eprintln!("{}", "Link Map Size Analyzer".cyan().bold());
        eprintln!("{}", "=".repeat(50).cyan());
    }

    let start_time = Instant::now();

    eprintln!("{} Loading link map: {}", "[*]".blue(), args.input.display());

    let content = read_link_map(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let spinner = if args.no_progress {
        None
    } else {
        Some(make_spinner())
    };

    let index = match LinkMapParser::parse(&content) {
        Ok(index) => index,
        Err(LinkMapError::InvalidFormat) => {
            if let Some(pb) = &spinner {
                pb.finish_and_clear();
            }
            eprintln!("{} Not a recognizable link map file", "[!]".red());
            process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    eprintln!("{} Parsed {} object files", "[+]".green(), index.len());

    let builder = ReportBuilder::new()
        .with_grouping(args.group)
        .with_search_key(args.search);

    if args.json {
        let entries = builder.entries(&index);
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        let report = builder.build(&index);
        match &args.output {
            Some(target) => {
                let path = write_report(&report, target)
                    .with_context(|| format!("failed to write report to {}", target.display()))?;
                eprintln!("{} Report saved to: {}", "[+]".green(), path.display());
            }
            None => print!("{report}"),
        }
    }

    let elapsed = start_time.elapsed();
    eprintln!("{} Done in {:.2}s", "[+]".green(), elapsed.as_secs_f64());

    Ok(())
}

fn make_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message("Parsing link map...");
    pb
}
