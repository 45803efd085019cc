use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tunesort_cli::options;
use tunesort_core::config::{self, AppConfig};
use tunesort_core::lifecycle::{self, Providers};
use tunesort_core::scanner::{self, ScanOptions};
use tunesort_providers::capture::TestPatternCapturer;
use tunesort_providers::lofty::LoftyTagReader;
use tunesort_providers::png::PngFrameEncoder;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run { json } => run(cfg, true, json).await,
        Commands::Organize { json } => run(cfg, false, json).await,
        Commands::Scan => scan(cfg).await,
    }
}

#[derive(Parser)]
#[command(name = "tunesort")]
#[command(
    about = "Organizes audio files into a year/album tree while sampling the screen",
    long_about = None
)]
struct Cli {
    /// Path to config TOML
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Organize files with the background sampler running
    Run {
        /// Output JSON summary
        #[arg(long)]
        json: bool,
    },
    /// Organize files without the sampler
    Organize {
        /// Output JSON summary
        #[arg(long)]
        json: bool,
    },
    /// List the files discovery would pick up
    Scan,
}

async fn run(cfg: AppConfig, with_sampler: bool, json: bool) -> Result<()> {
    let mut options = options::resolve(&cfg)?;
    if !with_sampler {
        options.sampler_enabled = false;
    }

    let providers = Providers {
        tags: Arc::new(LoftyTagReader),
        capturer: Arc::new(TestPatternCapturer::default()),
        encoder: Arc::new(PngFrameEncoder),
    };

    let summary = lifecycle::run(options, providers).await?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "status": "ok",
                "organized": summary.report.organized,
                "skipped": summary.report.skipped,
                "failed": summary.report.failed,
                "captures": summary.capture_cycles,
            }))?
        );
    } else {
        println!(
            "completed: {} organized, {} skipped, {} failed, {} captures",
            summary.report.organized,
            summary.report.skipped,
            summary.report.failed,
            summary.capture_cycles
        );
    }
    Ok(())
}

async fn scan(cfg: AppConfig) -> Result<()> {
    let options = options::resolve(&cfg)?;
    let mut files = scanner::spawn_scan(
        options.roots.clone(),
        ScanOptions {
            extension: options.extension.clone(),
            exclude: options.exclude.clone(),
        },
    )?;

    let mut count = 0usize;
    while let Some(path) = files.recv().await {
        println!("{}", path.display());
        count += 1;
    }
    println!("discovered {count} file(s)");
    Ok(())
}
