use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use codexray::config::XrayConfig;
use codexray::core::{DependencyAnalyzer, FileScanner, ScanOptions};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "codexray",
    version,
    about = "Cross-language source dependency graph extractor"
)]
struct Cli {
    /// Project directory to analyze
    #[arg(value_name = "PATH", default_value = ".")]
    input: PathBuf,

    /// Write the graph JSON here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Extra directory names to skip (comma-separated or repeated)
    #[arg(short, long, value_name = "DIRS", value_delimiter = ',')]
    exclude: Vec<String>,

    /// Maximum directory depth below PATH (0 = PATH only)
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Stop scanning after N files
    #[arg(long, value_name = "N")]
    max_files: Option<usize>,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("codexray={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        output,
        exclude,
        max_depth,
        max_files,
        verbose: _,
    } = cli;

    let start_time = Instant::now();
    let config = XrayConfig::load(&input);

    let mut options = ScanOptions::from_config(&config).with_excludes(
        exclude
            .into_iter()
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty()),
    );
    if max_depth.is_some() {
        options.max_depth = max_depth;
    }
    if max_files.is_some() {
        options.max_files = max_files;
    }

    info!("scanning {}", input.display());
    let files = FileScanner::new()
        .scan_directory(&input, &options)
        .with_context(|| format!("failed to scan {}", input.display()))?;
    info!("found {} files", files.len());

    let analyzer = DependencyAnalyzer::from_config(&config);
    let graph = analyzer.analyze(&files, &input);

    let cycles = graph.import_cycles();
    info!(
        "{} nodes, {} edges, {} external dependencies, {} import cycles",
        graph.nodes.len(),
        graph.edges.len(),
        graph.external_deps.len(),
        cycles.len()
    );

    let json = serde_json::to_string_pretty(&graph)?;
    match output {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    info!("done in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(())
}
