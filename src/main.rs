use anyhow::Context;
use clap::{Parser, ValueEnum};
use dedupx_core::ContactCollection;
use dedupx_io::{load_weights, ContactLoader, ReportFormat, ReportWriter};
use dedupx_similarity::{
    PairwiseScorer, ReportConfig, ReportRow, ReportSummary, SimilarityWeights,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Score every pair of contacts and report likely duplicates
#[derive(Parser, Debug)]
#[command(name = "dedupx")]
#[command(about = "Pairwise contact deduplication report", long_about = None)]
struct Args {
    /// Path to the CSV contact table
    input: PathBuf,

    /// Minimum score for a pair to be reported
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    threshold: f64,

    /// Print numeric scores instead of labels
    #[arg(long)]
    numeric: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with alternate similarity weights
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Attach a per-field breakdown to every row (JSON format only)
    #[arg(long)]
    explain: bool,

    /// Score pairs on all cores
    #[arg(long)]
    parallel: bool,

    /// Number of worker threads for --parallel (0 = one per core)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => ReportFormat::Csv,
            Format::Json => ReportFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr, stdout carries the report
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting dedupx v{}", env!("CARGO_PKG_VERSION"));
    info!("Input: {:?}", args.input);

    if args.explain && matches!(args.format, Format::Csv) {
        anyhow::bail!("--explain requires --format json");
    }

    let weights = match &args.weights {
        Some(path) => {
            info!("Weights: {:?}", path);
            load_weights(path).with_context(|| format!("loading weights from {:?}", path))?
        }
        None => SimilarityWeights::default(),
    };
    let scorer = PairwiseScorer::new(weights)?;

    let collection = ContactLoader::default()
        .load_path(&args.input)
        .with_context(|| format!("loading contacts from {:?}", args.input))?;

    let config = ReportConfig::new(args.threshold, !args.numeric).with_explain(args.explain);
    let rows = if args.parallel {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("configuring worker threads")?;
        scorer.par_generate_report(&collection, &config)?
    } else {
        scorer.generate_report(&collection, &config)?
    };

    write_report(&args, &rows)?;
    log_summary(&collection, &rows)?;
    Ok(())
}

fn write_report(args: &Args, rows: &[ReportRow]) -> anyhow::Result<()> {
    let writer = ReportWriter::new(args.format.into());
    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {:?}", path))?;
            writer.write(rows, BufWriter::new(file))?;
            info!("Report written to {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            writer.write(rows, &mut lock)?;
            lock.flush()?;
        }
    }
    Ok(())
}

fn log_summary(collection: &ContactCollection, rows: &[ReportRow]) -> anyhow::Result<()> {
    let summary = ReportSummary::compute(collection, rows);
    info!(
        contacts = summary.contacts_count,
        pairs = summary.pairs_count,
        rows = summary.rows_count,
        "Report complete"
    );
    info!("Labels: {}", serde_json::to_string(&summary.label_counts)?);
    if let Some(component) = summary.top_component {
        info!("Best pair driven by: {}", component);
    }
    Ok(())
}
