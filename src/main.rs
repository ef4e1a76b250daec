use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ocr_grouping::{cli, Granularity, LayoutGrouperBuilder};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum GranularityArg {
    /// Each detection is a single word
    #[default]
    Word,
    /// Each detection is a whole text line
    Line,
}

impl From<GranularityArg> for Granularity {
    fn from(arg: GranularityArg) -> Self {
        match arg {
            GranularityArg::Word => Granularity::Word,
            GranularityArg::Line => Granularity::Line,
        }
    }
}

/// Groups OCR word detections into lines and blocks of text.
#[derive(Parser, Debug)]
#[command(name = "ocr-grouping")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON files, each holding the detections of one image
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Directory to store `<stem>.annotation.json` results; prints the text to stdout when omitted
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// What one detection covers
    #[arg(short = 'g', long, value_enum, default_value_t = GranularityArg::Word)]
    granularity: GranularityArg,

    /// Baseline tolerance (relative to word height)
    #[arg(long, default_value_t = 0.5)]
    baseline_tolerance: f32,

    /// Word gap tolerance (relative to word height)
    #[arg(long, default_value_t = 0.5)]
    gap_tolerance: f32,

    /// Line spacing within a block (relative to line height)
    #[arg(long, default_value_t = 0.75)]
    line_spacing: f32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let grouper = LayoutGrouperBuilder::new()
        .baseline_tolerance(args.baseline_tolerance)
        .gap_tolerance(args.gap_tolerance)
        .line_spacing(args.line_spacing)
        .granularity(args.granularity.into())
        .build()?;

    let stdout = std::io::stdout();
    let annotations = cli::run(
        &grouper,
        &args.files,
        args.output_dir.as_deref(),
        &mut stdout.lock(),
    )?;
    let failed = annotations.iter().filter(|it| !it.success).count();
    log::debug!("{} files annotated, {failed} failed", annotations.len());

    Ok(())
}
