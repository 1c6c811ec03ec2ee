// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV of dated rows and renders a multi-series timeline to PNG.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use timeline_core::{
    AxisConfig, Curve, InvalidDatePolicy, Record, ScaleKind, Timeline, TimelineConfig, TipSpec,
};
use timeline_render_skia::{theme, RenderOptions, SkiaSurface};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CurveArg {
    Basis,
    Cardinal,
    Linear,
}

impl From<CurveArg> for Curve {
    fn from(c: CurveArg) -> Self {
        match c {
            CurveArg::Basis => Curve::Basis,
            CurveArg::Cardinal => Curve::Cardinal,
            CurveArg::Linear => Curve::Linear,
        }
    }
}

/// Render a CSV file as a timeline PNG.
#[derive(Debug, Parser)]
#[command(name = "timeline-demo", version)]
struct Args {
    /// Input CSV with a header row (.csv/.cvs are tried interchangeably).
    input: PathBuf,
    /// Column holding the date of each row.
    #[arg(long, default_value = "date")]
    x: String,
    /// Value column; repeat for several series.
    #[arg(long = "y")]
    y: Vec<String>,
    /// Series columns, used when no --y is given.
    #[arg(long, value_delimiter = ',')]
    series: Vec<String>,
    #[arg(long)]
    fill: Option<String>,
    /// chrono format of the date column.
    #[arg(long, default_value = timeline_core::date::DEFAULT_DATE_FORMAT)]
    date_format: String,
    #[arg(long)]
    min_zero: bool,
    #[arg(long)]
    log_y: bool,
    #[arg(long)]
    nice: bool,
    #[arg(long, value_enum, default_value_t = CurveArg::Basis)]
    curve: CurveArg,
    /// Fail on rows whose date does not parse instead of failing at scale time.
    #[arg(long, conflicts_with = "skip_bad_dates")]
    strict_dates: bool,
    /// Drop rows whose date does not parse.
    #[arg(long)]
    skip_bad_dates: bool,
    /// Extra columns to list in tooltips (printed for the last point of each series).
    #[arg(long = "tip", value_delimiter = ',')]
    tip: Vec<String>,
    #[arg(long, default_value_t = timeline_core::types::WIDTH)]
    width: i32,
    #[arg(long, default_value_t = timeline_core::types::HEIGHT)]
    height: i32,
    #[arg(long, default_value = "light")]
    theme: String,
    /// Output PNG; defaults to target/out/timeline_<stem>.png.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let (path, used_alt) = resolve_path(&args.input)?;
    info!(input = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }

    let records = load_records_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(rows = records.len(), "loaded records");
    if records.is_empty() {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }

    let config = build_config(&args);
    let opts = RenderOptions {
        width: args.width,
        height: args.height,
        theme: theme::find(&args.theme),
        ..RenderOptions::default()
    };
    let helper = Arc::new(opts.helper());
    let mut surface = SkiaSurface::new(opts)?;
    let mut timeline = Timeline::new(config, helper);
    timeline.render(&records, &mut surface).context("rendering timeline")?;

    for (i, series) in timeline.series().iter().enumerate() {
        if series.is_empty() {
            warn!(series = %series.name, "series has no plottable points");
            continue;
        }
        let tip = timeline.tooltip(i, series.len() - 1)?;
        info!(points = series.len(), "latest {}", tip.to_string().replace('\n', " | "));
    }

    let out = args.out.clone().unwrap_or_else(|| out_name_for(&path));
    surface.save_png(&out)?;
    info!(output = %out.display(), "wrote timeline");
    Ok(())
}

fn build_config(args: &Args) -> TimelineConfig {
    let mut config = TimelineConfig::new().x(&args.x).parse_date(&args.date_format).curve(args.curve.into());
    if !args.y.is_empty() {
        config = config.y_fields(args.y.iter().cloned());
    }
    if !args.series.is_empty() {
        config = config.series(args.series.iter().cloned());
    }
    if let Some(fill) = &args.fill {
        config = config.fill(fill);
    }
    let policy = if args.strict_dates {
        InvalidDatePolicy::Reject
    } else if args.skip_bad_dates {
        InvalidDatePolicy::Drop
    } else {
        InvalidDatePolicy::Propagate
    };
    let y_kind = if args.log_y { ScaleKind::Log10 } else { ScaleKind::Linear };
    config
        .invalid_dates(policy)
        .x_axis(AxisConfig::default_x().nice(args.nice))
        .y_axis(AxisConfig::new(y_kind).min_zero(args.min_zero).nice(args.nice))
        .tip(args.tip.iter().fold(TipSpec::new(), |t, f| t.field(f)))
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(p: &Path) -> Result<(PathBuf, bool)> {
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => alt.set_extension("csv"),
        "csv" => alt.set_extension("cvs"),
        _ => return None,
    };
    Some(alt)
}

/// Produce output file name like target/out/timeline_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("timeline_{stem}.png"))
}

/// Load a headed CSV; every cell becomes a text value keyed by its header.
fn load_records_csv(path: &Path) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_records(file)
}

fn read_records<R: std::io::Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::Headers).from_reader(reader);
    let headers = rdr.headers()?.clone();
    tracing::debug!(?headers, "csv headers");

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        out.push(headers.iter().zip(rec.iter()).collect::<Record>());
    }
    Ok(out)
}
