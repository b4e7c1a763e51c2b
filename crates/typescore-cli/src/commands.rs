use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};
use typescore_cli::config::{Config, Overrides, Settings};
use typescore_cli::render::{
    Detection, TableStyle, detections_table, patterns_table, profile_table, score_line,
};
use typescore_detect::{PatternCatalog, PatternKind, TypeDetector};
use typescore_ingest::{CsvTableParser, TableParser, read_text};
use typescore_score::TypeScorer;

use crate::cli::{DetectArgs, ProfileArgs, ScoreArgs};

pub fn run_score(args: &ScoreArgs, config: &Config) -> Result<()> {
    let settings = resolve(config, &args.overrides())?;
    let span = info_span!("score", file = %args.file.display());
    let _guard = span.enter();

    let scorer = TypeScorer::from_options(settings.detector, settings.score)?;
    let text = load(&args.file)?;
    let report = scorer
        .score_text(&CsvTableParser::new(), &text, &settings.dialect)
        .with_context(|| format!("score {}", args.file.display()))?;
    info!(
        known = report.known,
        total = report.total,
        score = report.score,
        "scored file"
    );

    if args.json {
        let output = serde_json::json!({
            "file": args.file.display().to_string(),
            "dialect": settings.dialect,
            "known": report.known,
            "total": report.total,
            "score": report.score,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", score_line(&report));
    }
    Ok(())
}

pub fn run_detect(args: &DetectArgs, config: &Config) -> Result<()> {
    let settings = resolve(config, &args.overrides())?;
    let detector = TypeDetector::new(settings.detector);
    let detections: Vec<Detection> = args
        .cells
        .iter()
        .map(|cell| Detection {
            cell: cell.clone(),
            label: detector.detect_type(cell),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&detections)?);
    } else {
        println!("{}", detections_table(&detections, TableStyle::Rich));
    }
    Ok(())
}

pub fn run_profile(args: &ProfileArgs, config: &Config) -> Result<()> {
    let settings = resolve(config, &args.overrides())?;
    let span = info_span!("profile", file = %args.file.display());
    let _guard = span.enter();

    let scorer = TypeScorer::from_options(settings.detector, settings.score)?;
    let text = load(&args.file)?;
    let rows = CsvTableParser::new()
        .parse(&text, &settings.dialect)
        .with_context(|| format!("parse {}", args.file.display()))?;
    let profile = scorer.profile(&rows);
    info!(
        rows = profile.rows,
        columns = profile.columns.len(),
        "profiled file"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        let style = if args.markdown {
            TableStyle::Markdown
        } else {
            TableStyle::Rich
        };
        println!("{}", profile_table(&profile, style));
    }
    Ok(())
}

pub fn run_patterns() -> Result<()> {
    let catalog = PatternCatalog::builtin();
    println!("{}", patterns_table(&catalog, TableStyle::Rich));
    println!(
        "{} patterns ({} fixed, {} date)",
        catalog.len(),
        catalog.names_of(PatternKind::Fixed).count(),
        catalog.date_pattern_count()
    );
    Ok(())
}

fn resolve(config: &Config, overrides: &Overrides) -> Result<Settings> {
    config.resolve(overrides).context("resolve settings")
}

fn load(path: &Path) -> Result<String> {
    read_text(path).with_context(|| format!("read {}", path.display()))
}
