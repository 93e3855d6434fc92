//! Command implementations.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use telemap_ingest::{HeaderRowSpec, load_dictionary, load_header_set};
use telemap_match::{MatchEngine, MatchResult, ShorthandDictionary};
use telemap_model::Source;
use telemap_report::{HIGH_CONFIDENCE_FILE, MATCHES_FILE, write_matches};

use crate::cli::{LookupArgs, RunArgs};

/// Everything the summary printer needs about a finished run.
#[derive(Debug)]
pub struct RunOutcome {
    pub result: MatchResult,
    pub dictionary_entries: usize,
    pub dictionary_dropped: usize,
    pub written: Option<WrittenFiles>,
    pub top: usize,
}

/// Paths of the generated match tables.
#[derive(Debug)]
pub struct WrittenFiles {
    pub matches: PathBuf,
    pub high_confidence: PathBuf,
}

/// Loads all inputs, runs the three passes and writes the match tables.
pub fn run_match(args: &RunArgs) -> anyhow::Result<RunOutcome> {
    let dictionary = load_dictionary(&args.dictionary)?;
    let telemetry = load_header_set(
        &args.telemetry,
        Source::Telemetry,
        HeaderRowSpec::new(args.telemetry_header_row),
    )?;
    let sensor = load_header_set(
        &args.sensor,
        Source::Sensor,
        HeaderRowSpec::new(args.sensor_header_row),
    )?;

    let engine = MatchEngine::new(&dictionary);
    let result = engine.run(&telemetry, &sensor);
    info!(
        candidates = result.candidates().len(),
        telemetry = telemetry.len(),
        sensor = sensor.len(),
        "matching complete"
    );

    let written = if args.dry_run {
        None
    } else {
        Some(write_outputs(args, &result)?)
    };

    Ok(RunOutcome {
        result,
        dictionary_entries: dictionary.len(),
        dictionary_dropped: dictionary.dropped_rows(),
        written,
        top: args.top,
    })
}

fn write_outputs(args: &RunArgs, result: &MatchResult) -> anyhow::Result<WrittenFiles> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let matches = output_dir.join(MATCHES_FILE);
    write_matches(&matches, &result.sorted_by_confidence())?;
    let high_confidence = output_dir.join(HIGH_CONFIDENCE_FILE);
    write_matches(&high_confidence, &result.high_confidence())?;

    Ok(WrittenFiles {
        matches,
        high_confidence,
    })
}

/// Resolves each given name through the dictionary and prints the results.
pub fn run_lookup(args: &LookupArgs) -> anyhow::Result<()> {
    let dictionary = load_dictionary(&args.dictionary)?;
    print_lookups(&dictionary, &args.names);
    Ok(())
}

fn print_lookups(dictionary: &ShorthandDictionary, names: &[String]) {
    for name in names {
        let longhand = dictionary.lookup_longhand(name);
        if longhand == *name {
            println!("{name} -> (unresolved)");
        } else {
            println!("{name} -> {longhand}");
        }
    }
}
