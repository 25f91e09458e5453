use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, ValueEnum};
use phrase_clip_rs::report::REPORT_SCHEMA_VERSION;
use phrase_clip_rs::{
    format_time, load_entries, load_words, CaptionStyleKind, ClipReport, LevenshteinScorer,
    MultiMetricScorer, Occurrence, QueryReport, ReportMeta, SearchConfig, SearchReport, Segment,
    SimilarityScorer, TranscriptSearcher, TranscriptSearcherBuilder, Word,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[path = "clip_search/caption_writer.rs"]
mod caption_writer;
#[path = "clip_search/report_writer.rs"]
mod report_writer;

const REPORT_FILE_NAME: &str = "search_report.json";
const CLIP_STEM: &str = "clip";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CaptionChoice {
    WordBox,
    DrawText,
    PhraseWindow,
    Highlight,
    None,
}

impl CaptionChoice {
    fn style_kind(self) -> Option<CaptionStyleKind> {
        match self {
            Self::WordBox => Some(CaptionStyleKind::WordBox),
            Self::DrawText => Some(CaptionStyleKind::DrawText),
            Self::PhraseWindow => Some(CaptionStyleKind::PhraseWindow),
            Self::Highlight => Some(CaptionStyleKind::Highlight),
            Self::None => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScorerChoice {
    MultiMetric,
    Levenshtein,
}

impl ScorerChoice {
    fn build(self) -> Box<dyn SimilarityScorer> {
        match self {
            Self::MultiMetric => Box::new(MultiMetricScorer),
            Self::Levenshtein => Box::new(LevenshteinScorer),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "clip_search")]
#[command(about = "Find spoken phrases in a word-timed transcript and plan captioned clips")]
struct Args {
    /// Word timeline: JSON word list or .srt file.
    #[arg(long, env = "PHRASE_CLIP_TRANSCRIPT")]
    transcript: PathBuf,
    /// Treat the JSON transcript as caption entries with entry-level timing.
    #[arg(long, env = "PHRASE_CLIP_ENTRIES", default_value_t = false)]
    entries: bool,
    #[arg(
        long,
        env = "PHRASE_CLIP_PHRASE",
        conflicts_with = "text",
        required_unless_present = "text"
    )]
    phrase: Option<String>,
    /// Passage to locate through its leading and trailing words.
    #[arg(long, env = "PHRASE_CLIP_TEXT")]
    text: Option<String>,
    #[arg(long, env = "PHRASE_CLIP_THRESHOLD")]
    threshold: Option<f64>,
    #[arg(long, env = "PHRASE_CLIP_WINDOW_SIZE")]
    window_size: Option<usize>,
    /// Maximum clip length in seconds; 0 disables clip output.
    #[arg(long, env = "PHRASE_CLIP_CLIP_DURATION")]
    clip_duration: Option<f64>,
    /// 1-based rank of the phrase match to clip.
    #[arg(long, env = "PHRASE_CLIP_SELECT", default_value_t = 1)]
    select: usize,
    #[arg(
        long,
        env = "PHRASE_CLIP_CAPTIONS",
        value_enum,
        default_value_t = CaptionChoice::PhraseWindow
    )]
    captions: CaptionChoice,
    #[arg(
        long,
        env = "PHRASE_CLIP_SCORER",
        value_enum,
        default_value_t = ScorerChoice::MultiMetric
    )]
    scorer: ScorerChoice,
    #[arg(long, env = "PHRASE_CLIP_CONFIG")]
    config: Option<PathBuf>,
    #[arg(long, env = "PHRASE_CLIP_OUT")]
    out: Option<PathBuf>,
}

/// What the query resolved to, before clip planning.
struct Resolved {
    query: QueryReport,
    occurrences: Vec<Occurrence>,
    segment: Option<Segment>,
    clip_range: Option<(f64, f64)>,
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        tracing::error!(error = %err, "clip search failed");
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phrase_clip_rs=info,clip_search=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<(), String> {
    let args = Args::parse();
    if args.select == 0 {
        return Err("--select is 1-based and must be >= 1.".to_string());
    }

    let config = resolve_config(&args)?;
    let searcher = TranscriptSearcherBuilder::new(config)
        .with_scorer(args.scorer.build())
        .build()
        .map_err(|err| format!("Invalid search configuration: {err}"))?;

    let words = if args.entries {
        load_entries(&args.transcript, searcher.config().timing_estimate)
    } else {
        load_words(&args.transcript)
    }
    .map_err(|err| format!("Failed to load '{}': {err}", args.transcript.display()))?;
    tracing::info!(
        transcript = %args.transcript.display(),
        words = words.len(),
        scorer = searcher.scorer_name(),
        "transcript loaded"
    );

    let resolved = resolve_query(&args, &searcher, &words)?;

    let clip_duration_s = searcher.config().clip_duration_s;
    let mut clip_report = None;
    if let Some((start_s, end_s)) = resolved.clip_range.filter(|_| clip_duration_s > 0.0) {
        let plan = searcher
            .plan_clip(&words, start_s, end_s)
            .map_err(|err| format!("Failed to plan clip: {err}"))?;
        let windows = searcher
            .caption_windows(&plan)
            .map_err(|err| format!("Failed to build caption windows: {err}"))?;
        let renderer = args.captions.style_kind().map(|kind| searcher.renderer(kind));

        println!(
            "clip: start={} duration={:.3}s words={} windows={}",
            format_time(plan.start_s),
            plan.duration_s,
            plan.words.len(),
            windows.len()
        );
        if let Some(out_dir) = &args.out {
            let artifacts = caption_writer::write_clip_artifacts(
                out_dir,
                CLIP_STEM,
                &plan,
                &windows,
                renderer.as_ref(),
            )?;
            println!("{}", artifacts.srt_path.display());
            if let Some(path) = artifacts.caption_path {
                println!("{}", path.display());
            }
        }
        clip_report = Some(ClipReport::new(
            &plan,
            &windows,
            renderer.as_ref().map(|r| r.kind().as_str()),
        ));
    }

    if let Some(out_dir) = &args.out {
        let report = SearchReport {
            schema_version: REPORT_SCHEMA_VERSION,
            meta: ReportMeta {
                generated_at: Utc::now().to_rfc3339(),
                transcript_path: args.transcript.display().to_string(),
                similarity_threshold: searcher.config().similarity_threshold,
                window_size: searcher.config().window_size,
                word_count: words.len(),
                scorer: searcher.scorer_name().to_string(),
                query: resolved.query,
            },
            occurrences: resolved.occurrences,
            segment: resolved.segment,
            clip: clip_report,
        };
        let report_path = out_dir.join(REPORT_FILE_NAME);
        report_writer::write_report(&report_path, &report)?;
        println!("{}", report_path.display());
    }

    Ok(())
}

fn resolve_config(args: &Args) -> Result<SearchConfig, String> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => SearchConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config.similarity_threshold = threshold;
    }
    if let Some(window_size) = args.window_size {
        config.window_size = window_size;
    }
    if let Some(clip_duration) = args.clip_duration {
        config.clip_duration_s = clip_duration;
    }
    Ok(config)
}

fn resolve_query(
    args: &Args,
    searcher: &TranscriptSearcher,
    words: &[Word],
) -> Result<Resolved, String> {
    if let Some(text) = &args.text {
        let found = searcher
            .find_segment_for_text(words, text)
            .map_err(|err| format!("Segment search failed: {err}"))?;
        match &found.segment {
            Some(segment) => println!(
                "segment: [{} - {}] score={:.1} {}",
                format_time(segment.start_s),
                format_time(segment.end_s),
                segment.score,
                segment.text
            ),
            None => println!(
                "no segment found between '{}' and '{}'",
                found.start_text, found.end_text
            ),
        }
        let clip_range = found.segment.as_ref().map(|s| (s.start_s, s.end_s));
        return Ok(Resolved {
            query: QueryReport::Segment {
                start_text: found.start_text,
                end_text: found.end_text,
            },
            occurrences: Vec::new(),
            segment: found.segment,
            clip_range,
        });
    }

    let phrase = args
        .phrase
        .as_deref()
        .ok_or_else(|| "Either --phrase or --text is required.".to_string())?;
    let found = searcher
        .find_phrase(words, phrase)
        .map_err(|err| format!("Phrase search failed: {err}"))?;
    if found.occurrences.is_empty() {
        println!("no matches for '{}'", found.query);
    }
    for (rank, occurrence) in found.occurrences.iter().enumerate() {
        println!(
            "{}. [{} - {}] score={:.1} {}",
            rank + 1,
            format_time(occurrence.start_s),
            format_time(occurrence.end_s),
            occurrence.score,
            occurrence.text
        );
    }

    let clip_range = match found.occurrences.get(args.select - 1) {
        Some(selected) => Some((selected.start_s, selected.end_s)),
        None if found.occurrences.is_empty() => None,
        None => {
            return Err(format!(
                "--select {} is out of range: only {} match(es) found.",
                args.select,
                found.occurrences.len()
            ))
        }
    };

    Ok(Resolved {
        query: QueryReport::Phrase {
            text: found.query,
            truncated: found.truncated,
        },
        occurrences: found.occurrences,
        segment: None,
        clip_range,
    })
}
