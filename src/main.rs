//! Moodscope CLI
//!
//! Command-line interface for analyzing an exported mood journal:
//! - Full report
//! - Individual analyses (correlations, triggers, seasonal, weather, time of day)
//! - Config generation

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use moodscope::analytics::{
    self, CategoricalAggregate, CorrelationResult, MoodReport, MoodSummary, SeasonalPattern,
    TriggerInsight,
};
use moodscope::config::{generate_default_config, Config, LoggingConfig};
use moodscope::journal::load_journal;
use moodscope::observation::Observation;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "moodscope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mood journal analytics")]
#[command(long_about = "Moodscope analyzes an exported mood journal.\nFind what moves your mood.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every analysis
    Report {
        /// Journal file (.csv or .json)
        journal: PathBuf,
    },

    /// Correlation between mood and sleep, exercise and stress
    Correlations { journal: PathBuf },

    /// Mood on high vs low days for each trigger rule
    Triggers { journal: PathBuf },

    /// Monthly mood patterns
    Seasonal { journal: PathBuf },

    /// Average mood per weather label
    Weather { journal: PathBuf },

    /// Check-ins per time of day
    TimeOfDay { journal: PathBuf },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Discovery results are logged once the subscriber exists
    let (config, discovery) = match &cli.config {
        Some(path) => {
            let config = Config::load_with_env(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            (config, None)
        }
        None => {
            let discovery = Config::discover();
            (discovery.config.clone(), Some(discovery))
        }
    };

    init_logging(&config.logging);
    if let Some(discovery) = &discovery {
        discovery.log();
    }

    let analysis = &config.analysis;
    let format = cli.format;

    match cli.command {
        Commands::Report { journal } => {
            let observations = read_journal(&journal)?;
            let report = analytics::analyze(&observations, analysis);
            emit(format, &report, print_report)?;
        }

        Commands::Correlations { journal } => {
            let observations = read_journal(&journal)?;
            let results = analytics::correlate_all(&observations, &analysis.factors);
            emit(format, &results, |r| print_correlations(r))?;
        }

        Commands::Triggers { journal } => {
            let observations = read_journal(&journal)?;
            let insights = analytics::analyze_triggers(&observations, &analysis.triggers);
            emit(format, &insights, |i| print_triggers(i))?;
        }

        Commands::Seasonal { journal } => {
            let observations = read_journal(&journal)?;
            let patterns = analytics::aggregate_by_month(&observations);
            emit(format, &patterns, |p| print_seasonal(p))?;
        }

        Commands::Weather { journal } => {
            let observations = read_journal(&journal)?;
            let weather = analytics::aggregate_by_weather(&observations);
            emit(format, &weather, |w| print_categories("Weather", "Avg mood", w))?;
        }

        Commands::TimeOfDay { journal } => {
            let observations = read_journal(&journal)?;
            let buckets = analytics::aggregate_by_time_of_day(&observations);
            emit(format, &buckets, |b| print_categories("Time of day", "Check-ins", b))?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

/// Install the tracing subscriber; logs go to stderr
fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("moodscope={}", config.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn read_journal(path: &Path) -> anyhow::Result<Vec<Observation>> {
    let import = load_journal(path)
        .with_context(|| format!("failed to load journal {}", path.display()))?;

    if import.rows_failed > 0 {
        eprintln!("Skipped {} invalid rows:", import.rows_failed);
        for error in import.errors.iter().take(10) {
            eprintln!("  {}", error);
        }
    }

    Ok(import.observations)
}

fn emit<T, F>(format: OutputFormat, value: &T, print_table: F) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T),
{
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Table => print_table(value),
    }
    Ok(())
}

fn print_report(report: &MoodReport) {
    print_summary(&report.summary);
    println!();
    println!("Correlations");
    print_correlations(&report.correlations);
    println!();
    println!("Triggers");
    print_triggers(&report.triggers);
    println!();
    println!("Seasonal patterns");
    print_seasonal(&report.seasonal);
    println!();
    print_categories("Weather", "Avg mood", &report.weather);
    println!();
    print_categories("Time of day", "Check-ins", &report.time_of_day);
}

fn print_summary(summary: &MoodSummary) {
    println!("Entries: {}", summary.entries);
    if let (Some(first), Some(last)) = (summary.first_date, summary.last_date) {
        println!("Period: {} to {}", first, last);
    }
    if let Some(avg) = summary.average_mood {
        println!("Average mood: {:.1}", avg);
    }
    if let Some(trend) = summary.trend {
        println!("Trend: {:+.1}", trend);
    }
}

fn print_correlations(results: &[CorrelationResult]) {
    if results.is_empty() {
        println!("No data");
        return;
    }

    println!(
        "{:<18} {:>7} {:<10} {:<11} {:>10} {:>8}",
        "Factor", "r", "Impact", "Strength", "Confidence", "Samples"
    );
    println!("{}", "-".repeat(69));

    for r in results {
        println!(
            "{:<18} {:>7.2} {:<10} {:<11} {:>10.1} {:>8}",
            r.factor,
            r.correlation,
            r.impact.to_string(),
            r.strength().to_string(),
            r.confidence,
            r.sample_size
        );
    }
}

fn print_triggers(insights: &[TriggerInsight]) {
    if insights.is_empty() {
        println!("Not enough contrast between high and low days yet");
        return;
    }

    println!(
        "{:<28} {:>6} {:>8} {:>8} {:>8}",
        "Trigger", "Days", "Low", "High", "Change"
    );
    println!("{}", "-".repeat(62));

    for i in insights {
        println!(
            "{:<28} {:>6} {:>8.1} {:>8.1} {:>+8.1}",
            i.trigger_label, i.frequency, i.avg_mood_before, i.avg_mood_after, i.improvement
        );
    }

    println!();
    for i in insights {
        println!("- {}", i.recommendation);
    }
}

fn print_seasonal(patterns: &[SeasonalPattern]) {
    if patterns.is_empty() {
        println!("No data");
        return;
    }

    println!(
        "{:<10} {:>8} {:>9} {:>8}  {}",
        "Month", "Avg", "Variance", "Entries", "Common tags"
    );
    println!("{}", "-".repeat(60));

    for p in patterns {
        println!(
            "{:<10} {:>8.1} {:>9.1} {:>8}  {}",
            p.month,
            p.avg_mood,
            p.mood_variance,
            p.sample_count,
            p.common_tags.join(", ")
        );
        for rec in &p.recommendations {
            println!("{:<10} - {}", "", rec);
        }
    }
}

fn print_categories(title: &str, value_label: &str, aggregates: &[CategoricalAggregate]) {
    println!("{}", title);
    if aggregates.is_empty() {
        println!("No data");
        return;
    }

    println!("{:<16} {:>10} {:>8}", "Label", value_label, "Entries");
    println!("{}", "-".repeat(36));

    for a in aggregates {
        println!("{:<16} {:>10.1} {:>8}", a.label, a.value, a.sample_count);
    }
}
