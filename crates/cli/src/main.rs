use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use filters::filters::{failed_last_review, leech_training};
use filters::{
    srs, EvaluationContext, FilterDescriptor, FilterRegistry, FilterSettings, ItemFilter,
};
use item_data::{Axis, Item, ItemCollection, ItemId};
use std::path::{Path, PathBuf};

/// wk-filters - WaniKani item filters
#[derive(Parser)]
#[command(name = "wk-filters")]
#[command(about = "Filter WaniKani items by lesson recency, leech score and review timing", long_about = None)]
struct Cli {
    /// JSON file enabling/disabling individual filters
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered filters
    List,

    /// Run filters over an item export
    Apply {
        /// Item export (JSON array, or object with a `data` array)
        #[arg(long)]
        items: PathBuf,

        /// Filter to apply as NAME or NAME=VALUE; repeat to chain filters
        #[arg(short, long = "filter")]
        filters: Vec<String>,

        /// Evaluate as of this RFC 3339 time instead of now
        #[arg(long, value_parser = parse_timestamp)]
        now: Option<DateTime<Utc>>,

        /// Print matching items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the values the filters compute for one item
    Inspect {
        /// Item export (JSON array, or object with a `data` array)
        #[arg(long)]
        items: PathBuf,

        /// Subject id to inspect
        #[arg(long)]
        id: ItemId,

        /// Evaluate as of this RFC 3339 time instead of now
        #[arg(long, value_parser = parse_timestamp)]
        now: Option<DateTime<Utc>>,
    },
}

fn parse_timestamp(s: &str) -> std::result::Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp '{}': {}", s, e))
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => FilterSettings::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => FilterSettings::default(),
    };
    let registry = FilterRegistry::from_settings(&settings);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List => handle_list(&registry),
        Commands::Apply {
            items,
            filters,
            now,
            json,
        } => handle_apply(&registry, &items, &filters, now, json)?,
        Commands::Inspect { items, id, now } => handle_inspect(&registry, &items, id, now)?,
    }

    Ok(())
}

fn load_items(path: &Path) -> Result<ItemCollection> {
    ItemCollection::load_from_file(path)
        .with_context(|| format!("Failed to load item export from {}", path.display()))
}

fn context_for(now: Option<DateTime<Utc>>) -> EvaluationContext {
    now.map(EvaluationContext::at)
        .unwrap_or_else(EvaluationContext::prepare)
}

/// Handle the 'list' command
fn handle_list(registry: &FilterRegistry) {
    if registry.is_empty() {
        println!("No filters registered (all disabled in settings)");
        return;
    }
    println!("{}", "Registered filters:".bold().blue());
    for descriptor in registry.descriptors() {
        print_descriptor(descriptor);
    }
}

fn print_descriptor(descriptor: &FilterDescriptor) {
    println!(
        "\n{} ({}) [{}, default {}]",
        descriptor.name.green(),
        descriptor.label,
        descriptor.kind,
        descriptor.default_value
    );
    if let Some(placeholder) = descriptor.placeholder {
        println!("  placeholder: {}", placeholder);
    }
    for line in descriptor.hover_tip.lines() {
        println!("  {}", line.trim_start());
    }
}

/// Handle the 'apply' command
fn handle_apply(
    registry: &FilterRegistry,
    items_path: &Path,
    specs: &[String],
    now: Option<DateTime<Utc>>,
    json: bool,
) -> Result<()> {
    let pipeline = registry
        .build_pipeline(specs.iter().map(String::as_str))
        .context("Failed to build filters")?;
    if pipeline.is_empty() {
        tracing::warn!("No filters given; every item will be listed");
    }

    let collection = load_items(items_path)?;
    for field in pipeline.required_fields().missing_from(&collection.coverage()) {
        tracing::warn!(
            "Filters read `{}` but no item in {} has it; nothing will match",
            field,
            items_path.display()
        );
    }

    let total = collection.len();
    let context = context_for(now);
    let filtered = pipeline.apply(collection.into_items(), &context);

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{} of {} items matched [{}] as of {}",
            filtered.len(),
            total,
            pipeline.names().join(", "),
            context.now().to_rfc3339()
        )
        .bold()
        .blue()
    );
    for item in &filtered {
        print_item_line(item);
    }
    Ok(())
}

fn print_item_line(item: &Item) {
    let stage = item
        .srs_stage()
        .map(|s| format!("stage {}", s))
        .unwrap_or_else(|| "locked".to_string());
    println!(
        "{:>6}  {:<12} {:<10} {}",
        item.id.to_string().green(),
        item.characters().unwrap_or("(image)"),
        item.object.as_deref().unwrap_or("-"),
        stage
    );
}

/// Handle the 'inspect' command
fn handle_inspect(
    registry: &FilterRegistry,
    items_path: &Path,
    id: ItemId,
    now: Option<DateTime<Utc>>,
) -> Result<()> {
    let collection = load_items(items_path)?;
    let item = collection
        .get(id)
        .ok_or_else(|| anyhow!("Item {} not found", id))?;
    let context = context_for(now);

    println!(
        "{}",
        format!(
            "Item {}: {} ({})",
            item.id,
            item.characters().unwrap_or("(image)"),
            item.object.as_deref().unwrap_or("unknown type")
        )
        .bold()
        .blue()
    );
    println!("{}As of: {}", "• ".green(), context.now().to_rfc3339());

    match &item.assignments {
        Some(assignment) => {
            let accelerated = if srs::is_accelerated_level(assignment.level) {
                " (accelerated)"
            } else {
                ""
            };
            println!(
                "{}SRS stage {} on level {}{}",
                "• ".green(),
                assignment.srs_stage,
                assignment.level,
                accelerated
            );
            if let Some(started_at) = assignment.started_at {
                println!(
                    "{}Lesson taken {:.1}h ago",
                    "• ".green(),
                    context.hours_since(started_at)
                );
            }
            if let Some(interval) = srs::assignment_interval_hours(assignment) {
                println!("{}Interval: {}h", "• ".green(), interval);
            }
            if let Some(available_at) = assignment.available_at {
                let until = context.hours_until(available_at);
                let share = srs::assignment_interval_hours(assignment)
                    .filter(|&interval| interval > 0)
                    .map(|interval| format!(" ({:.0}% of interval)", until / interval as f64 * 100.0))
                    .unwrap_or_default();
                println!("{}Next review in {:.1}h{}", "• ".green(), until, share);
            }
            if let Some(last_review) = failed_last_review::last_review_at(assignment) {
                println!(
                    "{}Last review ~{:.1}h ago",
                    "• ".green(),
                    context.hours_since(last_review)
                );
            }
        }
        None => println!("{}No assignment (locked or not requested)", "• ".yellow()),
    }

    match &item.review_statistics {
        Some(stats) => {
            for axis in Axis::ALL {
                println!(
                    "{}{:?}: {} incorrect, streak {}, leech score {:.2}",
                    "• ".cyan(),
                    axis,
                    stats.incorrect(axis),
                    stats.current_streak(axis),
                    leech_training::axis_score(stats, axis)
                );
            }
            let failed = failed_last_review::failed_axes(stats);
            if !failed.is_empty() {
                println!("{}Missed last time on: {:?}", "• ".cyan(), failed);
            }
        }
        None => println!("{}No review statistics", "• ".yellow()),
    }

    println!("Filters at default values:");
    for descriptor in registry.descriptors() {
        let filter = descriptor.build(None)?;
        let verdict = if filter.matches(item, &context) {
            "included".green()
        } else {
            "excluded".red()
        };
        println!(
            "  - {} = {}: {}",
            descriptor.name, descriptor.default_value, verdict
        );
    }
    Ok(())
}
