use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use test_traces::config::{LogFormat, Settings};
use test_traces::log_messages::configuration;
use test_traces::{validate, Catalog, Suite, TraceEntry};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "test-traces")]
#[command(about = "List, locate and verify the bundled test traces")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries with their expected metadata
    List {
        /// Only list this suite (ctf or ftrace)
        #[arg(short, long)]
        suite: Option<Suite>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the location of one trace
    Resolve {
        /// Suite the trace belongs to (ctf or ftrace)
        suite: Suite,

        /// Trace id, e.g. KERNEL
        id: String,
    },
    /// Check that every trace in the bundle can be located
    Validate {
        /// Only validate this suite (ctf or ftrace)
        #[arg(short, long)]
        suite: Option<Suite>,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match settings.logging.format {
        LogFormat::Full => builder.init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

fn selected(suite: Option<Suite>) -> Vec<Suite> {
    suite.map_or_else(|| Suite::ALL.to_vec(), |suite| vec![suite])
}

fn metadata(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn print_table(suite: Suite, entries: &[&TraceEntry]) {
    let id_width = entries.iter().map(|e| e.id.len()).max().unwrap_or(0);
    let path_width = entries.iter().map(|e| e.path.len()).max().unwrap_or(0);

    println!("[{suite}]");
    for entry in entries {
        let mut notes = Vec::new();
        if entry.is_collection() {
            notes.push("collection");
        }
        if entry.is_deprecated() {
            notes.push("deprecated");
        }
        println!(
            "  {:<id_width$}  {:<path_width$}  {:>9} events  {:>3} s  {}",
            entry.id,
            entry.path,
            metadata(entry.event_count),
            metadata(entry.duration_secs),
            notes.join(", "),
        );
    }
}

fn run_list(settings: &Settings, suite: Option<Suite>, json: bool) -> Result<()> {
    for suite in selected(suite) {
        let catalog = Catalog::from_settings(suite, settings);
        let entries: Vec<_> = catalog.list_all().collect();
        if json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            print_table(suite, &entries);
        }
    }
    Ok(())
}

fn run_resolve(settings: &Settings, suite: Suite, id: &str) -> Result<()> {
    let catalog = Catalog::from_settings(suite, settings);
    let Some(entry) = catalog.get(id) else {
        return Err(test_traces::Error::unknown_trace(suite, id).into());
    };
    let handle = catalog.resolve(entry)?;
    println!("{handle}");
    Ok(())
}

fn run_validate(settings: &Settings, suite: Option<Suite>, json: bool) -> Result<()> {
    let reports: Vec<_> = selected(suite)
        .into_iter()
        .map(|suite| validate(&Catalog::from_settings(suite, settings)))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!(
                "{}: {}/{} traces resolved",
                report.suite,
                report.resolved(),
                report.checked
            );
            for missing in &report.missing {
                println!("  missing {} (expected at {})", missing.id, missing.expected_at);
            }
        }
    }

    let missing: usize = reports.iter().map(|r| r.missing.len()).sum();
    if missing > 0 {
        bail!("{missing} test trace(s) missing from the bundle");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::new()?;
    init_tracing(&settings);
    info!(root = %settings.resources.root, "{}", configuration::CONFIG_LOADED);

    match cli.command {
        Commands::List { suite, json } => run_list(&settings, suite, json),
        Commands::Resolve { suite, id } => run_resolve(&settings, suite, &id),
        Commands::Validate { suite, json } => run_validate(&settings, suite, json),
    }
}
