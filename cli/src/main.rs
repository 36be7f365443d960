//! Papergraph CLI: run citation queries over a corpus file
//!
//! Loads a JSON corpus into a fresh store, runs one query and prints the result.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use papergraph::{load_path, AuthorId, PaperId, PaperStore, StoreConfig};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "papergraph", version, about = "Citation graph queries")]
struct Cli {
    /// Corpus file (JSON array or JSON lines)
    #[arg(long, env = "PAPERGRAPH_CORPUS")]
    corpus: PathBuf,

    /// Store config file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Corpus statistics
    Stats,
    /// Show one paper
    Paper { id: u64 },
    /// Oldest paper reachable through references
    OldestInfluence { id: u64 },
    /// Papers influenced within a hop distance
    Influenced {
        id: u64,
        #[arg(allow_negative_numbers = true)]
        distance: i32,
    },
    /// Average citations per paper at a venue
    VenueImpact { venue: String },
    /// Most cited papers in a field
    TopCited { field: String, k: usize },
    /// Papers published between two years, inclusive
    Between {
        early: i32,
        late: i32,
    },
    /// Distinct authors at an institution publishing in a field
    Authors { institution: String, field: String },
    /// Citations per year of age for an author
    Histogram { author: u64 },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => StoreConfig::from_json_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => StoreConfig::default(),
    };

    let mut store = PaperStore::with_config(config);
    load_path(&cli.corpus, &mut store)
        .with_context(|| format!("loading corpus {}", cli.corpus.display()))?;

    let query = store.query();
    let format = &cli.format;

    match cli.command {
        Commands::Stats => {
            let stats = store.statistics();
            print_value(
                format,
                json!(stats),
                &[
                    ("papers", stats.papers.to_string()),
                    ("references", stats.references.to_string()),
                    ("dangling references", stats.dangling_references.to_string()),
                    ("venues", stats.distinct_venues.to_string()),
                    ("fields", stats.distinct_fields.to_string()),
                    ("authors", stats.distinct_authors.to_string()),
                ],
            )
        }
        Commands::Paper { id } => {
            let Some(paper) = store.find_paper(PaperId::new(id)) else {
                bail!("paper {} not found", id);
            };
            let authors: Vec<String> = paper
                .authors
                .iter()
                .map(|a| format!("{} ({})", a.name, a.org))
                .collect();
            print_value(
                format,
                json!(paper),
                &[
                    ("id", paper.id.as_u64().to_string()),
                    ("title", paper.title.clone()),
                    ("venue", paper.venue.clone()),
                    ("year", paper.year.to_string()),
                    ("authors", format!("{}: {}", paper.author_count(), authors.join(", "))),
                    ("fields", paper.fields.join(", ")),
                    ("references", paper.reference_count().to_string()),
                    ("citations", store.citation_count(paper.id).to_string()),
                ],
            )
        }
        Commands::OldestInfluence { id } => {
            let title = query.oldest_influence(PaperId::new(id));
            print_value(
                format,
                json!({ "oldest_influence": title }),
                &[("oldest influence", title.unwrap_or("None").to_string())],
            )
        }
        Commands::Influenced { id, distance } => {
            let count = query.influenced_count(PaperId::new(id), distance);
            print_value(
                format,
                json!({ "influenced": count }),
                &[("influenced", count.to_string())],
            )
        }
        Commands::VenueImpact { venue } => {
            let impact = query.venue_impact(&venue);
            print_value(
                format,
                json!({ "venue": venue, "impact_factor": impact }),
                &[("impact factor", format!("{:.3}", impact))],
            )
        }
        Commands::TopCited { field, k } => {
            let titles = query.top_cited_by_field(&field, k);
            print_list(format, "title", &titles)
        }
        Commands::Between { early, late } => {
            let count = query.count_between(early, late);
            print_value(format, json!({ "papers": count }), &[("papers", count.to_string())])
        }
        Commands::Authors { institution, field } => {
            let count = query.authors_with_field(&institution, &field);
            print_value(format, json!({ "authors": count }), &[("authors", count.to_string())])
        }
        Commands::Histogram { author } => {
            let histogram = query.citation_histogram(AuthorId::new(author));
            let current_year = store.config().resolve_current_year();
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&json!({
                        "current_year": current_year,
                        "histogram": histogram,
                    }))?);
                }
                OutputFormat::Table => {
                    let mut table = new_table(&["year", "citations"]);
                    for (age, citations) in histogram.iter().enumerate() {
                        table.add_row(vec![
                            (current_year - age as i32).to_string(),
                            citations.to_string(),
                        ]);
                    }
                    println!("{}", table);
                    println!("{} year(s)", histogram.len());
                }
            }
            Ok(())
        }
    }
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.to_vec());
    table
}

fn print_value(
    format: &OutputFormat,
    value: serde_json::Value,
    rows: &[(&str, String)],
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&value)?),
        OutputFormat::Table => {
            let mut table = new_table(&["key", "value"]);
            for (key, value) in rows {
                table.add_row(vec![key.to_string(), value.clone()]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn print_list(format: &OutputFormat, column: &str, items: &[&str]) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
        OutputFormat::Table => {
            if items.is_empty() {
                println!("(no results)");
                return Ok(());
            }
            let mut table = new_table(&["#", column]);
            for (rank, item) in items.iter().enumerate() {
                table.add_row(vec![(rank + 1).to_string(), item.to_string()]);
            }
            println!("{}", table);
            println!("{} row(s)", items.len());
        }
    }
    Ok(())
}
