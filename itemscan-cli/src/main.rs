// ItemScan command line interface
// Classify objects in photos and manage the catalog of saved items

mod output;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use itemscan_catalog::{
    normalize_spoken_query, seed_sample_data, CatalogStore, JsonFileCatalog, RecordDraft,
};
use itemscan_core::{CanonicalLocalizer, ItemScanConfig, LoggingConfig};
use itemscan_eye::{DetectionPipeline, FixedDetector, FrameSource, ImageFileSource};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "itemscan")]
#[command(about = "Recognise everyday objects and their colors, and keep a searchable list of them", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (JSON, TOML or YAML)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the main object in an image
    Classify {
        /// Image file to analyse
        image: PathBuf,

        /// JSON array of detector outputs for this image
        #[arg(long, short)]
        detections: Option<PathBuf>,

        /// Treat the image as a handheld camera capture
        #[arg(long)]
        live: bool,

        /// Save the result to the catalog
        #[arg(long)]
        save: bool,

        /// Category for the saved item
        #[arg(long, default_value = "other")]
        category: String,

        /// Description for the saved item
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Search saved items, e.g. `itemscan search I want to find a cup`
    Search {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// List saved items
    List,

    /// Delete a saved item
    Delete { id: Uuid },

    /// Add the sample items to an empty catalog
    Seed,

    /// Remove every saved item
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging, cli.verbose);
    debug!("Configuration: {:?}", config);

    match cli.command {
        Commands::Classify {
            image,
            detections,
            live,
            save,
            category,
            description,
        } => {
            classify(
                &config,
                &image,
                detections.as_deref(),
                live,
                save.then_some((category, description)),
                cli.json,
            )
            .await?;
        }
        Commands::Search { words } => {
            let catalog = open_catalog(&config)?;
            let query = normalize_spoken_query(&words.join(" "));
            info!("Searching for {:?}", query);
            let results = catalog.search(&query)?;
            print_records(&results, cli.json)?;
        }
        Commands::List => {
            let catalog = open_catalog(&config)?;
            print_records(&catalog.all()?, cli.json)?;
        }
        Commands::Delete { id } => {
            let catalog = open_catalog(&config)?;
            if !catalog.delete(id)? {
                bail!("No item with id {}", id);
            }
            println!("✅ Item deleted");
        }
        Commands::Seed => {
            let catalog = JsonFileCatalog::open(&config.catalog.path)?;
            let added = seed_sample_data(&catalog)?;
            if added == 0 {
                println!("Catalog already has items, nothing added");
            } else {
                println!("✅ Added {} sample items", added);
            }
        }
        Commands::Clear => {
            let catalog = JsonFileCatalog::open(&config.catalog.path)?;
            catalog.clear()?;
            println!("✅ All items cleared");
        }
    }

    Ok(())
}

/// File settings (or defaults), then `ITEMSCAN_*` overrides, then validation
fn load_config(path: Option<&Path>) -> anyhow::Result<ItemScanConfig> {
    let mut config = match path {
        Some(path) => ItemScanConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ItemScanConfig::default(),
    };
    config.apply_env(|key| std::env::var(key).ok());
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn open_catalog(config: &ItemScanConfig) -> anyhow::Result<JsonFileCatalog> {
    let catalog = JsonFileCatalog::open(&config.catalog.path)
        .with_context(|| format!("Failed to open catalog {}", config.catalog.path.display()))?;
    if config.catalog.seed_sample_data {
        seed_sample_data(&catalog)?;
    }
    Ok(catalog)
}

async fn classify(
    config: &ItemScanConfig,
    image: &Path,
    detections: Option<&Path>,
    live: bool,
    save_as: Option<(String, String)>,
    json: bool,
) -> anyhow::Result<()> {
    let mut source = ImageFileSource::new(image);
    if live {
        source = source.as_live_capture();
    }
    let bitmap = source.capture_frame()?;

    let detector = match detections {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read detections from {}", path.display()))?;
            FixedDetector::from_json(&text)?
        }
        None => {
            info!("No detections supplied, using the household demo layout");
            FixedDetector::household_demo(bitmap.width(), bitmap.height())
        }
    };

    let pipeline = DetectionPipeline::with_config(config.pipeline.clone());
    let result = pipeline
        .detect_and_classify(&detector, &bitmap, source.is_live())
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_result(
            &result,
            &CanonicalLocalizer,
            config.pipeline.low_confidence_threshold,
        );
    }

    if let Some((category, description)) = save_as {
        let draft = RecordDraft::from_detection(&result, category, description)?;
        let record = open_catalog(config)?.save(draft)?;
        println!("✅ Saved as {}", record.id);
    }

    Ok(())
}

fn print_records(records: &[itemscan_catalog::CatalogRecord], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else {
        output::print_records(records);
    }
    Ok(())
}
