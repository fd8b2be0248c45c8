use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use stylesim::{Catalog, Normalizer, RecommenderConfig, Recommender, StopWords};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Recommend fashion products with similar descriptions
#[derive(Parser, Debug)]
#[command(name = "stylesim")]
#[command(about = "Content-based fashion product recommendations", long_about = None)]
struct Args {
    /// Path to the product CSV file
    #[arg(short, long, default_value = "product_fashion.csv")]
    data: PathBuf,

    /// Stop-word list, one word per line (defaults to the built-in English list)
    #[arg(long)]
    stop_words: Option<PathBuf>,

    /// JSON recommender config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List distinct product names
    Products,

    /// Recommend products similar to the given product name
    Recommend {
        /// Selected product name
        name: String,

        /// Number of recommendations
        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        /// Print the explained response as JSON
        #[arg(long)]
        json: bool,

        /// Prune candidates through the inverted token index
        #[arg(long)]
        indexed: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting stylesim v{}", env!("CARGO_PKG_VERSION"));

    let stop_words = match &args.stop_words {
        Some(path) => StopWords::from_file(path)
            .with_context(|| format!("loading stop words from {}", path.display()))?,
        None => StopWords::english(),
    };
    let normalizer = Normalizer::new(stop_words);

    let mut config = match &args.config {
        Some(path) => RecommenderConfig::from_file(path)?,
        None => RecommenderConfig::default(),
    };

    let catalog = Catalog::from_path(&args.data, &normalizer)
        .with_context(|| format!("loading catalog from {}", args.data.display()))?;

    match args.command {
        Command::Products => {
            for name in catalog.product_names() {
                println!("{name}");
            }
        }
        Command::Recommend { name, top_n, json, indexed } => {
            config.use_index |= indexed;
            let top_n = top_n.unwrap_or(config.default_top_n);
            if catalog.find_by_name(&name).is_none() {
                warn!(name = %name, "selected name is not in the catalog, ranking it as free text");
            }
            let recommender = Recommender::new(Arc::new(catalog)).with_config(config)?;

            let response = recommender.recommend_explained(&name, top_n)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("Recommended products for {:?}:", response.query);
                println!("{:>4}  {:>6}  {:<12}  {:<7}  {:<12}  {}", "#", "score", "id", "gender", "color", "name");
                for (rank, item) in response.result.iter().enumerate() {
                    println!(
                        "{:>4}  {:>6.3}  {:<12}  {:<7}  {:<12}  {} ({})",
                        rank + 1,
                        item.score,
                        item.id,
                        item.gender.as_str(),
                        item.primary_color,
                        item.name,
                        item.brand,
                    );
                }
            }
        }
    }

    Ok(())
}
