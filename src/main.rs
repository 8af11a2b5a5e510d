//! Feedsynth - Synthetic Course Feedback Generator
//!
//! Entry point for generating comment pools and survey sets, matching
//! comments to surveys and auditing the result.

use clap::{Parser, Subcommand};
use feedsynth_core::{
    dataset::{self, SurveySet},
    error::{FeedsynthError, Result},
    generation::{CommentGenerator, CourseCatalog, SurveyGenerator},
    matching::{audit_uniqueness, CommentAllocator, CommentPool, ExhaustionPolicy},
    FeedsynthConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(name = "feedsynth")]
#[command(about = "Synthetic course feedback with coherent, unique comments", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Set log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// TOML configuration file (overrides FEEDSYNTH_CONFIG env var)
    #[arg(short, long, env = "FEEDSYNTH_CONFIG")]
    config: Option<PathBuf>,

    /// Random seed (overrides the configured seed)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a pool of unique comment templates
    Comments {
        /// Number of comments to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Output JSON file
        #[arg(short, long, default_value = "comments.json")]
        output: PathBuf,
    },

    /// Generate synthetic survey records
    Surveys {
        /// Number of surveys to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Output JSON file
        #[arg(short, long, default_value = "surveys.json")]
        output: PathBuf,
    },

    /// Attach a unique, coherent comment to every survey row
    Allocate {
        /// Survey JSON (generated records or bare rows)
        #[arg(short, long)]
        surveys: PathBuf,

        /// Comment pool JSON
        #[arg(short, long)]
        comments: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,

        /// What to do once no unused comment is left (leave_empty, reuse_best)
        #[arg(short, long)]
        policy: Option<String>,
    },

    /// Check that no comment text is assigned twice
    Verify {
        /// Annotated survey JSON
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn load_config(path: Option<&Path>) -> Result<FeedsynthConfig> {
    match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            Ok(FeedsynthConfig::from_file(path)?)
        }
        None => {
            debug!("No configuration file given, using defaults");
            Ok(FeedsynthConfig::default())
        }
    }
}

fn run_comments(config: &FeedsynthConfig, rng: &mut StdRng, output: &Path) -> Result<()> {
    let generator = CommentGenerator::new(config.comments.max_attempts_factor);
    let pool = generator.generate(config.comments.count, rng);
    dataset::save_json(output, &pool)?;
    info!("Wrote {} comments to {}", pool.len(), output.display());
    Ok(())
}

fn run_surveys(config: &FeedsynthConfig, rng: &mut StdRng, output: &Path) -> Result<()> {
    let generator = SurveyGenerator::new(config.surveys.clone(), CourseCatalog::default())?;
    let records = generator.generate(rng);
    let set = SurveySet::Records(records);
    set.save(output)?;
    info!("Wrote {} surveys to {}", set.len(), output.display());
    Ok(())
}

fn run_allocate(
    policy: ExhaustionPolicy,
    rng: &mut StdRng,
    surveys: &Path,
    comments: &Path,
    output: &Path,
) -> Result<()> {
    let mut set = SurveySet::load(surveys)?;
    let mut pool = CommentPool::new(dataset::load_comment_pool(comments)?);
    info!(
        "Loaded {} surveys and {} comments ({} distinct)",
        set.len(),
        pool.len(),
        pool.distinct_available()
    );

    let report = CommentAllocator::new(policy).allocate(set.rows_mut(), &mut pool, rng);

    if let (Some(mean), Some(min), Some(max)) =
        (report.mean_score(), report.min_score(), report.max_score())
    {
        info!("Score mean {:.2}, min {}, max {}", mean, min, max);
    }
    for (polarity, count) in report.polarity_distribution() {
        info!("  {}: {}", polarity, count);
    }

    set.save(output)?;
    info!("Wrote annotated surveys to {}", output.display());
    Ok(())
}

fn run_verify(input: &Path) -> Result<()> {
    let set = SurveySet::load(input)?;
    let audit = audit_uniqueness(set.rows());

    println!("Total rows:          {}", audit.total_rows);
    println!("Non-empty comments:  {}", audit.non_empty);
    println!("Unique comments:     {}", audit.unique);
    println!("Empty comments:      {}", audit.empty);
    if let Some(lengths) = audit.lengths {
        println!(
            "Length (chars):      mean {:.1}, min {}, max {}, median {:.1}",
            lengths.mean, lengths.min, lengths.max, lengths.median
        );
    }

    if audit.is_unique() {
        println!("All comments are unique");
        return Ok(());
    }

    for (text, count) in audit.duplicates.iter().take(10) {
        warn!("Repeated {} times: {}", count, text);
    }
    Err(FeedsynthError::Other(format!(
        "{} rows carry a duplicated comment",
        audit.duplicate_rows()
    )))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::new(format!(
        "feedsynth={level},feedsynth_core={level}",
        level = level.as_str().to_lowercase()
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Write logs to stderr, not stdout
        .init();

    debug!("Feedsynth v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    let mut rng = StdRng::seed_from_u64(config.seed);
    debug!("Using seed {}", config.seed);

    match cli.command {
        Commands::Comments { count, output } => {
            if let Some(count) = count {
                config.comments.count = count;
            }
            config.validate()?;
            run_comments(&config, &mut rng, &output)
        }
        Commands::Surveys { count, output } => {
            if let Some(count) = count {
                config.surveys.count = count;
            }
            config.validate()?;
            run_surveys(&config, &mut rng, &output)
        }
        Commands::Allocate {
            surveys,
            comments,
            output,
            policy,
        } => {
            let policy = match policy {
                Some(raw) => raw
                    .parse::<ExhaustionPolicy>()
                    .map_err(FeedsynthError::InvalidInput)?,
                None => config.allocation.exhaustion,
            };
            run_allocate(policy, &mut rng, &surveys, &comments, &output)
        }
        Commands::Verify { input } => run_verify(&input),
    }
}
