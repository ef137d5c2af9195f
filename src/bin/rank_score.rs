//! Rank a personal test result against the pooled regional results
//!
//! Usage: rank_score <event_key> <gender> [score]
//!   e.g. rank_score standing_long_jump 남 245
//!        DATA_DIR=/srv/fitness rank_score 10m_dash female 8.3
//!
//! Prints the analysis as JSON. Configuration comes from the environment
//! (see `AppConfig`); logging honours `RUST_LOG`.

use anyhow::{bail, Context};
use fitness_ranker::{AppConfig, EventKey, FitnessScorer, Gender};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitness_ranker=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 3 {
        let events: Vec<&str> = EventKey::ALL.iter().map(|e| e.key()).collect();
        eprintln!("Usage: rank_score <event_key> <gender> [score]");
        eprintln!("  events: {}", events.join(", "));
        eprintln!("  gender: 남 | 여 | male | female");
        bail!("expected 2 or 3 arguments, got {}", args.len());
    }

    let event: EventKey = args[0].parse()?;
    let gender: Gender = args[1].parse()?;
    let score = args
        .get(2)
        .map(|raw| raw.parse::<f64>().with_context(|| format!("Invalid score '{}'", raw)))
        .transpose()?;

    let config = AppConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  DATA_DIR: {:?}", config.data_dir);
    tracing::info!("  BIN_COUNT: {}", config.bin_count);
    tracing::info!("  REMOVE_OUTLIERS: {}", config.remove_outliers);

    let scorer = FitnessScorer::new(&config);
    let analysis = scorer.analyze(event, gender, score)?;

    if !analysis.has_data() {
        println!(
            "No {} data for {} ({})",
            gender.label(),
            event.display_name(),
            event.key()
        );
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
