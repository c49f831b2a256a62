use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use lloyd_kmeans::data::synthetic;
use lloyd_kmeans::report;
use lloyd_kmeans::{Clusterer, Config, EmptyClusterPolicy, Euclidean};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[clap(
    name = "lloyd-kmeans",
    about = "Cluster random 2D points with Lloyd's k-means"
)]
struct Cli {
    /// Number of clusters
    #[clap(long, short = 'k', default_value = "2")]
    clusters: usize,

    /// Number of random points to generate
    #[clap(long, default_value = "100")]
    samples: usize,

    /// Horizontal extent of the sampling area
    #[clap(long, default_value = "64.0")]
    width: f64,

    /// Vertical extent of the sampling area
    #[clap(long, default_value = "100.0")]
    height: f64,

    /// Maximum centroid movement for a cluster to count as settled
    #[clap(long, default_value = "0.2")]
    threshold: f64,

    /// Stop after this many iterations even if not converged
    #[clap(long)]
    max_iterations: Option<usize>,

    /// Keep the previous centroid of an empty cluster instead of failing
    #[clap(long)]
    keep_empty: bool,

    /// Seed for point generation and centroid initialization
    #[clap(long)]
    seed: Option<u64>,

    /// Output format
    #[clap(long, value_enum, default_value = "text")]
    format: Format,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let mut config = Config::new(args.clusters).with_convergence_threshold(args.threshold);
    if let Some(max) = args.max_iterations {
        config = config.with_max_iterations(max);
    }
    if args.keep_empty {
        config = config.with_empty_cluster_policy(EmptyClusterPolicy::KeepCentroid);
    }

    // One generator feeds both the sampler and initialization
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // 1. Generate data
    let points = synthetic::uniform(args.samples, args.width, args.height, &mut rng)?;
    log::info!("Generated {} points", points.len());

    // 2. Cluster
    let clusterer = Clusterer::new(config, Euclidean);
    let result = clusterer.run_with_rng(&points, &mut rng)?;

    // 3. Print results
    let rendered = match args.format {
        Format::Text => report::render_text(&result)?,
        Format::Json => report::render_json(&result, clusterer.metric())?,
    };
    print!("{}", rendered);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_sampler() {
        let args = Cli::parse_from(["lloyd-kmeans"]);
        assert_eq!(args.clusters, 2);
        assert_eq!(args.samples, 100);
        assert_eq!(args.width, 64.0);
        assert_eq!(args.height, 100.0);
        assert_eq!(args.threshold, 0.2);
        assert_eq!(args.format, Format::Text);
    }

    #[test]
    fn parses_run_flags() {
        let args = Cli::parse_from(["lloyd-kmeans", "-k", "3", "--max-iterations", "7", "--keep-empty", "--format", "json"]);
        assert_eq!(args.clusters, 3);
        assert_eq!(args.max_iterations, Some(7));
        assert!(args.keep_empty);
        assert_eq!(args.format, Format::Json);
    }
}
