// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `cover`: compute, save and inspect covering designs.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use covering_design::config::Config;
use covering_design::engine::exact;
use covering_design::problem::{Parameters, Universe};
use covering_design::runner::{submit, Algorithm, SelectionRequest};
use covering_design::store::ResultStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cover")]
#[command(about = "Find small sets of k-groups covering every j-group", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory of saved results (overrides config and COVER_RESULTS_DIR)
    #[arg(long, global = true)]
    results_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log only warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a selection
    Run(RunArgs),
    /// List saved results
    List,
    /// Print a saved result
    Show { name: String },
    /// Delete a saved result
    Delete { name: String },
}

#[derive(Args)]
struct RunArgs {
    /// Size of the alphabet random samples are drawn from
    #[arg(short, long, default_value_t = 45)]
    m: usize,

    /// Number of samples
    #[arg(short, long)]
    n: usize,

    /// Size of each selected group
    #[arg(short, long)]
    k: usize,

    /// Size of the groups that must be covered
    #[arg(short, long)]
    j: usize,

    /// Size of the subgroup a selected group must contain
    #[arg(short, long)]
    s: usize,

    /// Selected groups required per j-group
    #[arg(short, long, default_value_t = 1)]
    coverage: usize,

    /// Comma separated sample labels (default: A, B, C, ...)
    #[arg(long, conflicts_with = "random")]
    samples: Option<String>,

    /// Draw the samples at random from 01..=m
    #[arg(long)]
    random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    #[arg(short, long, value_enum, default_value_t = Algorithm::Greedy)]
    algorithm: Algorithm,

    /// Save the result when every j-group is covered
    #[arg(long)]
    save: bool,
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn universe_for(args: &RunArgs) -> Result<Universe> {
    let universe = if args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Universe::random(args.m, args.n, &mut rng)?
    } else if let Some(samples) = &args.samples {
        Universe::parse(samples)?
    } else {
        Universe::lettered(args.n)?
    };
    if universe.len() != args.n {
        bail!("expected {} samples, got {}", args.n, universe.len());
    }
    Ok(universe)
}

async fn run(args: RunArgs, config: &Config, store: &ResultStore) -> Result<()> {
    let params = Parameters::new(args.m, args.n, args.k, args.j, args.s, args.coverage);
    config.bounds.check(&params)?;
    let universe = universe_for(&args)?;

    println!("Running with parameters: {}", params);
    println!("Samples: {}", universe);
    if args.algorithm == Algorithm::Exact && exact::is_slow_model(&params) {
        log::warn!(
            "Exact selection over C({}, {}) k-groups may take minutes; try --algorithm greedy",
            params.n,
            params.k
        );
    }

    let request = SelectionRequest::new(universe, params, args.algorithm).with_solver(config.solver);
    let report = submit(request).join().await?;

    println!("\nOutcome ({}): {}", report.algorithm, report.outcome);
    if let Some(listing) = report.listing() {
        print!("{}", listing);
        println!("\nTotal groups: {}", listing.len());
    }
    println!("Calculation time: {:?}", report.elapsed);

    if args.save {
        let run_index = store.next_run_index()?;
        match report.to_record(run_index) {
            Some(record) => {
                let path = store.save(&record)?;
                println!("Saved to {}", path.display());
            }
            None => log::warn!("Not saving: the run did not cover every j-group"),
        }
    }
    Ok(())
}

fn show(store: &ResultStore, name: &str) -> Result<()> {
    let record = store
        .load(name)
        .with_context(|| format!("loading {}", name))?;
    println!("--- {} ---", name);
    let p = record.parameters;
    println!(
        "Parameters: m={}, n={}, k={}, j={}, s={}, coverage={}",
        p.m, p.n, p.k, p.j, p.s, p.coverage
    );
    println!("Run index: {}", record.run_index);
    for (i, group) in record.selected_k_groups.iter().enumerate() {
        println!("  {}. {}", i + 1, group.join(","));
    }
    println!("Total groups: {}", record.group_count());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.results_dir {
        config.results_dir = dir.clone();
    }
    let store = ResultStore::new(&config.results_dir);

    match cli.command {
        Commands::Run(args) => run(args, &config, &store).await?,
        Commands::List => {
            for name in store.list()? {
                println!("{}", name);
            }
        }
        Commands::Show { name } => show(&store, &name)?,
        Commands::Delete { name } => {
            store.delete(&name)?;
            println!("Deleted {}", name);
        }
    }
    Ok(())
}
