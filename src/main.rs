use clap::Parser;
use pivotsort::prelude::*;
use tracing_subscriber::EnvFilter;

const DEMO_INPUT: [i32; 10] = [5, 2, 7, 10, 4, 8, 23, 14, 21, 1];

/// Sort integers in place with quicksort and print the result.
#[derive(Parser, Debug)]
#[command(name = "pivotsort", version, about)]
struct Cli {
    /// Values to sort. Defaults to a built-in demo array.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i32>,

    /// Pivot rule: last, first, median or random.
    #[arg(long, default_value_t = PivotRule::Last)]
    pivot: PivotRule,

    /// Seed for the random pivot rule.
    #[arg(long)]
    seed: Option<u64>,

    /// Print partition and comparison counters.
    #[arg(long)]
    stats: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut values = if cli.values.is_empty() {
        DEMO_INPUT.to_vec()
    } else {
        cli.values
    };

    let mut sorter = Sorter::new().pivot(cli.pivot);
    if let Some(seed) = cli.seed {
        sorter = sorter.seed(seed);
    }
    let stats = sorter.sort(&mut values);

    let rendered: String = values.iter().map(|v| format!("{v} ")).collect();
    println!("Sorted array: {rendered}");

    if cli.stats {
        println!("{stats}");
    }
}
