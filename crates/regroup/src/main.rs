use std::path::PathBuf;

use clap::Parser;
use regroup::{die, report, Config, Vec3};

/// Determine the angles between the crystal facets and the electric
/// field vector.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
struct Args {
    /// Precognition .inp or DIALS .expt geometry files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Parent space-group number (1-230).
    #[arg(short, long)]
    spacegroup: u16,

    /// Maximal Miller index to include in a facet. Defaults to 1.
    #[arg(long, default_value_t = 1)]
    hmax: i32,

    /// EF vector in the lab frame. Defaults to 0 -1 0.
    #[arg(
        short,
        long,
        num_args = 3,
        allow_negative_numbers = true,
        value_names = ["EFX", "EFY", "EFZ"],
        default_values_t = [0.0, -1.0, 0.0]
    )]
    efvector: Vec<f64>,

    /// Also write the results table to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Set the maximum number of threads to use. Defaults to 0, which
    /// means to use as many threads as there are CPUS.
    #[arg(short, long, default_value_t = 0)]
    threads: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
    {
        die!("failed to configure thread pool with {e}");
    }
    let config = Config {
        inputs: args.inputs,
        spacegroup: args.spacegroup,
        hmax: args.hmax,
        efvector: Vec3::new(
            args.efvector[0],
            args.efvector[1],
            args.efvector[2],
        ),
    };
    let summaries = match regroup::run(&config) {
        Ok(s) => s,
        Err(e) => die!("{e}"),
    };
    let table = report::render(&summaries);
    print!("{table}");
    if let Some(path) = &args.output {
        if let Err(e) = std::fs::write(path, &table) {
            die!("failed to write {} with {e}", path.display());
        }
    }
}
