use nbsim::{build_simulator, write_json, ScenarioConfig};
use nbsim::{bench_forces, bench_step_curve};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "example.json")]
    file_name: String,

    /// Where to write the trajectory JSON
    #[arg(short, default_value = "trajectories.json")]
    output: PathBuf,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_json(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_json::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_step_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_json(&args.file_name)?;
    let mut sim = build_simulator(&scenario_cfg)?;

    println!(
        "{} bodies, {} pairs, total number of frames to compute: {}",
        sim.bodies().len(),
        sim.pair_count(),
        sim.step_count()
    );

    let trajectories = sim.run()?;
    write_json(&args.output, &trajectories)?;

    println!("wrote {} trajectories to {}", trajectories.len(), args.output.display());

    Ok(())
}
