use ballsim::{Scenario, ScenarioConfig};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "balls.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let scenario_cfg = load_scenario_from_yaml()?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    let t_end = scenario.parameters.t_end;
    let h0 = scenario.parameters.h0;

    // Headless fixed-step run: one step per frame until t_end
    let mut frames = 0usize;
    while scenario.engine.system.t < t_end {
        scenario.engine.step(h0);
        frames += 1;
    }

    println!("simulated {} frames to t = {:.3}", frames, scenario.engine.system.t);
    for (i, body) in scenario.engine.bodies().iter().enumerate() {
        println!(
            "body {i}: x = ({:8.3}, {:8.3})  v = ({:8.3}, {:8.3})  r = {}",
            body.x.x, body.x.y, body.v.x, body.v.y, body.radius
        );
    }

    //bench_broadphase();
    //bench_step_curve();

    Ok(())
}
