use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, process, thread};

use clap::Parser;
use forest_sim_core::{point_to_index, CellState, ForestSimulation, SimulationConfig};
use tracing::debug;

/// Forest fire simulation demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "forest-sim-demo")]
#[command(about = "Headless forest fire cellular automaton demo", long_about = None)]
struct Args {
    /// Number of simulation steps to run
    #[arg(short, long, default_value_t = 50)]
    steps: u64,

    /// Forest width in cells (overrides the config file)
    #[arg(long)]
    width: Option<usize>,

    /// Forest height in cells (overrides the config file)
    #[arg(long)]
    height: Option<usize>,

    /// Regrowth probability in percent (0-100)
    #[arg(short, long)]
    regrowth: Option<u8>,

    /// Lightning probability in percent (0-100)
    #[arg(short, long)]
    lightning: Option<u8>,

    /// Step interval in milliseconds (100-5000)
    #[arg(short = 'i', long)]
    interval_ms: Option<u64>,

    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Ignition point on the virtual view, x as a fraction of the width
    #[arg(long, default_value_t = 0.5)]
    ignite_x: f32,

    /// Ignition point on the virtual view, y as a fraction of the height
    #[arg(long, default_value_t = 0.5)]
    ignite_y: f32,

    /// Print a statistics row every N steps (0 = only the summary)
    #[arg(long, default_value_t = 5)]
    report_every: u64,

    /// Render the final grid as ASCII
    #[arg(long)]
    render: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load config {}: {err}", path.display());
                process::exit(1);
            }
        },
        None => SimulationConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(regrowth) = args.regrowth {
        config.regrowth_probability = regrowth;
    }
    if let Some(lightning) = args.lightning {
        config.lightning_probability = lightning;
    }
    if let Some(interval_ms) = args.interval_ms {
        config.step_interval_ms = interval_ms;
    }

    let sim = match args.seed {
        Some(seed) => ForestSimulation::with_seed(&config, seed),
        None => ForestSimulation::new(&config),
    };
    let sim = match sim {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("Failed to create simulation: {err}");
            process::exit(1);
        }
    };
    sim.on_state_changed(|event| debug!(?event, "State changed"));

    let (width, height) = sim.dimensions();
    println!("=== Forest Fire Simulation Demo ===\n");
    println!(
        "Forest: {}x{} cells, regrowth {}%, lightning {}%, interval {}ms",
        width,
        height,
        sim.regrowth_probability(),
        sim.lightning_probability(),
        sim.step_interval_ms()
    );

    // Ignite through the same pointer mapping a UI click would use, against a
    // virtual 600x600 view of the forest.
    let view_size = 600.0;
    match point_to_index(
        args.ignite_x * view_size,
        args.ignite_y * view_size,
        view_size,
        view_size,
        width,
        height,
    ) {
        Some(index) => {
            if sim.ignite(index) {
                println!("Fire started at cell {index}");
            } else {
                println!("No tree at cell {index}, nothing ignited");
            }
        }
        None => println!(
            "Ignition point ({:.2}, {:.2}) lies outside the forest",
            args.ignite_x, args.ignite_y
        ),
    }

    println!("\n Step | Trees | Burning | Empty");
    println!("------|-------|---------|------");

    // The scheduler loop lives here, not in the engine: tick at the
    // configured cadence while the running flag holds.
    let interval = Duration::from_millis(sim.step_interval_ms());
    sim.start();
    while sim.is_running() && sim.step_count() < args.steps {
        sim.tick();

        let stats = sim.stats();
        if args.report_every > 0 && sim.step_count() % args.report_every == 0 {
            println!(
                "{:5} | {:5} | {:7} | {:5}",
                sim.step_count(),
                stats.trees,
                stats.burning,
                stats.empty
            );
        }

        let still_active = stats.burning > 0
            || sim.lightning_probability() > 0
            || (sim.regrowth_probability() > 0 && stats.empty > 0);
        if !still_active {
            println!("Forest reached a fixed point, stopping early");
            break;
        }

        thread::sleep(interval);
    }
    sim.stop();

    let stats = sim.stats();
    println!("\n=== Simulation Complete ===");
    println!("Steps run: {}", sim.step_count());
    println!(
        "Trees: {} | Burning: {} | Empty: {}",
        stats.trees, stats.burning, stats.empty
    );

    if args.render {
        println!();
        render_grid(&sim);
    }
}

fn load_config(path: &Path) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn render_grid(sim: &ForestSimulation) {
    let (width, _) = sim.dimensions();
    for (index, cell) in sim.snapshot().iter().enumerate() {
        let glyph = match cell {
            CellState::Empty => '.',
            CellState::Tree => 'T',
            CellState::Burning => '#',
        };
        print!("{glyph}");
        if (index + 1) % width == 0 {
            println!();
        }
    }
}
