use std::path::PathBuf;

use buoyancy::water::WavePreset;
use clap::{Parser, ValueEnum};

mod hull;
mod init;
mod scenario;

use scenario::Scenario;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetArg {
    Still,
    Calm,
    Lake,
    Ocean,
    Storm,
}

impl From<PresetArg> for WavePreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Still => WavePreset::Still,
            PresetArg::Calm => WavePreset::Calm,
            PresetArg::Lake => WavePreset::Lake,
            PresetArg::Ocean => WavePreset::Ocean,
            PresetArg::Storm => WavePreset::Storm,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// RON file describing the hull and the water
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Overrides the scenario's wave preset
    #[arg(short, long, value_enum)]
    preset: Option<PresetArg>,

    /// Overrides the scenario's fluid density (kg/m³)
    #[arg(short, long)]
    density: Option<f32>,

    /// Number of fixed physics steps to simulate before exiting
    #[arg(short, long, default_value_t = 600)]
    ticks: u32,
}

fn main() {
    let args = Args::parse();

    let mut scenario = match args.scenario.as_deref() {
        Some(path) => match scenario::load_scenario(path) {
            Ok(scenario) => scenario,
            Err(err) => {
                eprintln!("Error: could not load scenario {}: {err}", path.display());
                std::process::exit(1);
            }
        },
        None => Scenario::default(),
    };

    if let Some(preset) = args.preset {
        scenario.preset = preset.into();
    }
    if let Some(density) = args.density {
        scenario.fluid_density = density;
    }

    if let Err(err) = scenario.validate() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    init::init(scenario, args.ticks);
}
