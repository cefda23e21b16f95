use grating_synth::config::demo::load_config;
use grating_synth::image::io::{save_grayscale_u8, write_json_file};
use grating_synth::GratingSynthesizer;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let synth = GratingSynthesizer::new(config.params).map_err(|e| e.to_string())?;
    let params = synth.params();
    info!(
        "rendering {0}x{0} grating pitch_px={1} noise={2}",
        params.size, params.pitch_px, params.noise_level
    );
    let mut rng = match config.seed {
        Some(seed) => {
            info!("using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let report = synth.synthesize_with_diagnostics(&mut rng);
    println!("{}", report.trace.summary());

    save_grayscale_u8(&report.image, &config.output.image)?;
    println!("\nImage written to {}", config.output.image.display());

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report.trace)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: grating_demo <config.json>".to_string()
}
