use grating_synth::config::{default_samples, NM_PER_PIXEL};
use grating_synth::image::io::save_grayscale_u8;
use grating_synth::GratingSynthesizer;
use log::info;
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let output_dir = output_dir()?;
    info!("writing fixtures to {}", output_dir.display());

    println!("Generating synthetic AFM images...");

    let samples = default_samples();
    let mut rng = rand::rng();
    for sample in &samples {
        println!("Creating {}...", sample.description);

        let synth = GratingSynthesizer::new(sample.params()).map_err(|e| e.to_string())?;
        let grid = synth.synthesize(&mut rng);

        let path = output_dir.join(&sample.file_name);
        save_grayscale_u8(&grid, &path)?;
        println!("  Saved: {}", sample.file_name);
    }

    println!("\nDone! Generated {} test images.", samples.len());
    println!("\nTo use these images:");
    println!("1. Open the AFM pitch analysis tool");
    println!("2. Upload any of the generated PNG files");
    println!("3. Set scale to {NM_PER_PIXEL} nm/pixel");
    println!("4. The tool should detect the pitch close to the expected values");

    Ok(())
}

/// Directory holding the running executable.
fn output_dir() -> Result<PathBuf, String> {
    let exe = env::current_exe().map_err(|e| format!("Failed to locate executable: {e}"))?;
    exe.parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| format!("Executable {} has no parent directory", exe.display()))
}
