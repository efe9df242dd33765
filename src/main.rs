//! Flappy Sim entry point
//!
//! Loads settings and textures, then runs the game loop. No display backend is
//! bundled: the native build drives the simulation through the headless window
//! (autopilot or idle) and reports frames through the log renderer.

use std::path::PathBuf;
use std::process::ExitCode;

use flappy_sim::platform::{BootError, HeadlessAssets, HeadlessWindow, TextureSlot, Textures};
use flappy_sim::renderer::LogRenderer;
use flappy_sim::{Settings, Simulation, run};

fn boot() -> Result<(), BootError> {
    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref())?;

    let mut assets = HeadlessAssets::new(settings.virtual_assets);
    let textures = Textures::load(&mut assets, &settings.asset_dir)?;
    for slot in TextureSlot::ALL {
        log::debug!("{:?} -> {:?}", slot, textures.handle(slot));
    }

    let mut window = HeadlessWindow::new(settings.frame_rate, settings.run_seconds);
    if settings.autopilot {
        window = window.with_autopilot();
    }

    let mut renderer = LogRenderer::new();
    let mut sim = Simulation::from_settings(&settings);
    log::info!(
        "Running headless for {:.1}s at {} fps (autopilot: {})",
        settings.run_seconds,
        settings.frame_rate,
        settings.autopilot
    );

    let summary = run(&mut window, &mut renderer, &mut sim);
    println!(
        "Flappy Sim: {} frames, {} restarts, best score {}",
        summary.frames, summary.rounds, summary.best_score
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Flappy Sim starting...");

    match boot() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("flappy-sim: {}", e);
            ExitCode::FAILURE
        }
    }
}
