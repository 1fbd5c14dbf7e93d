use std::time::{Duration, Instant};

use particle_swarm::{initialize, tick, PointVertex, SimulationParameters};

/// Nominal display rate the simulation is tuned for
const FRAME_RATE: f64 = 60.0;
/// Frames simulated before the runner exits
const FRAMES: u64 = 1800;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let params = SimulationParameters::load()?;
    let mut state = initialize(&params);
    let mut vertices: Vec<PointVertex> = state.point_cloud();

    let dt = 1.0 / FRAME_RATE;
    let started = Instant::now();
    let mut last_report = Instant::now();
    let mut refreshes = state.clock().refreshes();

    for frame in 0..FRAMES {
        tick(&mut state, &params, dt);
        state.update_positions(&mut vertices);

        if state.clock().refreshes() != refreshes {
            refreshes = state.clock().refreshes();
            log::info!(
                "frame {}: rules re-rolled, mean speed {:.5}, type counts {:?}",
                frame,
                state.mean_speed(),
                state.type_count()
            );
        }

        if last_report.elapsed() >= Duration::from_secs(1) {
            let fps = (frame + 1) as f64 / started.elapsed().as_secs_f64();
            log::info!(
                "simulated {:.1}s at {:.1} ticks/s",
                state.clock().elapsed(),
                fps
            );
            last_report = Instant::now();
        }
    }

    log::info!(
        "done: {} frames in {:.2}s, mean speed {:.5}",
        FRAMES,
        started.elapsed().as_secs_f64(),
        state.mean_speed()
    );

    Ok(())
}
