//! Flappy Flight headless runner
//!
//! The browser build is driven from JS through `flappy_flight::web`. Natively
//! there is no window: this binary plays runs with a simple autopilot under a
//! simulated 60 Hz clock and logs the results, which is handy for checking
//! balance changes.
//!
//! Usage: `flappy-flight [settings.json] [runs]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use flappy_flight::consts::FRAME_TIME_MS;
    use flappy_flight::persistence::FileStore;
    use flappy_flight::platform::{ManualClock, init_logging};
    use flappy_flight::sim::{GameEvent, GamePhase};
    use flappy_flight::{Engine, Settings};

    let mut args = std::env::args().skip(1);
    let settings = args
        .next()
        .map(|path| Settings::load_from(&PathBuf::from(path)))
        .unwrap_or_default();
    let runs: u32 = args.next().and_then(|n| n.parse().ok()).unwrap_or(3);

    init_logging(&settings.log_filter);
    log::info!("Flappy Flight (native) starting...");

    let store = FileStore::new(&settings.best_score_path);
    let mut engine = Engine::new(store, &settings);
    let clock = ManualClock::new(0.0);

    // Two simulated minutes per run at most
    let max_frames = (120_000.0 / FRAME_TIME_MS) as u32;

    for run in 1..=runs {
        engine.handle_input();
        let mut score = 0;
        for _ in 0..max_frames {
            if autopilot_wants_flap(&engine) {
                engine.handle_input();
            }
            let events = engine.advance_with(&clock);
            clock.advance(FRAME_TIME_MS);

            if let Some(GameEvent::Crashed { score: s, .. }) = events
                .iter()
                .find(|e| matches!(e, GameEvent::Crashed { .. }))
            {
                score = *s;
                break;
            }
            score = engine.snapshot().score;
        }
        log::info!(
            "Run {} finished with score {} (best {})",
            run,
            score,
            engine.snapshot().best_score
        );

        // Restart from the ended screen
        if engine.snapshot().phase == GamePhase::Ended {
            engine.handle_input();
            engine.advance_with(&clock);
            clock.advance(FRAME_TIME_MS);
        } else {
            log::info!("Autopilot survived the time limit");
            break;
        }
    }
}

/// Flap when sinking below the next gap's center
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_wants_flap<S: flappy_flight::persistence::ScoreStore>(
    engine: &flappy_flight::Engine<S>,
) -> bool {
    use flappy_flight::sim::GamePhase;

    let snapshot = engine.snapshot();
    if snapshot.phase != GamePhase::Active {
        return false;
    }
    let flyer = snapshot.flyer;
    let target = snapshot
        .gates
        .iter()
        .find(|g| g.right() >= flyer.left())
        .map(|g| g.gap_center + g.gap / 6.0)
        .unwrap_or(flappy_flight::consts::FLYER_START_Y);

    flyer.pos.y > target && flyer.vel_y > 0.0
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `flappy_flight::web::WebGame`, this is just to satisfy the compiler
}
