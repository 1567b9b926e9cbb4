//! End-to-end engine scenarios driven through the public API

use flappy_flight::consts::*;
use flappy_flight::persistence::{FileStore, MemoryStore, ScoreStore};
use flappy_flight::sim::{self, FrameTime, GameEvent, GamePhase, GameState, Gate, PhaseState};
use flappy_flight::{BestScore, Engine};
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn engine_with(store: MemoryStore) -> Engine<MemoryStore> {
    Engine::with_rng(store, Pcg32::seed_from_u64(2024))
}

/// Tick at 60 Hz until `pred` holds or `limit` frames pass
fn run_until<S: ScoreStore>(
    engine: &mut Engine<S>,
    t: &mut f64,
    limit: usize,
    mut pred: impl FnMut(&[GameEvent]) -> bool,
) -> bool {
    for _ in 0..limit {
        *t += FRAME_TIME_MS;
        let events = engine.advance(*t);
        if pred(&events) {
            return true;
        }
    }
    false
}

#[test]
fn flap_scenario_matches_nominal_numbers() {
    let mut engine = engine_with(MemoryStore::new());
    engine.advance(0.0);
    assert_eq!(engine.snapshot().phase, GamePhase::Idle);

    engine.handle_input();
    engine.advance(0.0);
    let start_y = engine.snapshot().flyer.pos.y;
    assert_eq!(engine.snapshot().phase, GamePhase::Active);
    assert_eq!(engine.snapshot().flyer.vel_y, -7.2);

    engine.advance(FRAME_TIME_MS);
    let flyer = engine.snapshot().flyer;
    assert!((flyer.vel_y + 6.75).abs() < 1e-4);
    assert!((start_y - flyer.pos.y - 6.75).abs() < 1e-3);
}

#[test]
fn double_input_same_velocity_as_single() {
    let mut single = engine_with(MemoryStore::new());
    let mut double = engine_with(MemoryStore::new());
    single.advance(0.0);
    double.advance(0.0);

    single.handle_input();
    double.handle_input();
    double.handle_input();
    single.advance(FRAME_TIME_MS);
    double.advance(FRAME_TIME_MS);

    assert_eq!(single.snapshot().flyer.vel_y, double.snapshot().flyer.vel_y);
    assert_eq!(single.snapshot().flyer.pos, double.snapshot().flyer.pos);
}

#[test]
fn falling_without_input_never_crashes_on_ground() {
    let mut engine = engine_with(MemoryStore::new());
    engine.handle_input();
    let mut t = 0.0;
    engine.advance(t);

    // Lands after ~51 frames; the first gate column arrives after ~122
    let crashed = run_until(&mut engine, &mut t, 100, |events| {
        events.iter().any(|e| matches!(e, GameEvent::Crashed { .. }))
    });
    assert!(!crashed);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.phase, GamePhase::Active);
    assert_eq!(snapshot.flyer.pos.y, GROUND_LINE - FLYER_RADIUS);
    assert_eq!(snapshot.flyer.vel_y, 0.0);
}

#[test]
fn crash_without_new_best_skips_store() {
    let mut engine = engine_with(MemoryStore::with_value(0));
    let mut t = 0.0;
    engine.handle_input();
    engine.advance(t);

    // Resting on the ground the flyer eventually meets a gate column
    let crashed = run_until(&mut engine, &mut t, 2_000, |events| {
        events.iter().any(|e| matches!(e, GameEvent::Crashed { .. }))
    });
    assert!(crashed);
    assert_eq!(engine.snapshot().phase, GamePhase::Ended);
    // Score 0 does not beat stored 0, so nothing is written
    assert_eq!(engine.store().writes(), 0);
}

#[test]
fn restart_gives_fresh_world_and_keeps_best() {
    let mut engine = engine_with(MemoryStore::with_value(4));
    let mut t = 0.0;
    engine.handle_input();
    engine.advance(t);
    run_until(&mut engine, &mut t, 2_000, |events| {
        events.iter().any(|e| matches!(e, GameEvent::Crashed { .. }))
    });
    assert_eq!(engine.snapshot().phase, GamePhase::Ended);

    // Let the death fall play out a bit
    run_until(&mut engine, &mut t, 20, |_| false);

    engine.handle_input();
    t += FRAME_TIME_MS;
    let events = engine.advance(t);
    assert!(events.contains(&GameEvent::Reset));

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.phase, GamePhase::Idle);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.best_score, 4);
    assert_eq!(snapshot.gates.len(), 1);
    assert_eq!(snapshot.gates[0].x, PLAYFIELD_WIDTH + GATE_WIDTH);
    assert_eq!(snapshot.flyer.pos.x, FLYER_START_X);
}

#[test]
fn flying_through_a_gate_scores_once() {
    let mut rng = Pcg32::seed_from_u64(9);
    let mut state = GameState::new(BestScore::default(), &mut rng);
    sim::handle_input(&mut state, &mut rng, &mut Vec::new());

    // One gate just ahead of the flyer, gap centered on its start height
    state.gates = vec![Gate {
        x: 160.0,
        gap_center: FLYER_START_Y,
        gap: GAP_BASE,
        width: GATE_WIDTH,
        scored: false,
    }];
    state.phase = PhaseState::Active { spawn_timer: 0.0 };

    let mut scored_events = 0;
    for i in 0..80 {
        // Flap whenever sinking below the gap center
        if state.flyer.pos.y > FLYER_START_Y + 10.0 && state.flyer.vel_y > 0.0 {
            sim::handle_input(&mut state, &mut rng, &mut Vec::new());
        }
        let events = sim::tick(&mut state, &FrameTime::nominal(i as f64 * FRAME_TIME_MS), &mut rng);
        scored_events += events
            .iter()
            .filter(|e| matches!(e, GameEvent::Scored { .. }))
            .count();
        assert_eq!(state.game_phase(), GamePhase::Active, "hit the gate at tick {i}");
    }

    assert_eq!(scored_events, 1);
    assert_eq!(state.score, 1);
    assert!(state.gates[0].scored);
}

#[test]
fn garbage_best_score_file_reads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");
    std::fs::write(&path, "NaN").unwrap();

    let mut engine = Engine::with_rng(FileStore::new(&path), Pcg32::seed_from_u64(9));
    assert_eq!(engine.snapshot().best_score, 0);

    let mut t = 0.0;
    engine.handle_input();
    engine.advance(t);
    let crashed = run_until(&mut engine, &mut t, 2_000, |events| {
        events.contains(&GameEvent::Crashed {
            score: 0,
            new_best: false,
        })
    });
    assert!(crashed);

    // Nothing new to store, so the file is left alone
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "NaN");
}
