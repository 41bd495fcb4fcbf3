// Host-side tests for the animation driver state machine.
// The web crate is wasm-only, so the frame loop is exercised with the
// in-memory surface and scheduler from ambient-core.

use ambient_core::testing::{DrawCommand, ManualScheduler, RecordingSurface};
use ambient_core::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type TestDriver = AnimationDriver<RecordingSurface, ManualScheduler, StdRng>;

fn layers() -> Layers<RecordingSurface> {
    Layers::new(
        RecordingSurface::default(),
        RecordingSurface::default(),
        RecordingSurface::default(),
    )
}

fn driver_with(config: BackgroundConfig, seed: u64) -> TestDriver {
    AnimationDriver::new(
        config,
        Some(layers()),
        ManualScheduler::default(),
        StdRng::seed_from_u64(seed),
    )
}

fn driver(seed: u64) -> TestDriver {
    driver_with(BackgroundConfig::DEFAULT, seed)
}

/// Let the display fire the pending frame, if any.
fn pump(d: &mut TestDriver) -> bool {
    if d.scheduler_mut().fire().is_some() {
        d.on_frame();
        true
    } else {
        false
    }
}

fn assert_single_token(d: &TestDriver) {
    let pending = d.scheduler().pending();
    assert!(pending.len() <= 1, "pending {pending:?}");
    match d.state() {
        DriverState::Running(token) => assert_eq!(pending, &[token]),
        DriverState::Idle => assert!(pending.is_empty()),
    }
}

#[test]
fn start_generates_and_schedules_one_frame() {
    let mut d = driver(1);
    assert_eq!(d.state(), DriverState::Idle);
    d.start(Viewport::new(1920.0, 1080.0));
    assert!(d.is_running());
    assert_eq!(d.population().glows.len(), 18);
    assert_eq!(d.population().streaks.len(), 12);
    assert_eq!(d.scheduler().pending().len(), 1);
}

#[test]
fn frames_keep_rescheduling_themselves() {
    let mut d = driver(2);
    d.start(Viewport::new(800.0, 600.0));
    for _ in 0..120 {
        assert!(pump(&mut d));
        assert_single_token(&d);
    }
    assert_eq!(d.frames(), 120);
    assert_eq!(d.scheduler().requested, 121);
}

#[test]
fn stop_is_idempotent_and_leaves_nothing_scheduled() {
    let mut d = driver(3);
    // before any start
    d.stop();
    assert_eq!(d.state(), DriverState::Idle);

    d.start(Viewport::new(800.0, 600.0));
    d.stop();
    d.stop();
    assert_eq!(d.state(), DriverState::Idle);
    assert!(d.scheduler().pending().is_empty());
    assert_eq!(d.scheduler().cancelled, 1);

    // a stale callback after stop does nothing
    d.on_frame();
    assert_eq!(d.frames(), 0);
    assert!(d.scheduler().pending().is_empty());
}

#[test]
fn resize_cancels_and_replaces_the_pending_frame() {
    let mut d = driver(4);
    d.start(Viewport::new(800.0, 600.0));
    let DriverState::Running(first) = d.state() else {
        panic!("not running");
    };
    d.on_resize(Viewport::new(1024.0, 768.0));
    let DriverState::Running(second) = d.state() else {
        panic!("not running after resize");
    };
    assert_ne!(first, second);
    assert_eq!(d.scheduler().pending(), &[second]);
    assert_eq!(d.viewport(), Viewport::new(1024.0, 768.0));
}

#[test]
fn any_call_sequence_keeps_at_most_one_frame_pending() {
    let mut ops = StdRng::seed_from_u64(99);
    let mut d = driver(5);
    for _ in 0..2_000 {
        match ops.gen_range(0..4) {
            0 => d.start(Viewport::new(
                ops.gen_range(1.0..2000.0),
                ops.gen_range(1.0..2000.0),
            )),
            1 => d.on_resize(Viewport::new(
                ops.gen_range(1.0..2000.0),
                ops.gen_range(1.0..2000.0),
            )),
            2 => d.stop(),
            _ => {
                pump(&mut d);
            }
        }
        assert_single_token(&d);
    }
    d.stop();
    d.stop();
    assert!(d.scheduler().pending().is_empty());
}

#[test]
fn resize_regenerates_with_the_same_distribution() {
    let mut d = driver(6);
    let viewport = Viewport::new(1366.0, 768.0);
    d.start(Viewport::new(400.0, 300.0));

    d.on_resize(viewport);
    let first = d.population().clone();
    d.on_resize(viewport);
    let second = d.population().clone();

    for pop in [&first, &second] {
        assert_eq!(pop.glows.len(), 18);
        assert_eq!(pop.streaks.len(), 12);
        for t in 0..3 {
            assert_eq!(pop.glows.iter().filter(|g| g.tier == t).count(), 6);
            assert_eq!(pop.streaks.iter().filter(|s| s.tier == t).count(), 4);
        }
        for g in &pop.glows {
            let floor = tier_size_floor(g.tier);
            assert!(g.radius >= floor && g.radius < 2.0 * floor);
            assert!(g.position.x < viewport.width && g.position.y < viewport.height);
        }
    }
    // fresh draws, not a replay
    assert_ne!(first, second);
}

#[test]
fn resize_rewrites_every_surface_size() {
    let mut d = driver(7);
    d.start(Viewport::new(800.0, 600.0));
    let v = Viewport::new(1280.0, 720.0);
    d.on_resize(v);
    let layers = d.layers().expect("layers");
    for surface in [&layers.backdrop, &layers.glow, &layers.streak] {
        let last_resize = surface
            .commands
            .iter()
            .rev()
            .find_map(|c| match c {
                DrawCommand::Resize(v) => Some(*v),
                _ => None,
            });
        assert_eq!(last_resize, Some(v));
    }
}

#[test]
fn missing_surfaces_make_start_a_no_op() {
    let mut d: TestDriver = AnimationDriver::new(
        BackgroundConfig::DEFAULT,
        None,
        ManualScheduler::default(),
        StdRng::seed_from_u64(8),
    );
    d.start(Viewport::new(800.0, 600.0));
    assert_eq!(d.state(), DriverState::Idle);
    assert_eq!(d.scheduler().requested, 0);
    assert!(d.population().is_empty());
    d.on_resize(Viewport::new(900.0, 700.0));
    d.on_frame();
    d.stop();
    assert_eq!(d.state(), DriverState::Idle);
}

#[test]
fn rejected_frame_request_degrades_to_idle() {
    let mut d = driver(9);
    d.scheduler_mut().reject = true;
    d.start(Viewport::new(800.0, 600.0));
    assert_eq!(d.state(), DriverState::Idle);
    // population and backdrop were still prepared
    assert_eq!(d.population().len(), 30);

    d.scheduler_mut().reject = false;
    d.on_resize(Viewport::new(800.0, 600.0));
    assert!(d.is_running());
}

#[test]
fn empty_layer_is_never_touched_by_frames() {
    let config = BackgroundConfig {
        glow: LayerConfig {
            amount: 0,
            ..BackgroundConfig::DEFAULT.glow
        },
        ..BackgroundConfig::DEFAULT
    };
    let mut d = driver_with(config, 10);
    d.start(Viewport::new(800.0, 600.0));
    for _ in 0..5 {
        pump(&mut d);
    }
    let layers = d.layers().expect("layers");
    assert!(layers
        .glow
        .commands
        .iter()
        .all(|c| matches!(c, DrawCommand::Resize(_))));
    assert_eq!(
        layers
            .streak
            .count(|c| matches!(c, DrawCommand::Clear(_))),
        5
    );
}

#[test]
fn full_hd_scenario_moves_every_particle_by_its_speed() {
    let mut d = driver(2024);
    d.start(Viewport::new(1920.0, 1080.0));

    let pop = d.population();
    assert_eq!(pop.glows.len(), 18);
    assert_eq!(pop.streaks.len(), 12);
    for t in 0..3 {
        assert_eq!(pop.glows.iter().filter(|g| g.tier == t).count(), 6);
        assert_eq!(pop.streaks.iter().filter(|s| s.tier == t).count(), 4);
    }
    let before = pop.clone();

    assert!(pump(&mut d));
    let h = Heading::from_degrees(20.0);
    let after = d.population();
    // Every particle starts inside the viewport, so nothing wraps on frame one
    for (a, b) in before.glows.iter().zip(&after.glows) {
        let moved = b.position - a.position;
        assert!((moved - h.step(a.speed)).length() < 1e-9);
        assert!((moved.length() - a.speed).abs() < 1e-9);
    }
    for (a, b) in before.streaks.iter().zip(&after.streaks) {
        let moved = b.position - a.position;
        assert!((moved - h.step(a.speed)).length() < 1e-9);
        assert!((moved.length() - a.speed).abs() < 1e-9);
    }
}
