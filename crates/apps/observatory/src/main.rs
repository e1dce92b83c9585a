//! Headless demo host: boots the particle field until the globe assembles,
//! then serves the archive map and replays a couple of pointer presses.

use anyhow::{Context, Result, bail};
use catalog::{ArchiveStore, InMemoryArchive};
use foundation::math::Vec2;
use holomap::{Holomap, MapConfig, MapEvent, MarkerStats};
use particle_field::{FieldConfig, FieldEvent, FieldMode, ParticleField};
use runtime::{EventBus, FrameLoop};
use surface::{RecordingSurface, Viewport};
use tracing::info;
use tracing_subscriber::EnvFilter;

const ASSEMBLED_TAIL_FRAMES: u64 = 60;
const MAP_FRAMES: u64 = 120;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let viewport = Viewport::new(1280.0, 720.0, 1.0);
    let mut surface = RecordingSurface::new(viewport);
    let mut bus = EventBus::new();

    let archive = InMemoryArchive::seeded().context("seeding archive")?;
    let rows = archive.list().context("listing archive rows")?;
    info!("archive ready with {} rows", rows.len());

    run_particle_field(&mut surface, &mut bus)?;
    run_holomap(&mut surface, &mut bus, &rows)?;

    for event in bus.events() {
        info!("event frame={} kind={} {}", event.frame_index, event.kind, event.message);
    }
    Ok(())
}

/// Drives the intro field from scattered debris to the assembled globe.
fn run_particle_field(surface: &mut RecordingSurface, bus: &mut EventBus) -> Result<()> {
    let config = FieldConfig::default();
    let deadline = config.ready_after_frames * 2;
    let mut field = ParticleField::new(config);
    let mut frame_loop = FrameLoop::new();
    frame_loop.start();

    let mut mode = FieldMode::Forming;
    while mode == FieldMode::Forming {
        if frame_loop.frame_index() > deadline {
            bail!("globe never assembled within {deadline} frames");
        }
        let mut ready = None;
        frame_loop.tick(Some(&mut *surface), |s| {
            let frame = field.advance(s.viewport(), mode);
            ready = frame.event;
            s.submit(frame.draw_list);
        });
        if let Some(FieldEvent::Ready) = ready {
            mode = FieldMode::Assembled;
            bus.emit(frame_loop.frame_index(), "field.ready", "globe assembled");
        }
    }

    for _ in 0..ASSEMBLED_TAIL_FRAMES {
        frame_loop.tick(Some(&mut *surface), |s| {
            let frame = field.advance(s.viewport(), mode);
            s.submit(frame.draw_list);
        });
    }
    frame_loop.stop();

    info!(
        "particle field done: {} frames, last frame had {} commands",
        frame_loop.draws(),
        surface.last_frame().map(|f| f.len()).unwrap_or(0)
    );
    Ok(())
}

/// Renders the archive map and replays one selection and one targeting pick.
fn run_holomap(
    surface: &mut RecordingSurface,
    bus: &mut EventBus,
    rows: &[catalog::EntityRecord],
) -> Result<()> {
    let mut map = Holomap::new(MapConfig::default());
    let mut frame_loop = FrameLoop::new();
    frame_loop.start();

    for _ in 0..MAP_FRAMES {
        let mut stats = MarkerStats::default();
        frame_loop.tick(Some(&mut *surface), |s| {
            let frame = map.render_frame(s.viewport(), rows, false);
            stats = frame.stats;
            s.submit(frame.draw_list);
        });
        frame_loop
            .metrics_mut()
            .set_gauge("markers.drawn", stats.drawn as i64);
        frame_loop
            .metrics_mut()
            .set_gauge("markers.labeled", stats.labeled as i64);
        frame_loop
            .metrics_mut()
            .set_gauge("markers.skipped", stats.skipped as i64);
    }
    frame_loop.stop();

    let viewport = surface.viewport();
    // Press on the r1 marker at normalized (50, 50).
    let press = Vec2::new(viewport.width_px * 0.5, viewport.height_px * 0.5);
    match map.hit_test(viewport, rows, press, false) {
        Some(MapEvent::EntitySelected(record)) => {
            bus.emit(frame_loop.frame_index(), "map.selected", record.id.clone());
            info!("selected record: {}", serde_json::to_string_pretty(&record)?);
        }
        other => bail!("expected an entity selection, got {other:?}"),
    }
    // The same press in targeting mode names a spot instead.
    if let Some(MapEvent::LocationPicked { x, y }) = map.hit_test(viewport, rows, press, true) {
        bus.emit(
            frame_loop.frame_index(),
            "map.picked",
            format!("({x:.1}, {y:.1})"),
        );
    }

    let snapshot = frame_loop.metrics().snapshot();
    for (name, value) in &snapshot.counters {
        info!("counter {name}={value}");
    }
    for (name, value) in &snapshot.gauges {
        info!("gauge {name}={value}");
    }
    Ok(())
}
