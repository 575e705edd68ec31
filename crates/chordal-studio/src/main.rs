use anyhow::{Context, Result};

use chordal_engine::capture::{CaptureDriver, ReplayScript};
use chordal_engine::logging::{LoggingConfig, init_logging};
use chordal_engine::overlay::OverlayBuffer;
use chordal_engine::paint::Palette;
use chordal_engine::scene::shapes::axes::AXES_EXTENT;
use chordal_engine::scene::{DrawCmd, DrawList};
use chordal_engine::tess::{CIRCLE_SEGMENTS, circle_outline, segment_vertices};
use chordal_engine::geometry::Circle;

/// Replays a pointer script through the capture engine and prints what a
/// windowed host would render: overlay text, the scene stream, and the
/// vertex counts a GPU upload would produce.
fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  chordal studio · pointer script replay");
    println!("  ──────────────────────────────────────");

    let script = load_script()?;
    println!(
        "  surface {}x{} px, {} pointer events",
        script.surface.width,
        script.surface.height,
        script.events.len()
    );
    println!();

    let mut driver = CaptureDriver::new();
    let mut overlay = OverlayBuffer::new();
    let mut redraws = 0usize;

    for ev in &script.events {
        if let Some(commit) = driver.handle_event(script.surface, ev.to_input_event(), &mut overlay)
        {
            log::info!("committed: {commit:?}");
        }
        if driver.session_mut().take_redraw() {
            redraws += 1;
        }
    }
    driver.end_frame();

    println!("  overlay:");
    for (slot, line) in overlay.lines() {
        println!("    [{slot}] {line}");
    }
    if overlay.lines().count() == 0 {
        println!("    (empty: script committed nothing)");
    }
    println!();

    let palette = Palette::default();
    let mut scene = DrawList::new();
    scene.push_axes(AXES_EXTENT, &palette);
    driver.session().record_scene(&mut scene, &palette);

    println!("  scene ({} items, paint order, {} redraws requested):", scene.len(), redraws);
    for item in scene.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::CircleOutline(c) => {
                let verts = circle_outline(Circle::new(c.center, c.radius), CIRCLE_SEGMENTS);
                println!(
                    "    circle  center ({:.2}, {:.2}) radius {:.2}  [{} vertices]",
                    c.center.x,
                    c.center.y,
                    c.radius,
                    verts.len()
                );
            }
            DrawCmd::Segment(s) => {
                let verts = segment_vertices(chordal_engine::geometry::Segment::new(s.start, s.end));
                println!(
                    "    segment ({:.2}, {:.2}) ~ ({:.2}, {:.2})  [{} vertices]",
                    s.start.x,
                    s.start.y,
                    s.end.x,
                    s.end.y,
                    verts.len()
                );
            }
            DrawCmd::Marker(m) => {
                println!("    marker  ({:.2}, {:.2})", m.position.x, m.position.y);
            }
        }
    }
    println!();

    Ok(())
}

fn load_script() -> Result<ReplayScript> {
    let source = match std::env::args().nth(1) {
        Some(path) => {
            println!("  script: {path}");
            std::fs::read_to_string(&path).with_context(|| format!("reading script {path}"))?
        }
        None => {
            println!("  script: built-in demo (pass a path to replay your own)");
            include_str!("../scripts/demo.txt").to_string()
        }
    };

    ReplayScript::parse(&source).context("parsing replay script")
}
