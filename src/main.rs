//! Terminal raster demo (default binary).
//!
//! Fills a framebuffer, draws a rectangle, a line and an ellipse, then slides
//! the rectangle one cell down-right per frame (turning it green) until it
//! would leave the buffer. `q` or `Esc` quits early.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use tui_raster::config::DemoConfig;
use tui_raster::core::{Ellipse, Framebuffer, Handle, Line, ObjectRegistry, Rectangle, Shape};
use tui_raster::term::{present, FrameSink, Renderer, TerminalSink};
use tui_raster::types::{Color, RasterError};

/// Why the animation loop ended.
enum Stop {
    Quit,
    FrameLimit,
    Blocked(RasterError),
}

struct Scene {
    fb: Framebuffer,
    registry: ObjectRegistry,
    mover: Option<Handle>,
}

fn main() -> Result<()> {
    let config = DemoConfig::from_env();
    let mut scene = build_scene(&config)?;
    let renderer = Renderer::new(config.cell_w);

    let mut term = TerminalSink::new();
    term.enter()?;

    let result = run(&mut term, &renderer, &mut scene, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        Stop::Quit => {}
        Stop::FrameLimit => eprintln!("[Demo] frame limit of {} reached", config.frames),
        Stop::Blocked(err) => eprintln!("[Demo] rectangle stopped: {}", err),
    }
    Ok(())
}

fn build_scene(config: &DemoConfig) -> Result<Scene> {
    let mut fb = Framebuffer::new(config.height, config.width, config.background)?;
    let mut registry = ObjectRegistry::new(config.background);

    let (w, h) = (config.width as i32, config.height as i32);
    let rect: Shape = Rectangle::new(3, 3, 4, 5, Color::Red).into();
    let line: Shape = Line::new((0, h - 1), (w - 1, h / 2), Color::Yellow).into();
    let ellipse: Shape = Ellipse::new(
        (w / 2, h / 2),
        config.width / 4,
        config.height / 4,
        Color::Magenta,
    )
    .into();

    // A shape that does not fit is reported and skipped; the rest still draw.
    let mut mover = None;
    for (name, shape) in [("rectangle", rect), ("line", line), ("ellipse", ellipse)] {
        match registry.insert(&mut fb, shape) {
            Ok(handle) if name == "rectangle" => mover = Some(handle),
            Ok(_) => {}
            Err(err) => eprintln!("[Demo] skipping {}: {}", name, err),
        }
    }

    Ok(Scene {
        fb,
        registry,
        mover,
    })
}

fn run(
    sink: &mut impl FrameSink,
    renderer: &Renderer,
    scene: &mut Scene,
    config: &DemoConfig,
) -> Result<Stop> {
    let mut frame: u64 = 0;

    loop {
        present(renderer, &scene.fb, sink)?;
        frame += 1;
        if config.frames != 0 && frame >= config.frames {
            return Ok(Stop::FrameLimit);
        }

        if event::poll(config.frame_interval())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                {
                    return Ok(Stop::Quit);
                }
            }
        }

        let Some(handle) = scene.mover else {
            continue;
        };
        let Some(next) = scene
            .registry
            .get(handle)
            .and_then(|p| p.shape().translated(1, 1))
            .map(|s| s.with_color(Color::Green))
        else {
            continue;
        };
        if let Err(err) = scene.registry.update(&mut scene.fb, handle, next) {
            return Ok(Stop::Blocked(err));
        }
        // Moving the rectangle erased whatever it uncovered; draw the rest back.
        scene.registry.repaint(&mut scene.fb)?;
    }
}
