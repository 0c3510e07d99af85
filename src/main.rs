//! Terminal cube runner (default binary).
//!
//! Draws the rotating cube until interrupted with Ctrl-C. The loop itself is
//! single-threaded and synchronous; a current-thread tokio runtime only
//! multiplexes the end-of-frame sleep with the interrupt signal.

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ascii_cube::config::{Cli, LogLevel, Settings};
use ascii_cube::core::Cube;
use ascii_cube::term::{CubeView, FrameBuffer, FramePacer, Lens, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);
    let settings = cli.into_settings();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(settings))
}

/// Logs go to stderr; stdout carries the frames.
fn init_tracing(level: Option<LogLevel>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

async fn run(settings: Settings) -> Result<()> {
    // Install the handler before touching the screen so Ctrl-C can't skip cleanup.
    let mut interrupt = Interrupt::new()?;

    let mut term = TerminalRenderer::new(settings.background);
    term.enter()?;

    let result = animate(&mut term, &settings, &mut interrupt).await;

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

async fn animate(
    term: &mut TerminalRenderer,
    settings: &Settings,
    interrupt: &mut Interrupt,
) -> Result<()> {
    let mut cube = Cube::new(settings.size);
    let mut view = CubeView::new(Lens {
        light: settings.light,
        focal_length: settings.focal_length,
        camera_distance: settings.camera_distance,
        density: settings.density,
        char_aspect: settings.char_aspect,
    });

    let viewport = Viewport::query();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height, settings.shading.clone());
    let mut pacer = FramePacer::new(settings.fps);
    tracing::info!(
        width = viewport.width,
        height = viewport.height,
        fps = settings.fps,
        "rendering started"
    );

    loop {
        cube.update_rotation(settings.rotation_step);
        term.present(&mut view, &cube, Viewport::query(), &mut fb)?;

        tokio::select! {
            _ = interrupt.recv() => {
                tracing::info!(frames = pacer.frames(), "interrupted; exiting");
                return Ok(());
            }
            _ = tokio::time::sleep(pacer.frame_done()) => {}
        }
    }
}

/// Ctrl-C, registered eagerly so the default handler never kills the process.
#[cfg(unix)]
struct Interrupt(tokio::signal::unix::Signal);

#[cfg(unix)]
impl Interrupt {
    fn new() -> std::io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};
        Ok(Self(signal(SignalKind::interrupt())?))
    }

    async fn recv(&mut self) {
        self.0.recv().await;
    }
}

#[cfg(windows)]
struct Interrupt(tokio::signal::windows::CtrlC);

#[cfg(windows)]
impl Interrupt {
    fn new() -> std::io::Result<Self> {
        Ok(Self(tokio::signal::windows::ctrl_c()?))
    }

    async fn recv(&mut self) {
        self.0.recv().await;
    }
}
