use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor::MoveTo,
    event::{self, Event},
};
use log::{error, info};

use crate::config::GameConfig;
use crate::constants::{CELL_HEIGHT_PX, CELL_WIDTH_PX, FRAME_INTERVAL_MS};
use crate::input::InputProvider;
use crate::rendering::{OutputTarget, TerminalRenderer};
use crate::scheduler::{FrameScheduler, TickOutcome};
use crate::session::Session;
use crate::types::Viewport;

/// Runs `body` and then `restore`, even when `body` fails. An error from `body`
/// takes precedence over one from `restore`.
pub fn run_then_restore(
    body: impl FnOnce() -> anyhow::Result<()>,
    restore: impl FnOnce() -> io::Result<()>,
) -> anyhow::Result<()> {
    let result = body();
    let restored = restore().map_err(|e| {
        error!("Failed to restore terminal: {}", e);
        e
    });
    if let Err(e) = &result {
        error!("Game exited with error: {:#}", e);
    }
    result?;
    restored?;
    Ok(())
}

/// Terminal host: owns the renderer and input provider and pumps the scheduler
/// once per frame interval.
pub struct Game<I: InputProvider> {
    renderer: TerminalRenderer,
    input: I,
    config: GameConfig,
    debug_mode_active: bool,
    max_frames: Option<u64>,
}

impl<I: InputProvider> Game<I> {
    pub fn new(
        renderer: TerminalRenderer,
        input: I,
        config: GameConfig,
        debug_mode_active: bool,
        max_frames: Option<u64>,
    ) -> Self {
        Game { renderer, input, config, debug_mode_active, max_frames }
    }

    /// Each terminal cell stands for a block of viewport pixels.
    pub fn viewport_for(columns: u16, rows: u16) -> anyhow::Result<Viewport> {
        Viewport::new(columns.max(1) as f64 * CELL_WIDTH_PX, rows.max(1) as f64 * CELL_HEIGHT_PX)
            .with_context(|| format!("terminal of {columns}x{rows} cells has no usable viewport"))
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        if !self.debug_mode_active {
            self.show_title_screen()?;
        }

        let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
        let viewport = Self::viewport_for(self.renderer.columns(), self.renderer.rows())?;
        let mut session = Session::new(self.config.clone(), viewport, Duration::ZERO)?;
        let mut scheduler = FrameScheduler::new();
        scheduler.request_frame(&session);
        let mut rng = rand::thread_rng();

        let started = Instant::now();
        let mut frame_count: u64 = 0;

        while self.max_frames.is_none_or(|max| frame_count < max) {
            let frame_started = Instant::now();
            // Debug runs use simulated time so the scripted session is reproducible.
            let now = if self.debug_mode_active { frame_interval * frame_count as u32 } else { started.elapsed() };

            let input = self.input.poll(now)?;
            if input.quit {
                info!("Quit requested at frame {}.", frame_count);
                break;
            }
            if let Some((columns, rows)) = input.resize {
                self.renderer.resize(columns, rows);
                session.resize(Self::viewport_for(columns, rows)?);
            }

            let outcome = scheduler
                .on_refresh(&mut session, &input, now, &mut rng, &mut self.renderer)
                .map_err(|e| {
                    error!("Failed to render frame {}: {}", frame_count, e);
                    e
                })?;
            if let TickOutcome::GameOver(report) = outcome {
                info!("Game over after {} ticks. Last tick: {:?}", scheduler.frames_run(), report.collisions);
            }

            frame_count += 1;
            if !self.debug_mode_active {
                thread::sleep(frame_interval.saturating_sub(frame_started.elapsed()));
            }
        }

        info!("Game loop ended after {} frames with score {}.", frame_count, session.state.score);
        Ok(())
    }

    fn show_title_screen(&mut self) -> io::Result<()> {
        let title_art = [
            r"VIBE-SHOOTER",
            r"__   _____ ___ ___   ___ _  _  ___   ___ _____ ___ ___",
            r"\ \ / /_ _| _ ) __| / __| || |/ _ \ / _ \_   _| __| _ \",
            r" \ V / | || _ \ _|  \__ \ __ | (_) | (_) || | | _||   /",
            r"  \_/ |___|___/___| |___/_||_|\___/ \___/ |_| |___|_|_\",
        ];
        let controls = [
            "Arrows: move   Space: fire   p/Esc: pause   r: restart   q: quit",
            "Press any key to start...",
        ];

        let columns = self.renderer.columns();
        let rows = self.renderer.rows();
        let target = &mut self.renderer.target;
        let title_start_y = (rows / 2).saturating_sub(title_art.len() as u16);
        for (i, line) in title_art.iter().chain(controls.iter()).enumerate() {
            let x = (columns / 2).saturating_sub(line.len() as u16 / 2);
            target.execute_move_to(MoveTo(x, title_start_y + i as u16 + if i >= title_art.len() { 2 } else { 0 }))?;
            write!(target, "{}", line)?;
        }
        target.flush()?;
        info!("Title screen displayed. Waiting for key press.");

        loop {
            if let Event::Key(_) = event::read().map_err(|e| { error!("Failed to read title key: {}", e); e })? {
                break;
            }
        }
        Ok(())
    }
}
