use std::time::Duration;

use log::{info, warn};
use rand::Rng;

use crate::input::InputFrame;
use crate::session::{Session, TickReport};
use crate::snapshot::Renderer;
use crate::state::Phase;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FrameRequest {
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// A tick ran and the next frame is scheduled.
    Advanced(TickReport),
    /// Nothing was pending; overlays for paused or finished sessions were redrawn.
    Idle(Phase),
    /// The tick just run ended the session; no frame is scheduled.
    GameOver(TickReport),
}

/// Drives the session one display refresh at a time, holding at most one
/// pending frame request.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: Option<FrameRequest>,
    frames_run: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        FrameScheduler::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Schedules the next frame. Returns false if one is already pending.
    pub fn request_frame(&mut self, session: &Session) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(FrameRequest { generation: session.generation() });
        true
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Applies pause and restart edges, which must work even while no frame is pending.
    pub fn handle_controls(&mut self, session: &mut Session, input: &InputFrame, now: Duration) {
        if input.pause_toggle {
            match session.toggle_pause(now) {
                Phase::Paused => self.cancel(),
                Phase::Playing => {
                    self.request_frame(session);
                }
                Phase::GameOver => {}
            }
        }
        if input.restart && session.restart(now) {
            self.cancel();
            self.request_frame(session);
        }
    }

    /// One display refresh: controls, then the tick if a frame is pending, then render.
    pub fn on_refresh<R: Renderer>(
        &mut self,
        session: &mut Session,
        input: &InputFrame,
        now: Duration,
        rng: &mut impl Rng,
        renderer: &mut R,
    ) -> Result<TickOutcome, R::Error> {
        self.handle_controls(session, input, now);

        let request = match self.pending.take() {
            Some(request) if request.generation == session.generation() => request,
            Some(stale) => {
                warn!("Dropping frame from session generation {}.", stale.generation);
                self.request_frame(session);
                return Ok(TickOutcome::Idle(session.phase()));
            }
            None => {
                if session.phase() != Phase::Playing {
                    renderer.render(&session.snapshot(now))?;
                }
                return Ok(TickOutcome::Idle(session.phase()));
            }
        };

        if session.phase() != Phase::Playing {
            // A request outliving its phase is simply consumed.
            renderer.render(&session.snapshot(now))?;
            return Ok(TickOutcome::Idle(session.phase()));
        }

        let report = session.advance(input, now, rng);
        self.frames_run += 1;
        renderer.render(&session.snapshot(now))?;

        if session.phase() == Phase::GameOver {
            info!("Frame {} ended the session (generation {}).", self.frames_run, request.generation);
            return Ok(TickOutcome::GameOver(report));
        }
        self.request_frame(session);
        Ok(TickOutcome::Advanced(report))
    }
}
