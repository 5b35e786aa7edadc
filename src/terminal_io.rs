use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::{error, info};

use crate::input::{InputFrame, InputProvider};

// --- SimulatedInput for debugging ---
/// Scripted input keyed by refresh index. Refreshes without an entry are idle.
pub struct SimulatedInput {
    events: HashMap<u64, InputFrame>,
    current_frame: u64,
}

impl SimulatedInput {
    pub fn new(events: HashMap<u64, InputFrame>) -> Self {
        SimulatedInput { events, current_frame: 0 }
    }

    /// A short demo: strafe right, fire a few volleys, pause and resume, then quit.
    pub fn demo() -> Self {
        let mut events = HashMap::new();
        let strafe = InputFrame { move_right: true, ..InputFrame::idle() };
        for frame in 1..=20 {
            events.insert(frame, strafe);
        }
        for frame in [5, 10, 15, 25, 30] {
            events.insert(frame, InputFrame { fire: true, ..InputFrame::idle() });
        }
        events.insert(35, InputFrame { pause_toggle: true, ..InputFrame::idle() });
        events.insert(38, InputFrame { pause_toggle: true, ..InputFrame::idle() });
        events.insert(60, InputFrame { quit: true, ..InputFrame::idle() });
        SimulatedInput::new(events)
    }
}

impl InputProvider for SimulatedInput {
    fn poll(&mut self, _now: Duration) -> io::Result<InputFrame> {
        let frame = self.events.remove(&self.current_frame).unwrap_or_default();
        self.current_frame += 1;
        Ok(frame)
    }
}

// --- KeyboardInput for the real terminal ---
/// Terminals rarely report key releases, so a direction counts as held for
/// `hold_window` after its latest press or auto-repeat.
pub struct KeyboardInput {
    last_seen: HashMap<KeyCode, Duration>,
    hold_window: Duration,
}

impl KeyboardInput {
    pub fn new(hold_window: Duration) -> Self {
        KeyboardInput { last_seen: HashMap::new(), hold_window }
    }

    fn is_held(&self, key: KeyCode, now: Duration) -> bool {
        self.last_seen
            .get(&key)
            .is_some_and(|&seen| now.saturating_sub(seen) <= self.hold_window)
    }

    fn apply_key(&mut self, key: KeyEvent, now: Duration, frame: &mut InputFrame) {
        if key.kind == KeyEventKind::Release {
            self.last_seen.remove(&key.code);
            return;
        }
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.last_seen.insert(key.code, now);
            }
            KeyCode::Char(' ') => frame.fire = true,
            KeyCode::Char('p') | KeyCode::Esc => frame.pause_toggle = true,
            KeyCode::Char('r') => frame.restart = true,
            KeyCode::Char('q') => {
                info!("Quit key 'q' pressed.");
                frame.quit = true;
            }
            _ => {}
        }
    }
}

impl InputProvider for KeyboardInput {
    fn poll(&mut self, now: Duration) -> io::Result<InputFrame> {
        let mut frame = InputFrame::idle();
        while event::poll(Duration::ZERO).map_err(|e| { error!("Failed to poll event: {}", e); e })? {
            match event::read().map_err(|e| { error!("Failed to read event: {}", e); e })? {
                Event::Key(key) => self.apply_key(key, now, &mut frame),
                Event::Resize(columns, rows) => frame.resize = Some((columns, rows)),
                _ => {}
            }
        }
        frame.move_left = self.is_held(KeyCode::Left, now);
        frame.move_right = self.is_held(KeyCode::Right, now);
        frame.move_up = self.is_held(KeyCode::Up, now);
        frame.move_down = self.is_held(KeyCode::Down, now);
        Ok(frame)
    }
}
