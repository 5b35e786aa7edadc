use std::io;
use std::time::Duration;

/// Input sampled for one refresh. Movement flags are level-triggered; `fire`,
/// `pause_toggle`, `restart` and `quit` are edges that happened since the last sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputFrame {
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub fire: bool,
    pub pause_toggle: bool,
    pub restart: bool,
    pub quit: bool,
    /// Touch drag: center the ship on this viewport point.
    pub drag_to: Option<(f64, f64)>,
    /// New host surface size, in the host's own units.
    pub resize: Option<(u16, u16)>,
}

impl InputFrame {
    pub fn idle() -> Self {
        InputFrame::default()
    }

    /// Horizontal and vertical direction, each in -1.0..=1.0.
    pub fn direction(&self) -> (f64, f64) {
        let axis = |neg: bool, pos: bool| match (neg, pos) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        (axis(self.move_left, self.move_right), axis(self.move_up, self.move_down))
    }
}

pub trait InputProvider {
    fn poll(&mut self, now: Duration) -> io::Result<InputFrame>;
}
