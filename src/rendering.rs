use std::io::{self, Write};

use crossterm::{cursor::MoveTo, execute};
use log::info;

use crate::entities::Owner;
use crate::snapshot::{Backdrop, Renderer, Screen, Snapshot};
use crate::types::{Rect, Viewport};

// --- ScreenBuffer for simulated rendering ---
pub struct ScreenBuffer {
    pub buffer: Vec<Vec<char>>,
    pub width: u16,
    pub height: u16,
    pub cursor_x: u16,
    pub cursor_y: u16,
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        ScreenBuffer {
            buffer: vec![vec![' '; width as usize]; height as usize],
            width,
            height,
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            if self.cursor_y < self.height && self.cursor_x < self.width {
                self.buffer[self.cursor_y as usize][self.cursor_x as usize] = c;
            }
            self.cursor_x = self.cursor_x.saturating_add(1);
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        *self = ScreenBuffer::new(width, height);
    }

    pub fn row(&self, y: u16) -> String {
        self.buffer.get(y as usize).map(|row| row.iter().collect()).unwrap_or_default()
    }

    pub fn print_to_log(&self) {
        info!("--- Screen Buffer ---");
        for row in &self.buffer {
            info!("{}", row.iter().collect::<String>());
        }
        info!("---------------------");
    }
}

// --- OutputTarget: the real terminal or an in-memory screen ---
pub enum OutputTarget {
    Stdout(io::Stdout),
    ScreenBuffer(ScreenBuffer),
}

impl OutputTarget {
    pub fn execute_move_to(&mut self, command: MoveTo) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => execute!(s, command),
            OutputTarget::ScreenBuffer(sb) => {
                sb.move_to(command.0, command.1);
                Ok(())
            }
        }
    }

    pub fn execute_other_command(&mut self, command: impl crossterm::Command) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => execute!(s, command),
            // Cursor visibility and clears mean nothing to the in-memory screen.
            OutputTarget::ScreenBuffer(_) => Ok(()),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputTarget::Stdout(s) => s.write(buf),
            OutputTarget::ScreenBuffer(sb) => {
                sb.write_str(&String::from_utf8_lossy(buf));
                Ok(buf.len())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => s.flush(),
            OutputTarget::ScreenBuffer(_) => Ok(()),
        }
    }
}

// --- GameGrid: character cells covering the viewport ---
pub struct GameGrid {
    pub grid: Vec<Vec<char>>,
    pub width: u16,
    pub height: u16,
}

impl GameGrid {
    pub fn new(width: u16, height: u16) -> Self {
        GameGrid {
            grid: vec![vec![' '; width as usize]; height as usize],
            width,
            height,
        }
    }

    pub fn set_char(&mut self, x: u16, y: u16, c: char) {
        if y < self.height && x < self.width {
            self.grid[y as usize][x as usize] = c;
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.grid {
            row.fill(' ');
        }
    }

    /// Fills every cell the rectangle covers, at least one cell when on screen.
    pub fn fill_rect(&mut self, rect: &Rect, viewport: &Viewport, c: char) {
        let scale_x = self.width as f64 / viewport.width();
        let scale_y = self.height as f64 / viewport.height();
        let left = (rect.x * scale_x).floor().max(0.0);
        let top = (rect.y * scale_y).floor().max(0.0);
        let right = (rect.right() * scale_x).ceil().max(left + 1.0);
        let bottom = (rect.bottom() * scale_y).ceil().max(top + 1.0);
        if rect.right() <= 0.0 || rect.bottom() <= 0.0 {
            return;
        }
        for y in (top as u16)..(bottom.min(self.height as f64) as u16) {
            for x in (left as u16)..(right.min(self.width as f64) as u16) {
                self.set_char(x, y, c);
            }
        }
    }

    pub fn render(&self, target: &mut OutputTarget) -> io::Result<()> {
        for (y, line) in self.grid.iter().enumerate() {
            target.execute_move_to(MoveTo(0, y as u16))?;
            write!(target, "{}", line.iter().collect::<String>())?;
        }
        Ok(())
    }
}

/// Draws snapshots as characters, scaling viewport pixels to terminal cells.
pub struct TerminalRenderer {
    pub target: OutputTarget,
    grid: GameGrid,
}

impl TerminalRenderer {
    pub fn new(target: OutputTarget, columns: u16, rows: u16) -> Self {
        TerminalRenderer { target, grid: GameGrid::new(columns, rows) }
    }

    pub fn columns(&self) -> u16 {
        self.grid.width
    }

    pub fn rows(&self) -> u16 {
        self.grid.height
    }

    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.grid = GameGrid::new(columns, rows);
        if let OutputTarget::ScreenBuffer(sb) = &mut self.target {
            sb.resize(columns, rows);
        }
    }

    fn draw_backdrop(&mut self, backdrop: Backdrop, viewport: &Viewport) {
        let rows = self.grid.height as usize;
        let shift = match backdrop {
            Backdrop::Scrolling { offset } => (offset / viewport.height() * rows as f64) as usize,
            Backdrop::Static => 0,
        };
        let star = if backdrop == Backdrop::Static { '*' } else { '.' };
        for y in 0..rows {
            let source_row = (y + rows - shift % rows.max(1)) % rows.max(1);
            for x in (source_row * 7 % 13..self.grid.width as usize).step_by(13) {
                self.grid.set_char(x as u16, y as u16, star);
            }
        }
    }

    fn draw_entities(&mut self, snapshot: &Snapshot<'_>) {
        let viewport = &snapshot.viewport;
        let pools = snapshot.pools;
        for obstacle in &pools.obstacles {
            self.grid.fill_rect(&obstacle.rect, viewport, '#');
        }
        for enemy in &pools.enemies {
            self.grid.fill_rect(&enemy.rect, viewport, 'W');
        }
        if let Some(power_up) = &pools.power_up {
            self.grid.fill_rect(&power_up.rect, viewport, 'P');
        }
        for projectile in &pools.projectiles {
            let c = match projectile.owner {
                Owner::Player => '|',
                Owner::Enemy => '!',
            };
            self.grid.fill_rect(&projectile.rect, viewport, c);
        }
        self.grid.fill_rect(&snapshot.player.rect, viewport, 'A');
    }

    fn write_centered(&mut self, y: u16, text: &str) -> io::Result<()> {
        let x = (self.grid.width / 2).saturating_sub(text.chars().count() as u16 / 2);
        self.target.execute_move_to(MoveTo(x, y))?;
        write!(self.target, "{}", text)
    }

    fn draw_hud(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        let hud = &snapshot.hud;
        let power = match hud.power_up {
            Some((kind, left)) => format!("  Power: {} {:.1}s", kind.label(), left.as_secs_f64()),
            None => String::new(),
        };
        self.target.execute_move_to(MoveTo(0, 0))?;
        write!(
            self.target,
            "Score: {}  Kills: {}  Lives: {}  Level: {}  Wave: {}  Fire: {}{}",
            hud.score,
            hud.kills,
            hud.lives,
            hud.level,
            hud.wave,
            hud.fire_mode.label(),
            power
        )
    }
}

impl Renderer for TerminalRenderer {
    type Error = io::Error;

    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        self.grid.clear();
        let mid = self.grid.height / 2;
        match snapshot.screen {
            Screen::Playing => {
                self.draw_backdrop(snapshot.backdrop, &snapshot.viewport);
                self.draw_entities(snapshot);
                self.grid.render(&mut self.target)?;
                self.draw_hud(snapshot)?;
            }
            Screen::Paused => {
                self.draw_entities(snapshot);
                self.grid.render(&mut self.target)?;
                self.draw_hud(snapshot)?;
                self.write_centered(mid, "GAME PAUSED")?;
                self.write_centered(mid.saturating_add(2), "Press p to resume")?;
            }
            Screen::GameOver => {
                self.grid.render(&mut self.target)?;
                let score_msg = format!("Final Score: {}  Kills: {}", snapshot.hud.score, snapshot.hud.kills);
                self.write_centered(mid.saturating_sub(2), "GAME OVER!")?;
                self.write_centered(mid, &score_msg)?;
                self.write_centered(mid.saturating_add(2), "Press r to restart or q to quit")?;
            }
        }
        self.target.flush()?;
        if let OutputTarget::ScreenBuffer(sb) = &self.target {
            sb.print_to_log();
        }
        Ok(())
    }
}
