use std::io::{self, Write};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use crossterm::{
    cursor::{Hide, Show},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode, size},
};
use log::{LevelFilter, error, info};

use vibe_shooter::config::{EnemyExit, GameConfig, KillPenalty, PowerUpPolicy};
use vibe_shooter::constants::KEY_HOLD_WINDOW_MS;
use vibe_shooter::game::{Game, run_then_restore};
use vibe_shooter::rendering::{OutputTarget, ScreenBuffer, TerminalRenderer};
use vibe_shooter::terminal_io::{KeyboardInput, SimulatedInput};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::Error,
            LogLevelArg::Warn => LevelFilter::Warn,
            LogLevelArg::Info => LevelFilter::Info,
            LogLevelArg::Debug => LevelFilter::Debug,
            LogLevelArg::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PenaltyArg {
    Keep,
    Reset,
    Decrement,
}

#[derive(Debug, Parser)]
#[command(name = "vibe-shooter", about = "Terminal arcade shooter: clear alien waves, dodge debris, grab power-ups")]
struct Args {
    /// Run a scripted session into an in-memory screen and log every frame.
    #[arg(long)]
    debug: bool,

    /// Screen width in cells for debug runs.
    #[arg(long, default_value_t = 80)]
    columns: u16,

    /// Screen height in cells for debug runs.
    #[arg(long, default_value_t = 30)]
    rows: u16,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<u64>,

    #[arg(long)]
    lives: Option<u32>,

    /// Power-up duration in seconds.
    #[arg(long)]
    power_up_secs: Option<f64>,

    /// Drop one power-up every N kills instead of at random.
    #[arg(long)]
    power_up_every: Option<u32>,

    /// What losing a life does to the kill counter.
    #[arg(long, value_enum, default_value_t = PenaltyArg::Keep)]
    kill_penalty: PenaltyArg,

    /// Kills removed per hit with `--kill-penalty decrement`.
    #[arg(long, default_value_t = 1)]
    penalty_step: u32,

    /// Enemies leaving the bottom re-enter from the top instead of despawning.
    #[arg(long)]
    wrap_enemies: bool,

    #[arg(long, default_value = "vibe-shooter.log")]
    log_file: String,

    #[arg(long, value_enum, default_value_t = LogLevelArg::Info)]
    log_level: LogLevelArg,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        let mut config = GameConfig::default();
        if let Some(lives) = self.lives {
            config.starting_lives = lives;
        }
        if let Some(secs) = self.power_up_secs {
            config.power_up_duration = Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO);
        }
        if let Some(every) = self.power_up_every {
            config.power_up_policy = PowerUpPolicy::EveryKills(every);
        }
        config.kill_penalty = match self.kill_penalty {
            PenaltyArg::Keep => KillPenalty::Keep,
            PenaltyArg::Reset => KillPenalty::Reset,
            PenaltyArg::Decrement => KillPenalty::Decrement(self.penalty_step),
        };
        if self.wrap_enemies {
            config.enemy_exit = EnemyExit::Wrap;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    simple_logging::log_to_file(&args.log_file, args.log_level.into())?;
    info!("Starting vibe-shooter with {:?}", args);

    let config = args.game_config();
    config.validate()?;

    if args.debug {
        info!("Debug mode enabled. Resolution set to {}x{}", args.columns, args.rows);
        let target = OutputTarget::ScreenBuffer(ScreenBuffer::new(args.columns, args.rows));
        let renderer = TerminalRenderer::new(target, args.columns, args.rows);
        let max_frames = args.max_frames.or(Some(600));
        return Game::new(renderer, SimulatedInput::demo(), config, true, max_frames).run();
    }

    info!("Attempting to enable raw mode.");
    enable_raw_mode().map_err(|e| { error!("Failed to enable raw mode: {}", e); e })?;
    run_then_restore(|| play_in_terminal(config, args.max_frames), restore_terminal)
}

fn play_in_terminal(config: GameConfig, max_frames: Option<u64>) -> anyhow::Result<()> {
    let (columns, rows) = size().map_err(|e| { error!("Failed to get terminal size: {}", e); e })?;
    info!("Terminal size: {}x{}", columns, rows);

    let mut target = OutputTarget::Stdout(io::stdout());
    target.execute_other_command(Clear(ClearType::All))?;
    target.execute_other_command(Hide)?;
    let renderer = TerminalRenderer::new(target, columns, rows);
    let input = KeyboardInput::new(Duration::from_millis(KEY_HOLD_WINDOW_MS));
    Game::new(renderer, input, config, false, max_frames).run()
}

fn restore_terminal() -> io::Result<()> {
    let mut target = OutputTarget::Stdout(io::stdout());
    target.execute_other_command(Show)?;
    target.execute_other_command(Clear(ClearType::All))?;
    target.flush()?;
    disable_raw_mode().map_err(|e| { error!("Failed to disable raw mode on exit: {}", e); e })
}
