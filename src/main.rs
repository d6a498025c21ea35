//! Terminal Connect Four runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `tui_connect4::term`. The loop blocks on input: nothing in the game
//! moves on its own, so there is no tick.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use log::{debug, info, warn};

use tui_connect4::core::config::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO};
use tui_connect4::core::{GameConfig, GameState};
use tui_connect4::input::{handle_key_event, should_quit, ColumnCursor};
use tui_connect4::term::{
    rejection_message, FrameBuffer, GameView, Hud, TerminalRenderer, Viewport,
};
use tui_connect4::types::{GameAction, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "tui-connect4", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Number of rows (at least 4)
    #[arg(long, env = "CONNECT4_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Number of columns (at least 4)
    #[arg(long, env = "CONNECT4_WIDTH", default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Label for player 1, usually a colour name or #rrggbb
    #[arg(long, default_value = DEFAULT_PLAYER_ONE)]
    player_one: String,

    /// Label for player 2
    #[arg(long, default_value = DEFAULT_PLAYER_TWO)]
    player_two: String,

    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = GameConfig::new(cli.height, cli.width, cli.player_one, cli.player_two);
    config.validate().context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file only; stderr would scribble over the alternate screen.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = GameState::new(config.clone())?;
    let mut cursor = ColumnCursor::new(config.width);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut message: Option<String> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let hud = Hud {
            cursor: Some(cursor.column()),
            message: message.as_deref(),
        };
        view.render_into_with_hud(&game, &hud, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit after {} moves", game.moves_played());
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let grid = game.grid();
                view.column_at(grid.width(), grid.height(), viewport, mouse.column, mouse.row)
                    .map(GameAction::DropAt)
            }
            Event::Resize(_, _) => {
                term.invalidate();
                None
            }
            _ => None,
        };

        let Some(action) = action else {
            continue;
        };
        debug!("action {}", action.as_str());
        message = None;

        if action == GameAction::Restart {
            game = GameState::new(config.clone())?;
            cursor = ColumnCursor::new(config.width);
            continue;
        }

        if let Some(column) = cursor.resolve(action) {
            if let Err(err) = game.apply_move(column) {
                if !err.is_recoverable() {
                    warn!("move into column {} refused: {}", column, err);
                }
                message = Some(rejection_message(err));
            }
        }
    }
}
