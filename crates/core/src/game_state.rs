//! Game state module - the engine
//!
//! Ties the grid, the players and the win check together. [`GameState::apply_move`]
//! is the single mutation path: it places a piece, checks for a win, then for a
//! tie, and only then hands the turn over.

use log::{debug, info};

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::player::Player;
use crate::types::{ConfigError, MoveError, Outcome, PlayerId};
use crate::win::{has_win, winning_line, Line};

/// Where the most recent accepted move landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: PlayerId,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    players: [Player; 2],
    active: PlayerId,
    outcome: Outcome,
    /// Accepted moves so far.
    moves_played: usize,
    last_move: Option<Placement>,
}

/// Create a fresh game with the given dimensions and player labels.
pub fn create_game(
    height: usize,
    width: usize,
    player_one: &str,
    player_two: &str,
) -> Result<GameState, ConfigError> {
    GameState::new(GameConfig::new(height, width, player_one, player_two))
}

impl GameState {
    /// Create a new game: empty grid, player 1 to move.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        info!(
            "new game {}x{}: player 1 '{}', player 2 '{}'",
            config.height, config.width, config.player_one, config.player_two
        );

        Ok(Self {
            grid: Grid::new(config.height, config.width),
            players: [
                Player::new(PlayerId::One, config.player_one),
                Player::new(PlayerId::Two, config.player_two),
            ],
            active: PlayerId::One,
            outcome: Outcome::InProgress,
            moves_played: 0,
            last_move: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Player whose turn it is; after a terminal move, the player who made it
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn last_move(&self) -> Option<Placement> {
        self.last_move
    }

    /// Columns that still accept a piece; empty once the game is over
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.grid.width())
            .filter(|&column| !self.grid.is_column_full(column))
            .collect()
    }

    /// The four cells that decided the game, if it was won
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome
            .winner()
            .and_then(|winner| winning_line(&self.grid, winner))
    }

    /// Drop the active player's piece into `column`.
    ///
    /// On error nothing changes. On success the returned state reflects the
    /// placement and any resulting win, tie, or turn change.
    pub fn apply_move(&mut self, column: usize) -> Result<&GameState, MoveError> {
        if let Err(err) = self.check_move(column) {
            debug!("{} rejected in column {}: {}", self.active, column, err);
            return Err(err);
        }

        let mover = self.active;
        let row = self
            .grid
            .drop_piece(column, mover)
            .ok_or(MoveError::ColumnFull { column })?;

        self.moves_played += 1;
        self.last_move = Some(Placement {
            row,
            column,
            player: mover,
        });
        debug!("{} dropped into column {} -> row {}", mover, column, row);

        if has_win(&self.grid, mover) {
            self.outcome = Outcome::WonBy(mover);
            info!("{} wins after {} moves", mover, self.moves_played);
        } else if self.grid.is_full() {
            self.outcome = Outcome::Tied;
            info!("tie after {} moves", self.moves_played);
        } else {
            self.active = mover.other();
        }

        Ok(&*self)
    }

    /// Like [`apply_move`](Self::apply_move) but leaves `self` untouched and
    /// returns the successor state.
    pub fn after_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move(column)?;
        Ok(next)
    }

    fn check_move(&self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= self.grid.width() {
            return Err(MoveError::InvalidColumn {
                column,
                width: self.grid.width(),
            });
        }
        if self.grid.is_column_full(column) {
            return Err(MoveError::ColumnFull { column });
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            players: [
                Player::new(PlayerId::One, crate::config::DEFAULT_PLAYER_ONE),
                Player::new(PlayerId::Two, crate::config::DEFAULT_PLAYER_TWO),
            ],
            active: PlayerId::One,
            outcome: Outcome::InProgress,
            moves_played: 0,
            last_move: None,
        }
    }
}
