use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    check_tie, winning_direction, Board, BoardConfig, ConfigError, Direction, IllegalMove,
    Position, StorageKind, Token, MAX_PLAYERS, MIN_PLAYERS,
};

/// The setup of a game, as chosen before the first round.
///
/// Missing fields take their value from [`GameConfig::default()`] when deserializing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub win_length: usize,
    pub players: usize,
    pub storage: StorageKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        let board = BoardConfig::default();
        Self {
            rows: board.rows(),
            columns: board.columns(),
            win_length: board.win_length(),
            players: MIN_PLAYERS,
            storage: StorageKind::Dense,
        }
    }
}

impl GameConfig {
    /// Checks all values and returns the configuration for the board.
    pub fn validate(&self) -> Result<BoardConfig, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(ConfigError::PlayersOutOfRange {
                players: self.players,
            });
        }
        BoardConfig::new(self.rows, self.columns, self.win_length)
    }

    /// The tokens of the players, indexed by player.
    pub fn tokens(&self) -> Vec<Token> {
        (0..self.players.min(MAX_PLAYERS))
            .filter_map(Token::for_player)
            .collect()
    }

    pub fn random_first_player<R: Rng>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.players.max(1))
    }
}

/// Where a round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Won {
        player_idx: usize,
        token: Token,
        direction: Direction,
    },
    Tie,
}

/// Summarizes the outcome of playing a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nobody has won yet, and it's the next player's turn.
    Continue {
        position: Position,
        next_player_idx: usize,
    },
    Won {
        player_idx: usize,
        token: Token,
        position: Position,
        direction: Direction,
    },
    Tie {
        position: Position,
    },
}

/// A round of the game: the board, whose turn it is, and whether someone has won.
///
/// The board is selected by [`GameConfig::storage`] and replaced by an empty one
/// for every new round.
pub struct Game {
    config: GameConfig,
    board_config: BoardConfig,
    tokens: Vec<Token>,
    board: Box<dyn Board>,
    first_player_idx: usize,
    active_player_idx: usize,
    status: GameStatus,
}

impl Game {
    /// Starts the first round, with player 0 to move.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::with_first_player(config, 0)
    }

    /// Starts the first round with the given player to move.
    ///
    /// Panics if `first_player_idx` is not the index of a player.
    pub fn with_first_player(
        config: &GameConfig,
        first_player_idx: usize,
    ) -> Result<Self, ConfigError> {
        let board_config = config.validate()?;
        assert!(first_player_idx < config.players);
        Ok(Self {
            config: *config,
            board_config,
            tokens: config.tokens(),
            board: config.storage.new_board(board_config),
            first_player_idx,
            active_player_idx: first_player_idx,
            status: GameStatus::Ongoing,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &dyn Board {
        &*self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn active_player_idx(&self) -> usize {
        self.active_player_idx
    }

    pub fn active_token(&self) -> Token {
        self.tokens[self.active_player_idx]
    }

    /// Plays the active player's token into the column.
    ///
    /// A win is checked before a tie, so a move that fills the board with a line wins.
    pub fn play(&mut self, column: usize) -> Result<TurnOutcome, IllegalMove> {
        if self.status != GameStatus::Ongoing {
            return Err(IllegalMove::GameOver);
        }
        let player_idx = self.active_player_idx;
        let token = self.tokens[player_idx];
        let position = self.board.place(token, column)?;

        if let Some(direction) = winning_direction(&self.board, column)? {
            self.status = GameStatus::Won {
                player_idx,
                token,
                direction,
            };
            return Ok(TurnOutcome::Won {
                player_idx,
                token,
                position,
                direction,
            });
        }
        if check_tie(&self.board) {
            self.status = GameStatus::Tie;
            return Ok(TurnOutcome::Tie { position });
        }

        self.active_player_idx = (player_idx + 1) % self.tokens.len();
        Ok(TurnOutcome::Continue {
            position,
            next_player_idx: self.active_player_idx,
        })
    }

    /// Discards the board and starts over with the same player as the last round.
    pub fn new_round(&mut self) {
        self.new_round_with_first_player(self.first_player_idx);
    }

    /// Discards the board and starts over with the given player to move.
    ///
    /// Panics if `first_player_idx` is not the index of a player.
    pub fn new_round_with_first_player(&mut self, first_player_idx: usize) {
        assert!(first_player_idx < self.tokens.len());
        self.board = self.config.storage.new_board(self.board_config);
        self.first_player_idx = first_player_idx;
        self.active_player_idx = first_player_idx;
        self.status = GameStatus::Ongoing;
    }
}
