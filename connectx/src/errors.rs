use crate::BoardError;

#[derive(Debug, PartialEq, Eq)]
/// The error type for one turn, see [`Game::play()`](crate::Game::play).
///
/// A rejected move does not change the game, and the same player is still to move.
pub enum IllegalMove {
    /// The round is over, a new one needs to be started first.
    GameOver,
    Board(BoardError),
}

impl From<BoardError> for IllegalMove {
    fn from(err: BoardError) -> Self {
        IllegalMove::Board(err)
    }
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::Board(err) => Some(err),
            IllegalMove::GameOver => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::GameOver => write!(f, "Tried to play after the game has ended"),
            IllegalMove::Board(_) => write!(f, "The token cannot be placed there"),
        }
    }
}
