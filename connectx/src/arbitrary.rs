use quickcheck::{Arbitrary, Gen};

use crate::{Board, BoardConfig, Token, MAX_PLAYERS, MIN_PLAYERS};

/// A small board and a sequence of moves to play on it.
///
/// Moves cycle through the players. Some of them may target full columns,
/// which boards are expected to reject.
#[derive(Clone, Debug)]
pub struct PlacementScript {
    pub config: BoardConfig,
    pub players: usize,
    pub moves: Vec<(Token, usize)>,
}

impl PlacementScript {
    /// Plays all moves that are legal and returns how many there were.
    pub fn apply<B: Board + ?Sized>(&self, board: &mut B) -> usize {
        let mut num_placed = 0;
        for &(token, column) in &self.moves {
            if board.place(token, column).is_ok() {
                num_placed += 1;
            }
        }
        num_placed
    }
}

impl Arbitrary for PlacementScript {
    fn arbitrary(g: &mut Gen) -> Self {
        let rows = 3 + usize::from(u8::arbitrary(g) % 6);
        let columns = 3 + usize::from(u8::arbitrary(g) % 6);
        let win_length = 3 + usize::from(u8::arbitrary(g) % 3);
        let config = BoardConfig::new(rows, columns, win_length).unwrap();
        let players = MIN_PLAYERS + usize::from(u8::arbitrary(g)) % (MAX_PLAYERS - MIN_PLAYERS + 1);

        // Sometimes try to overfill the board
        let num_moves = usize::from(u8::arbitrary(g)) % (rows * columns + 5);
        let moves = (0..num_moves)
            .map(|idx| {
                let token = Token::for_player(idx % players).unwrap();
                let column = usize::from(u8::arbitrary(g)) % columns;
                (token, column)
            })
            .collect();

        PlacementScript {
            config,
            players,
            moves,
        }
    }
}
