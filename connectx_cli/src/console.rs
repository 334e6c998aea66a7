use std::io::{BufRead, Write};

use connectx::{visualize, BoardError, Game, IllegalMove, TurnOutcome};
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

/// Plays rounds on a text terminal, e.g. stdin/stdout.
pub struct Console<R, W> {
    input: R,
    output: W,
    // A re-usable buffer for reading lines.
    buf: String,
}

/// What the player typed when asked for a column.
#[derive(Debug, PartialEq, Eq)]
enum ColumnAnswer {
    Column(usize),
    NotANumber,
}

fn parse_column(line: &str) -> ColumnAnswer {
    match line.trim().parse::<usize>() {
        Ok(column) => ColumnAnswer::Column(column),
        Err(_) => ColumnAnswer::NotANumber,
    }
}

/// `Some(true)` for yes, `Some(false)` for no, `None` if the answer was neither.
fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim() {
        "y" | "Y" => Some(true),
        "n" | "N" => Some(false),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    /// Plays rounds until the players don't want to play again, or the input ends.
    ///
    /// If an RNG is given, the first player of every new round is picked randomly.
    pub fn run(&mut self, game: &mut Game, mut rng: Option<&mut StdRng>) -> anyhow::Result<()> {
        let mut round = 1;
        loop {
            info!(round, first_player = %game.active_token(), "Starting round");
            let finished = self.play_round(game)?;
            if !finished {
                return Ok(());
            }

            match self.ask_play_again()? {
                Some(true) => {}
                Some(false) | None => return Ok(()),
            }
            round += 1;
            match rng.as_deref_mut() {
                Some(rng) => {
                    let first_player_idx = game.config().random_first_player(rng);
                    game.new_round_with_first_player(first_player_idx);
                }
                None => game.new_round(),
            }
        }
    }

    // Returns false if the input ended before the round was over.
    fn play_round(&mut self, game: &mut Game) -> anyhow::Result<bool> {
        loop {
            write!(self.output, "\n{}", visualize(game.board()))?;
            let Some(column) = self.ask_column(game)? else {
                return Ok(false);
            };
            match game.play(column) {
                Ok(TurnOutcome::Continue {
                    position,
                    next_player_idx,
                }) => {
                    debug!(row = position.row, column, next_player_idx, "Token placed");
                }
                Ok(TurnOutcome::Won {
                    token,
                    position,
                    direction,
                    ..
                }) => {
                    info!(winner = %token, %position, %direction, "Round won");
                    write!(self.output, "\n{}", visualize(game.board()))?;
                    writeln!(self.output, "Player {} Won!", token)?;
                    return Ok(true);
                }
                Ok(TurnOutcome::Tie { position }) => {
                    info!(%position, "Round ended in a tie");
                    write!(self.output, "\n{}", visualize(game.board()))?;
                    writeln!(self.output, "The game ended in a tie.")?;
                    return Ok(true);
                }
                Err(IllegalMove::Board(BoardError::InvalidColumn { columns, .. })) => {
                    writeln!(self.output, "Column must be between 0 and {}", columns - 1)?;
                }
                Err(IllegalMove::Board(BoardError::ColumnFull { .. })) => {
                    writeln!(self.output, "Column is full")?;
                }
                Err(err @ IllegalMove::GameOver) => return Err(err.into()),
            }
        }
    }

    // Returns None if the input has ended.
    fn ask_column(&mut self, game: &Game) -> anyhow::Result<Option<usize>> {
        loop {
            writeln!(
                self.output,
                "Player {}, what column do you want to place your marker in?",
                game.active_token()
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_column(line) {
                ColumnAnswer::Column(column) => return Ok(Some(column)),
                ColumnAnswer::NotANumber => {
                    trace!(input = line, "Not a column");
                    writeln!(self.output, "Please enter a column number")?;
                }
            }
        }
    }

    fn ask_play_again(&mut self) -> anyhow::Result<Option<bool>> {
        loop {
            writeln!(self.output, "Would you like to play again? Y/N")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(answer) = parse_yes_no(line) {
                return Ok(Some(answer));
            }
        }
    }

    // Reads the next line into buf. Returns None on EOF.
    fn read_line(&mut self) -> anyhow::Result<Option<&str>> {
        self.output.flush()?;
        self.buf.clear(); // because read_line() appends to the buffer
        let num_bytes_read = self.input.read_line(&mut self.buf)?;
        if num_bytes_read == 0 {
            Ok(None)
        } else {
            Ok(Some(self.buf.trim_end()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use connectx::{GameConfig, Token};
    use rand::SeedableRng;

    use super::*;

    fn run_with_input(config: &GameConfig, input: &str) -> String {
        let mut game = Game::new(config).unwrap();
        let mut output = Vec::new();
        Console::new(Cursor::new(input), &mut output)
            .run(&mut game, None)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn answers() {
        assert_eq!(parse_column(" 3 "), ColumnAnswer::Column(3));
        assert_eq!(parse_column("-1"), ColumnAnswer::NotANumber);
        assert_eq!(parse_column("three"), ColumnAnswer::NotANumber);
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no("n\n"), Some(false));
        assert_eq!(parse_yes_no("yes"), None);
    }

    #[test]
    fn vertical_win_then_quit() {
        let output = run_with_input(&GameConfig::default(), "0\n1\n0\n1\n0\n1\n0\nn\n");
        assert!(output.contains("Player O, what column do you want to place your marker in?"));
        assert!(output.ends_with("Player X Won!\nWould you like to play again? Y/N\n"));
    }

    #[test]
    fn bad_input_is_asked_again() {
        let output = run_with_input(&GameConfig::default(), "abc\n9\n0\n");
        assert!(output.contains("Please enter a column number\n"));
        assert!(output.contains("Column must be between 0 and 6\n"));
        // The X in column 0 went through, then the input ended
        assert!(output.ends_with(
            "|X |  |  |  |  |  |  |\nPlayer O, what column do you want to place your marker in?\n"
        ));
    }

    #[test]
    fn full_column_is_rejected() {
        let config = GameConfig {
            rows: 3,
            columns: 3,
            win_length: 3,
            ..GameConfig::default()
        };
        let output = run_with_input(&config, "1\n1\n1\n1\n");
        assert!(output.contains("Column is full\n"));
        assert!(output.ends_with("Player O, what column do you want to place your marker in?\n"));
    }

    #[test]
    fn play_again_starts_a_fresh_round() {
        let config = GameConfig {
            rows: 3,
            columns: 3,
            win_length: 3,
            ..GameConfig::default()
        };
        // X wins vertically in column 2, then another round is started
        let output = run_with_input(&config, "2\n0\n2\n0\n2\nmaybe\ny\n1\n");
        assert_eq!(output.matches("Would you like to play again? Y/N").count(), 2);
        assert!(output.contains("Player X Won!"));
        assert!(output.ends_with(
            "|  |  |  |\n|  |X |  |\nPlayer O, what column do you want to place your marker in?\n"
        ));
    }

    #[test]
    fn tie_is_announced() {
        let config = GameConfig {
            rows: 3,
            columns: 3,
            win_length: 3,
            ..GameConfig::default()
        };
        let output = run_with_input(&config, "1\n0\n0\n2\n2\n1\n0\n1\n2\nN\n");
        assert!(output.contains("The game ended in a tie.\n"));
        assert!(!output.contains("Won!"));
    }

    #[test]
    fn random_first_player_with_seed() {
        let config = GameConfig::default();
        let mut game = Game::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut output = Vec::new();
        Console::new(Cursor::new("0\n1\n0\n1\n0\n1\n0\ny\n5\n"), &mut output)
            .run(&mut game, Some(&mut rng))
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        // The RNG is only used when the second round starts
        let first_player_idx = config.random_first_player(&mut StdRng::seed_from_u64(3));
        let first = Token::for_player(first_player_idx).unwrap();
        let next = Token::for_player(1 - first_player_idx).unwrap();
        assert_eq!(output.matches("Would you like to play again? Y/N").count(), 1);
        assert!(output.ends_with(&format!(
            "|  |  |  |  |  |{} |  |\nPlayer {}, what column do you want to place your marker in?\n",
            first, next
        )));
    }
}
