use serde::{Deserialize, Serialize};

/// The maximum number of players, i.e. the number of distinct tokens.
pub const MAX_PLAYERS: usize = 10;
/// The minimum number of players needed for a game.
pub const MIN_PLAYERS: usize = 2;

/// The glyphs handed out to players, in the order players are registered.
pub const TOKEN_ALPHABET: [char; MAX_PLAYERS] = ['X', 'O', 'S', 'D', 'A', 'W', 'K', 'C', 'M', 'T'];

/// A player's marker on the board.
///
/// Every token is one of the glyphs in [`TOKEN_ALPHABET`], so there are at most
/// [`MAX_PLAYERS`] distinct tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Token(char);

impl Token {
    /// The token of the player with the given (zero-based) index.
    pub fn for_player(player_idx: usize) -> Option<Token> {
        TOKEN_ALPHABET.get(player_idx).copied().map(Token)
    }

    /// The index of the player this token is assigned to.
    pub fn player_idx(self) -> usize {
        // Tokens can only be created from the alphabet
        TOKEN_ALPHABET
            .iter()
            .position(|&c| c == self.0)
            .unwrap_or_default()
    }

    pub fn glyph(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The error type for converting a [`char`] into a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotAToken(pub char);

impl std::error::Error for NotAToken {}

impl std::fmt::Display for NotAToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not one of the player tokens", self.0)
    }
}

impl TryFrom<char> for Token {
    type Error = NotAToken;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if TOKEN_ALPHABET.contains(&c) {
            Ok(Token(c))
        } else {
            Err(NotAToken(c))
        }
    }
}

impl From<Token> for char {
    fn from(token: Token) -> char {
        token.0
    }
}

/// Shorthand for creating a token from its glyph. Only for tests.
#[cfg(test)]
#[macro_export]
macro_rules! token {
    ($c:literal) => {
        $crate::Token::try_from($c).unwrap()
    };
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    #[test]
    fn tokens_are_assigned_in_alphabet_order() {
        let glyphs: String = (0..MAX_PLAYERS)
            .map(|idx| Token::for_player(idx).unwrap().glyph())
            .collect();
        assert_eq!(glyphs, "XOSDAWKCMT");
        assert_eq!(Token::for_player(MAX_PLAYERS), None);
    }

    #[test]
    fn unknown_glyph_is_rejected() {
        assert_eq!(Token::try_from('Z'), Err(NotAToken('Z')));
        assert_eq!(Token::try_from(' '), Err(NotAToken(' ')));
    }

    #[test]
    fn serializes_as_glyph() {
        assert_eq!(serde_json::to_string(&token!('O')).unwrap(), "\"O\"");
        assert_eq!(serde_json::from_str::<Token>("\"K\"").unwrap(), token!('K'));
        assert!(serde_json::from_str::<Token>("\"?\"").is_err());
    }

    quickcheck! {
        fn player_idx_inverts_for_player(idx: usize) -> bool {
            let idx = idx % MAX_PLAYERS;
            Token::for_player(idx).unwrap().player_idx() == idx
        }
    }
}
