//! Move notation for the 3x3x3 cube.
//!
//! Notation is only tokenized here, never validated. A token that doesn't name
//! a known move passes through unchanged and is resolved to a no-op by the
//! cube engine.

use itertools::Itertools;

#[cfg(test)]
mod tests;

/// Suffix that reverses the direction of a move.
pub const PRIME: char = '\'';
/// Suffix that turns a quarter turn into a half turn.
pub const DOUBLE: char = '2';
/// Marker for a wide move, such as `Rw`.
pub const WIDE: char = 'w';

/// Characters that group moves for readability but carry no meaning.
const GROUPING_CHARS: [char; 2] = ['(', ')'];

/// Splits a notation string into move tokens.
///
/// Parentheses are treated as separators, so `(R U)(R' U')` yields four
/// tokens. Tokens are returned in order and are never empty.
pub fn parse_notation(notation: &str) -> Vec<String> {
    notation
        .split(|c: char| c.is_whitespace() || GROUPING_CHARS.contains(&c))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Formats a sequence of move tokens as a single space-separated string.
pub fn format_moves<S: AsRef<str>>(moves: &[S]) -> String {
    moves.iter().map(AsRef::as_ref).join(" ")
}

/// Returns the move that undoes `token`.
///
/// Half turns are their own inverse. Otherwise a trailing prime is removed if
/// present, or appended if not.
pub fn invert_move(token: &str) -> String {
    if is_double_turn(token) {
        token.to_owned()
    } else if let Some(base) = token.strip_suffix(PRIME) {
        base.to_owned()
    } else {
        format!("{token}{PRIME}")
    }
}

/// Returns the setup sequence for `moves`: the sequence that, applied to a
/// solved cube, produces the state that `moves` solves.
///
/// This is the inverse of `moves`: reversed, with every move inverted.
pub fn setup_sequence<S: AsRef<str>>(moves: &[S]) -> Vec<String> {
    moves
        .iter()
        .rev()
        .map(|token| invert_move(token.as_ref()))
        .collect()
}

/// Returns whether `token` is a half turn.
pub fn is_double_turn(token: &str) -> bool {
    token.contains(DOUBLE)
}

/// Syntactic components of a single move token.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TokenParts {
    /// Upper-case base letter, such as `R`, `M`, or `X`. `None` if the token
    /// has no letter at all.
    pub letter: Option<char>,
    /// Whether the move also turns the adjacent middle layer.
    pub wide: bool,
    /// Whether the direction is reversed.
    pub prime: bool,
    /// Whether the move is a half turn.
    pub double: bool,
}
impl TokenParts {
    /// Splits a token into its components.
    ///
    /// A token is wide if it starts with a lower-case letter or contains `w`.
    /// The base letter is the first character after upper-casing the token and
    /// removing any `W`.
    pub fn of(token: &str) -> Self {
        let letter = token
            .chars()
            .flat_map(char::to_uppercase)
            .find(|&c| c != 'W');
        let wide = token.starts_with(|c: char| c.is_ascii_lowercase()) || token.contains(WIDE);

        Self {
            letter,
            wide,
            prime: token.contains(PRIME),
            double: is_double_turn(token),
        }
    }
}
