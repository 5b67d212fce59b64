//! Random-move scrambles.

use std::fmt;

use chrono::Utc;
use cubedrill_core::Face;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use strum::IntoEnumIterator;

/// Number of moves in a scramble unless configured otherwise.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

const MODIFIERS: [&str; 3] = ["", "'", "2"];

/// Sequence of random face turns, deterministically generated from a seed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    /// Random seed.
    pub seed: String,
    /// Moves of the scramble.
    pub moves: Vec<String>,
}
impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", cubedrill_notation::format_moves(&self.moves))
    }
}
impl Scramble {
    /// Generates a new scramble based on the current time and a random
    /// number.
    pub fn new(length: usize) -> Self {
        let seed = format!("{}_{}", Utc::now().to_rfc3339(), rand::rng().random::<u64>());
        Self::from_seed(seed, length)
    }

    /// Generates the scramble for a seed.
    pub fn from_seed(seed: impl Into<String>, length: usize) -> Self {
        let seed = seed.into();
        let moves = generate_moves(&mut rng_from_seed(&seed), length);
        Self { seed, moves }
    }
}

fn rng_from_seed(seed: &str) -> rand_chacha::ChaCha12Rng {
    let mut sha256 = Sha256::new();
    sha256.update((seed.len() as u64).to_le_bytes());
    sha256.update(seed.as_bytes());
    let digest = sha256.finalize();

    let mut rng_seed = [0; 32];
    rng_seed.copy_from_slice(&digest);
    rand_chacha::ChaCha12Rng::from_seed(rng_seed)
}

/// Generates random face turns.
///
/// The same face is never turned twice in a row, and a face is not turned
/// again after only its opposite face was turned in between (as in `R L R`).
fn generate_moves(rng: &mut impl Rng, length: usize) -> Vec<String> {
    let faces = Face::iter().collect::<Vec<_>>();

    let mut last = None;
    let mut second_last = None;
    let mut moves = Vec::with_capacity(length);
    for _ in 0..length {
        let face = loop {
            let face = faces[rng.random_range(0..faces.len())];
            let is_redundant = Some(face) == last
                || (Some(face) == second_last && last == Some(face.opposite()));
            if !is_redundant {
                break face;
            }
        };
        let modifier = MODIFIERS[rng.random_range(0..MODIFIERS.len())];
        moves.push(format!("{}{modifier}", face.symbol()));

        second_last = last;
        last = Some(face);
    }
    moves
}
