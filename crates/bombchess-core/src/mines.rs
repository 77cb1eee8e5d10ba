//! The mine variant: hidden squares that detonate when landed on.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::square::Square;

/// Number of mines placed by default.
pub const DEFAULT_MINE_COUNT: usize = 3;

/// A set of mined squares, fixed before the first move of a game.
///
/// Mines only shrink afterward: a detonated mine is consumed. Legality
/// checking never consults the mine set; mines are hidden information and
/// must not leak through move validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MineField {
    squares: Vec<Square>,
}

impl MineField {
    /// Draw `count` mined squares from the injected random source.
    ///
    /// Candidates are the 32 squares of rows 2-5, exactly the squares
    /// unoccupied at game start, so the opening position is unaffected.
    /// `count` is capped at the candidate pool size. Injecting the generator
    /// keeps layouts reproducible: the same seed always yields the same
    /// field.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, count: usize) -> MineField {
        let mut candidates: Vec<Square> = Square::all()
            .filter(|sq| (2..=5).contains(&sq.row()))
            .collect();
        candidates.shuffle(rng);
        candidates.truncate(count.min(32));
        MineField { squares: candidates }
    }

    /// Build a field from an explicit list of squares (a peer-announced
    /// layout). Duplicates are dropped.
    pub fn from_positions<I: IntoIterator<Item = Square>>(positions: I) -> MineField {
        let mut squares: Vec<Square> = Vec::new();
        for sq in positions {
            if !squares.contains(&sq) {
                squares.push(sq);
            }
        }
        MineField { squares }
    }

    /// Return `true` if a mine hides on the given square.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.squares.contains(&sq)
    }

    /// Remove the mine on `sq`, reporting whether one was there.
    pub(crate) fn remove(&mut self, sq: Square) -> bool {
        match self.squares.iter().position(|&m| m == sq) {
            Some(idx) => {
                self.squares.remove(idx);
                true
            }
            None => false,
        }
    }

    /// The remaining mined squares, in placement order.
    #[inline]
    pub fn positions(&self) -> &[Square] {
        &self.squares
    }

    /// Number of remaining mines.
    #[inline]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Return `true` if no mines remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}
