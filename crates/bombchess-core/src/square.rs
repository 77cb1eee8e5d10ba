//! Board squares addressed by row and column.

use std::fmt;

use crate::error::GameError;

/// A square on the chess board, encoded as a `u8` holding `row * 8 + col`.
///
/// Row 0 is Black's back rank (rank 8 in algebraic notation), row 7 is
/// White's back rank (rank 1); column 0 is file 'a'. This is the orientation
/// the wire protocol's `fromRow`/`fromCol` fields use, so decoded peer moves
/// map straight onto squares.
///
/// With the `serde` feature enabled, a square serializes as its 0-63 index
/// and deserialization rejects out-of-range values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row and column, returning `None` if either
    /// coordinate is outside [0,8).
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Create a square from caller-supplied coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if either coordinate is outside
    /// [0,8). Coordinates are never truncated into range.
    pub const fn from_coords(row: i32, col: i32) -> Result<Square, GameError> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Ok(Square(row as u8 * 8 + col as u8))
        } else {
            Err(GameError::OutOfRange { row, col })
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        let col = file_byte - b'a';
        let row = 8 - (rank_byte - b'0');
        Square::new(row, col)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0 = Black's back rank, 7 = White's back rank).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Return the column (0 = file 'a').
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Return the square offset by the given row and column deltas, or
    /// `None` if the result falls off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Square::new(row as u8, col as u8)
        } else {
            None
        }
    }

    /// Return `true` if this is a dark square.
    ///
    /// Used by the insufficient-material rule, which cares whether two
    /// bishops stand on equal-colored squares.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Return the algebraic file character ('a'..'h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col()) as char
    }

    /// Return the algebraic rank character ('1'..'8').
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'0' + (8 - self.row())) as char
    }

    /// Iterate over all 64 squares in index order (A8, B8, ..., H1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    // Named square constants, by algebraic name.
    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
    pub const A7: Square = Square(8);
    pub const B7: Square = Square(9);
    pub const C7: Square = Square(10);
    pub const D7: Square = Square(11);
    pub const E7: Square = Square(12);
    pub const F7: Square = Square(13);
    pub const G7: Square = Square(14);
    pub const H7: Square = Square(15);
    pub const A6: Square = Square(16);
    pub const B6: Square = Square(17);
    pub const C6: Square = Square(18);
    pub const D6: Square = Square(19);
    pub const E6: Square = Square(20);
    pub const F6: Square = Square(21);
    pub const G6: Square = Square(22);
    pub const H6: Square = Square(23);
    pub const A5: Square = Square(24);
    pub const B5: Square = Square(25);
    pub const C5: Square = Square(26);
    pub const D5: Square = Square(27);
    pub const E5: Square = Square(28);
    pub const F5: Square = Square(29);
    pub const G5: Square = Square(30);
    pub const H5: Square = Square(31);
    pub const A4: Square = Square(32);
    pub const B4: Square = Square(33);
    pub const C4: Square = Square(34);
    pub const D4: Square = Square(35);
    pub const E4: Square = Square(36);
    pub const F4: Square = Square(37);
    pub const G4: Square = Square(38);
    pub const H4: Square = Square(39);
    pub const A3: Square = Square(40);
    pub const B3: Square = Square(41);
    pub const C3: Square = Square(42);
    pub const D3: Square = Square(43);
    pub const E3: Square = Square(44);
    pub const F3: Square = Square(45);
    pub const G3: Square = Square(46);
    pub const H3: Square = Square(47);
    pub const A2: Square = Square(48);
    pub const B2: Square = Square(49);
    pub const C2: Square = Square(50);
    pub const D2: Square = Square(51);
    pub const E2: Square = Square(52);
    pub const F2: Square = Square(53);
    pub const G2: Square = Square(54);
    pub const H2: Square = Square(55);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = <u8 as serde::Deserialize>::deserialize(deserializer)?;
        Square::from_index(index).ok_or_else(|| {
            serde::de::Error::custom(format!("square index {index} out of range"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::error::GameError;

    #[test]
    fn new_and_accessors() {
        let sq = Square::new(7, 0).unwrap();
        assert_eq!(sq, Square::A1);
        assert_eq!(sq.row(), 7);
        assert_eq!(sq.col(), 0);
        assert_eq!(sq.index(), 56);
    }

    #[test]
    fn new_out_of_range() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert!(Square::new(255, 255).is_none());
    }

    #[test]
    fn from_coords_rejects_out_of_range() {
        assert_eq!(Square::from_coords(3, 4), Ok(Square::E5));
        assert_eq!(
            Square::from_coords(-1, 0),
            Err(GameError::OutOfRange { row: -1, col: 0 })
        );
        assert_eq!(
            Square::from_coords(0, 8),
            Err(GameError::OutOfRange { row: 0, col: 8 })
        );
        assert_eq!(
            Square::from_coords(12, -3),
            Err(GameError::OutOfRange { row: 12, col: -3 })
        );
    }

    #[test]
    fn row_col_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::new(sq.row(), sq.col()), Some(sq));
        }
    }

    #[test]
    fn offset_moves_and_clips() {
        assert_eq!(Square::E4.offset(-1, 0), Some(Square::E5));
        assert_eq!(Square::E4.offset(1, 1), Some(Square::F3));
        assert_eq!(Square::A1.offset(1, 0), None);
        assert_eq!(Square::A1.offset(0, -1), None);
        assert_eq!(Square::H8.offset(-1, 0), None);
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(Square::from_algebraic("e4"), Some(Square::E4));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::H8));
        assert_eq!(format!("{}", Square::E4), "e4");
        assert_eq!(format!("{}", Square::A1), "a1");
        assert_eq!(format!("{}", Square::H8), "h8");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert!(Square::from_algebraic("a").is_none());
        assert!(Square::from_algebraic("a1b").is_none());
    }

    #[test]
    fn named_constants() {
        assert_eq!(Square::A8.index(), 0);
        assert_eq!(Square::H8.index(), 7);
        assert_eq!(Square::A1.index(), 56);
        assert_eq!(Square::H1.index(), 63);
        assert_eq!(Square::E1, Square::new(7, 4).unwrap());
        assert_eq!(Square::E8, Square::new(0, 4).unwrap());
    }

    #[test]
    fn square_shade() {
        assert!(Square::A1.is_dark());
        assert!(!Square::H1.is_dark());
        assert!(!Square::A8.is_dark());
        assert!(Square::H8.is_dark());
    }

    #[test]
    fn all_iterator_count() {
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", Square::E4), "Square(e4)");
    }
}
