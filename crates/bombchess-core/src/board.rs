//! The chess board: piece placement, side to move, and the en passant target.

use std::fmt;

use crate::color::Color;
use crate::error::GameError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Piece placement plus side to move and en passant target.
///
/// `Board` is a plain `Copy` value: legality checking works by applying a
/// candidate move to a scratch copy and testing whether the mover's king is
/// attacked afterward, so copying must stay a fixed-size memcpy with no
/// allocation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Row-major grid; `None` is an empty square.
    squares: [[Option<Piece>; 8]; 8],
    /// Which side moves next.
    side_to_move: Color,
    /// En passant target square, set for exactly one ply after a double pawn push.
    en_passant: Option<Square>,
}

/// Back-rank piece order, from file 'a' to file 'h'.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Return an empty board with White to move.
    pub fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            en_passant: None,
        }
    }

    /// Return the standard starting position.
    ///
    /// Black's back rank is row 0, White's is row 7 (see [`Square`] for the
    /// orientation convention).
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(kind, Color::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Place a piece (or clear with `None`) on the given square.
    ///
    /// Intended for setting up constructed positions; normal play mutates the
    /// board only through the game session's move application.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Return the square of the given color's king, or `None` if absent.
    ///
    /// A missing king never occurs during a valid game, but speculative move
    /// simulation and constructed test positions must handle it.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.piece_at(sq)
                .is_some_and(|p| p.is(PieceKind::King, color))
        })
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Set the side to move.
    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Return the en passant target square, if any.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /// Set or clear the en passant target square.
    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    /// Count the pieces of the given color.
    pub fn piece_count(&self, color: Color) -> u32 {
        Square::all()
            .filter(|&sq| self.piece_at(sq).is_some_and(|p| p.color() == color))
            .count() as u32
    }

    /// Iterate over the occupied squares of the given color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|p| p.color() == color)
                .map(|p| (sq, p))
        })
    }

    /// Validate the structural invariants: at most one king and at most 16
    /// pieces per side.
    ///
    /// Construction and tests may hold positions that violate these checks;
    /// production play never does, so the session debug-asserts this after
    /// every applied move.
    pub fn validate(&self) -> Result<(), GameError> {
        for color in Color::ALL {
            let kings = Square::all()
                .filter(|&sq| {
                    self.piece_at(sq)
                        .is_some_and(|p| p.is(PieceKind::King, color))
                })
                .count() as u32;
            if kings > 1 {
                return Err(GameError::InvalidKingCount {
                    color,
                    count: kings,
                });
            }
            let count = self.piece_count(color);
            if count > 16 {
                return Err(GameError::InvalidPieceCount { color, count });
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board({} to move)", self.side_to_move)?;
        write!(f, "{}", self.pretty())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let sq = Square::new(row, col).unwrap();
                let c = match self.0.piece_at(sq) {
                    Some(piece) => piece.fen_char(),
                    None => '.',
                };
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
