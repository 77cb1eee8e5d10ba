//! The game session: move application, history, captures, status, and result.

use tracing::{debug, info};

use crate::board::Board;
use crate::color::Color;
use crate::error::GameError;
use crate::mines::MineField;
use crate::movegen;
use crate::notation;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::record::{GameResult, MoveRecord};
use crate::square::Square;

/// A pawn standing on its final rank, waiting for [`Game::promote_pawn`].
#[derive(Debug, Clone, Copy)]
struct PendingPromotion {
    square: Square,
    /// The position the move was played from, kept so the notation can be
    /// re-rendered once the promotion piece is known.
    before: Board,
}

/// A single chess game: board, history, captured pieces, optional mine
/// field, and result.
///
/// The session exclusively owns all of its state; every mutation goes
/// through [`Game::move_piece`] and [`Game::promote_pawn`], whether the move
/// came from local input or from a network peer. The engine is synchronous
/// and does no locking; callers serialize access.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    history: Vec<MoveRecord>,
    /// Captured pieces, indexed by the captured piece's color.
    captured: [Vec<Piece>; 2],
    result: GameResult,
    mines: Option<MineField>,
    last_move_triggered_mine: bool,
    pending: Option<PendingPromotion>,
}

impl Game {
    /// Start a standard game from the initial position.
    pub fn new() -> Game {
        Game::with_board(Board::starting_position())
    }

    /// Start a game from an arbitrary position (analysis and tests).
    pub fn with_board(board: Board) -> Game {
        Game {
            board,
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            result: GameResult::InProgress,
            mines: None,
            last_move_triggered_mine: false,
            pending: None,
        }
    }

    /// Start a standard game with the given mine layout.
    pub fn with_mines(mines: MineField) -> Game {
        let mut game = Game::new();
        game.mines = Some(mines);
        game
    }

    /// Install a mine layout (e.g. one announced by the hosting peer).
    ///
    /// # Errors
    ///
    /// The layout is fixed before the first move and set at most once;
    /// violating either returns [`GameError::MinesFixed`].
    pub fn set_minefield(&mut self, mines: MineField) -> Result<(), GameError> {
        if !self.history.is_empty() || self.mines.is_some() {
            return Err(GameError::MinesFixed);
        }
        self.mines = Some(mines);
        Ok(())
    }

    /// The current position.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// The side to move.
    #[inline]
    pub fn current_player(&self) -> Color {
        self.board.side_to_move()
    }

    /// The en passant target square, if the previous move was a double pawn
    /// push.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.board.en_passant_target()
    }

    /// The given color's king square.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::KingNotFound`] if no such king is on the board.
    pub fn find_king(&self, color: Color) -> Result<Square, GameError> {
        self.board
            .find_king(color)
            .ok_or(GameError::KingNotFound { color })
    }

    /// The game result.
    #[inline]
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Human-readable result string.
    pub fn result_string(&self) -> String {
        self.result.to_string()
    }

    /// The move history; the index of an entry is its ply number.
    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The rendered notation of every move, in play order.
    pub fn all_move_notations(&self) -> Vec<String> {
        self.history.iter().map(|r| r.notation.clone()).collect()
    }

    /// Captured pieces of the given color, in capture order.
    #[inline]
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    /// The remaining mined squares (empty when the variant is off).
    pub fn mine_positions(&self) -> &[Square] {
        self.mines.as_ref().map_or(&[], |m| m.positions())
    }

    /// Return `true` if a mine hides on the given square.
    pub fn is_mine_at(&self, sq: Square) -> bool {
        self.mines.as_ref().is_some_and(|m| m.contains(sq))
    }

    /// Return `true` if the most recently applied move landed on a mine.
    #[inline]
    pub fn last_move_triggered_mine(&self) -> bool {
        self.last_move_triggered_mine
    }

    /// Return `true` if `from -> to` is legal for the side to move: the
    /// piece's movement pattern allows it, the path is unblocked, and the
    /// mover's own king is not left in check.
    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        movegen::is_valid_move(&self.board, from, to)
    }

    /// Return `true` if the given color's king is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        movegen::in_check(&self.board, color)
    }

    /// Return `true` if the given color has at least one legal move.
    pub fn has_any_valid_moves(&self, color: Color) -> bool {
        movegen::has_any_valid_moves(&self.board, color)
    }

    /// Checkmate: in check with no legal moves.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_valid_moves(color)
    }

    /// Stalemate: not in check, but no legal moves either.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_valid_moves(color)
    }

    /// Draw by material: neither side can possibly deliver checkmate.
    pub fn is_insufficient_material(&self) -> bool {
        insufficient_material(&self.board)
    }

    /// Return `true` if the piece that just moved to `sq` is a pawn on its
    /// final rank, awaiting [`Game::promote_pawn`].
    pub fn needs_promotion(&self, sq: Square) -> bool {
        self.pending.is_some_and(|p| p.square == sq)
    }

    /// Validate and apply a move.
    ///
    /// On success the board is mutated (including capture, castling rook
    /// relocation, en passant removal, en passant target update, and mine
    /// detonation), the move is recorded with its notation, the turn
    /// switches, and the result transitions if the game ended. On any error
    /// the session is left unchanged.
    ///
    /// A pawn reaching its final rank is *not* auto-promoted: the ply stays
    /// open until [`Game::promote_pawn`] resolves it, and further moves are
    /// rejected with [`GameError::PromotionPending`] in the meantime.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), GameError> {
        if self.result.is_over() {
            return Err(GameError::GameOver);
        }
        if let Some(pending) = self.pending {
            return Err(GameError::PromotionPending {
                square: pending.square,
            });
        }
        if !movegen::is_valid_move(&self.board, from, to) {
            return Err(GameError::IllegalMove { from, to });
        }

        let before = self.board;
        let mover = self.board.side_to_move();
        let applied = movegen::apply(&mut self.board, from, to);

        if let Some((_, piece)) = applied.captured {
            self.captured[piece.color().index()].push(piece);
        }

        // Detonation consumes the mine and the piece that landed on it.
        self.last_move_triggered_mine = false;
        let mut king_detonated = false;
        if let Some(mines) = self.mines.as_mut()
            && mines.remove(to)
        {
            self.last_move_triggered_mine = true;
            if let Some(piece) = self.board.piece_at(to) {
                self.board.set_piece(to, None);
                self.captured[piece.color().index()].push(piece);
                king_detonated = piece.kind() == PieceKind::King;
            }
        }

        let awaiting_promotion =
            !self.last_move_triggered_mine && movegen::needs_promotion(&self.board, to);

        let opponent = mover.flip();
        let is_check = movegen::in_check(&self.board, opponent);
        let is_checkmate = is_check && !movegen::has_any_valid_moves(&self.board, opponent);

        let mut record = MoveRecord {
            from,
            to,
            piece: applied.piece.kind(),
            color: mover,
            is_capture: applied.captured.is_some(),
            is_castling: applied.is_castling,
            is_en_passant: applied.is_en_passant,
            is_promotion: false,
            promotion: None,
            is_check,
            is_checkmate,
            triggered_mine: self.last_move_triggered_mine,
            notation: String::new(),
        };
        record.notation = notation::render(&before, &record);
        debug!(notation = %record.notation, player = %mover, "move applied");
        self.history.push(record);

        debug_assert!(
            self.board.validate().is_ok(),
            "move application broke a board invariant"
        );

        if awaiting_promotion {
            self.pending = Some(PendingPromotion { square: to, before });
        } else {
            self.conclude(mover, king_detonated);
        }
        Ok(())
    }

    /// Replace the pending promotion pawn with the chosen kind, finish the
    /// ply's record, and settle the game state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPromotion`] unless `square` holds the
    /// pawn whose promotion is pending and `kind` is a knight, bishop, rook,
    /// or queen.
    pub fn promote_pawn(&mut self, square: Square, kind: PieceKind) -> Result<(), GameError> {
        let pending = self
            .pending
            .filter(|p| p.square == square)
            .ok_or(GameError::InvalidPromotion { square })?;
        if !kind.is_promotion_target() {
            return Err(GameError::InvalidPromotion { square });
        }
        let pawn = self
            .board
            .piece_at(square)
            .ok_or(GameError::InvalidPromotion { square })?;

        self.board.set_piece(square, Some(pawn.with_kind(kind)));
        self.pending = None;

        let mover = pawn.color();
        let opponent = mover.flip();
        let is_check = movegen::in_check(&self.board, opponent);
        let is_checkmate = is_check && !movegen::has_any_valid_moves(&self.board, opponent);

        let record = self
            .history
            .last_mut()
            .expect("a pending promotion always follows a recorded move");
        record.is_promotion = true;
        record.promotion = Some(kind);
        record.is_check = is_check;
        record.is_checkmate = is_checkmate;
        record.notation = notation::render(&pending.before, record);
        debug!(notation = %record.notation, "pawn promoted");

        self.conclude(mover, false);
        Ok(())
    }

    /// Record that the given color resigns.
    pub fn resign(&mut self, color: Color) -> Result<(), GameError> {
        self.transition(match color {
            Color::White => GameResult::WhiteResigns,
            Color::Black => GameResult::BlackResigns,
        })
    }

    /// Record that the given color's clock ran out.
    pub fn timeout(&mut self, color: Color) -> Result<(), GameError> {
        self.transition(match color {
            Color::White => GameResult::WhiteTimeout,
            Color::Black => GameResult::BlackTimeout,
        })
    }

    /// Settle the result after a completed ply.
    fn conclude(&mut self, mover: Color, king_detonated: bool) {
        let opponent = mover.flip();
        let outcome = if king_detonated {
            // The mover's own king blew up.
            Some(win_for(opponent))
        } else {
            let in_check = movegen::in_check(&self.board, opponent);
            let any_moves = movegen::has_any_valid_moves(&self.board, opponent);
            if in_check && !any_moves {
                Some(win_for(mover))
            } else if !in_check && !any_moves {
                Some(GameResult::Draw)
            } else if insufficient_material(&self.board) {
                Some(GameResult::Draw)
            } else {
                None
            }
        };
        if let Some(result) = outcome {
            // Cannot fail: move application is rejected once the game is over.
            let _ = self.transition(result);
        }
    }

    /// Transition out of `InProgress` exactly once.
    fn transition(&mut self, result: GameResult) -> Result<(), GameError> {
        if self.result.is_over() {
            return Err(GameError::ResultAlreadySet);
        }
        self.result = result;
        info!(%result, "game over");
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

const fn win_for(color: Color) -> GameResult {
    match color {
        Color::White => GameResult::WhiteWins,
        Color::Black => GameResult::BlackWins,
    }
}

/// King vs king, king and one minor vs king, or king and bishop each with
/// the bishops on opposite-colored squares.
fn insufficient_material(board: &Board) -> bool {
    let mut extras: [Vec<(Square, PieceKind)>; 2] = [Vec::new(), Vec::new()];
    for color in Color::ALL {
        for (sq, piece) in board.pieces_of(color) {
            if piece.kind() != PieceKind::King {
                extras[color.index()].push((sq, piece.kind()));
            }
        }
    }
    let is_minor = |kind: PieceKind| matches!(kind, PieceKind::Knight | PieceKind::Bishop);
    let (white, black) = (&extras[0], &extras[1]);
    match (white.len(), black.len()) {
        (0, 0) => true,
        (1, 0) => is_minor(white[0].1),
        (0, 1) => is_minor(black[0].1),
        (1, 1) => {
            white[0].1 == PieceKind::Bishop
                && black[0].1 == PieceKind::Bishop
                && white[0].0.is_dark() != black[0].0.is_dark()
        }
        _ => false,
    }
}
