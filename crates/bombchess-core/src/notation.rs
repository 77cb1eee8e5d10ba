//! Algebraic notation rendering.

use crate::board::Board;
use crate::movegen;
use crate::piece_kind::PieceKind;
use crate::record::MoveRecord;
use crate::square::Square;

/// Render standard algebraic notation for a recorded move.
///
/// `before` is the position the move was played from; it drives the
/// disambiguation search. The check/checkmate suffix comes from the record's
/// flags, which the session computes on the post-move position.
pub(crate) fn render(before: &Board, record: &MoveRecord) -> String {
    let suffix = if record.is_checkmate {
        "#"
    } else if record.is_check {
        "+"
    } else {
        ""
    };

    if record.is_castling {
        let base = if record.to.col() == 6 { "O-O" } else { "O-O-O" };
        return format!("{base}{suffix}");
    }

    let mut out = String::new();
    if record.piece == PieceKind::Pawn {
        if record.is_capture {
            out.push(record.from.file_char());
            out.push('x');
        }
    } else {
        out.push_str(record.piece.letter());
        out.push_str(&disambiguator(before, record));
        if record.is_capture {
            out.push('x');
        }
    }
    out.push(record.to.file_char());
    out.push(record.to.rank_char());
    if let Some(promo) = record.promotion {
        out.push('=');
        out.push_str(promo.letter());
    }
    out.push_str(suffix);
    out
}

/// Compute the disambiguator for a non-pawn move: nothing when the mover is
/// the only same-kind piece that can legally reach the destination, the
/// origin file when no rival shares it, the origin rank when no rival shares
/// that, and the full origin square when both collide.
fn disambiguator(before: &Board, record: &MoveRecord) -> String {
    let rivals: Vec<Square> = before
        .pieces_of(record.color)
        .filter(|&(sq, p)| sq != record.from && p.kind() == record.piece)
        .map(|(sq, _)| sq)
        .filter(|&sq| movegen::is_valid_move(before, sq, record.to))
        .collect();

    if rivals.is_empty() {
        return String::new();
    }
    let file_clash = rivals.iter().any(|s| s.col() == record.from.col());
    let rank_clash = rivals.iter().any(|s| s.row() == record.from.row());
    if !file_clash {
        record.from.file_char().to_string()
    } else if !rank_clash {
        record.from.rank_char().to_string()
    } else {
        record.from.to_string()
    }
}
