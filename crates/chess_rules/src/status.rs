//! Game termination detection.

use crate::board::Board;
use crate::types::*;

/// How a game stands. Checkmate carries the winning color; every other
/// terminal variant is some flavor of draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl Board {
    /// Status of the position on the board. Checkmate and stalemate take
    /// precedence over the draw clocks.
    pub fn status(&mut self) -> GameStatus {
        if !self.has_legal_move() {
            return if self.in_check(self.side_to_move) {
                GameStatus::Checkmate {
                    winner: self.side_to_move.opponent(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        if self.is_fifty_move_rule() {
            return GameStatus::FiftyMoveRule;
        }
        if self.is_threefold_repetition() {
            return GameStatus::ThreefoldRepetition;
        }
        if self.is_insufficient_material() {
            return GameStatus::InsufficientMaterial;
        }
        GameStatus::Ongoing
    }

    /// Fifty full moves (100 plies) without a capture or pawn move.
    pub fn is_fifty_move_rule(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// The current position has occurred at least three times since the
    /// board was constructed. Positions before construction (e.g. before
    /// the FEN the board was loaded from) are unknowable and not counted.
    pub fn is_threefold_repetition(&self) -> bool {
        let current = self.position_hash();
        let mut count = usize::from(self.initial_hash == current);
        count += self
            .history
            .iter()
            .filter(|entry| entry.hash_after == current)
            .count();
        count >= 3
    }

    /// Neither side retains enough material to deliver mate: bare kings,
    /// a lone minor piece, or one bishop each on same-shaded squares.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors: Vec<(Color, PieceKind, Square)> = Vec::new();
        for sq in 0..64u8 {
            let Some(piece) = self.piece_at(sq) else {
                continue;
            };
            match piece.kind {
                PieceKind::King => {}
                PieceKind::Knight | PieceKind::Bishop => minors.push((piece.color, piece.kind, sq)),
                // A pawn, rook, or queen can still force mate.
                _ => return false,
            }
        }
        match minors.as_slice() {
            [] | [_] => true,
            [(a, PieceKind::Bishop, first), (b, PieceKind::Bishop, second)] if a != b => {
                is_dark_square(*first) == is_dark_square(*second)
            }
            _ => false,
        }
    }

    pub fn piece_count(&self, color: Color, kind: PieceKind) -> u32 {
        self.squares
            .iter()
            .flatten()
            .filter(|piece| piece.color == color && piece.kind == kind)
            .count() as u32
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
