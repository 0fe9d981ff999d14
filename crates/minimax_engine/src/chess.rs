//! [`GameTree`] implementation for the chess rules engine.

use chess_rules::{Board, Color, GameStatus, Move, PieceKind};

use crate::game::{GameTree, Outcome, PieceType, Side};

fn color_of(side: Side) -> Color {
    match side {
        Side::White => Color::White,
        Side::Black => Color::Black,
    }
}

fn kind_of(piece: PieceType) -> PieceKind {
    match piece {
        PieceType::Pawn => PieceKind::Pawn,
        PieceType::Knight => PieceKind::Knight,
        PieceType::Bishop => PieceKind::Bishop,
        PieceType::Rook => PieceKind::Rook,
        PieceType::Queen => PieceKind::Queen,
    }
}

impl GameTree for Board {
    type Move = Move;

    fn legal_moves(&mut self) -> Vec<Move> {
        Board::legal_moves(self)
    }

    fn apply_move(&mut self, mv: Move) {
        self.make_move(mv);
    }

    fn undo_move(&mut self) {
        self.unmake_move();
    }

    fn outcome(&mut self) -> Outcome {
        match self.status() {
            GameStatus::Ongoing => Outcome::Ongoing,
            GameStatus::Checkmate {
                winner: Color::White,
            } => Outcome::WhiteWins,
            GameStatus::Checkmate {
                winner: Color::Black,
            } => Outcome::BlackWins,
            // Stalemate and the draw rules all score alike.
            _ => Outcome::Draw,
        }
    }

    fn piece_count(&self, piece: PieceType, owner: Side) -> u32 {
        Board::piece_count(self, color_of(owner), kind_of(piece))
    }
}

#[cfg(test)]
#[path = "chess_tests.rs"]
mod chess_tests;
