//! Move generation: pseudo-legal moves per piece, filtered down to legal
//! moves by playing each one and testing for self-check.

use crate::board::Board;
use crate::types::*;

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

struct CastleRule {
    side: Color,
    kingside: bool,
    king_from: Square,
    king_to: Square,
    /// Squares between king and rook that must be empty.
    clear: &'static [Square],
    /// Squares the king crosses (destination included) that must not be
    /// attacked.
    safe: &'static [Square],
}

const CASTLE_RULES: [CastleRule; 4] = [
    CastleRule {
        side: Color::White,
        kingside: true,
        king_from: 4,
        king_to: 6,
        clear: &[5, 6],
        safe: &[5, 6],
    },
    CastleRule {
        side: Color::White,
        kingside: false,
        king_from: 4,
        king_to: 2,
        clear: &[3, 2, 1],
        safe: &[3, 2],
    },
    CastleRule {
        side: Color::Black,
        kingside: true,
        king_from: 60,
        king_to: 62,
        clear: &[61, 62],
        safe: &[61, 62],
    },
    CastleRule {
        side: Color::Black,
        kingside: false,
        king_from: 60,
        king_to: 58,
        clear: &[59, 58, 57],
        safe: &[59, 58],
    },
];

impl Board {
    /// All legal moves for the side to move, in a deterministic order
    /// (board scan from a1 to h8, fixed step tables per piece). The board
    /// is used as scratch space internally but left exactly as found.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.pseudo_moves(&mut moves);
        let mover = self.side_to_move;
        moves.retain(|&mv| {
            self.make_move(mv);
            let legal = !self.in_check(mover);
            self.unmake_move();
            legal
        });
        moves
    }

    /// Whether the side to move has any legal move, without generating
    /// them all.
    pub fn has_legal_move(&mut self) -> bool {
        let mut moves = Vec::with_capacity(64);
        self.pseudo_moves(&mut moves);
        let mover = self.side_to_move;
        moves.into_iter().any(|mv| {
            self.make_move(mv);
            let legal = !self.in_check(mover);
            self.unmake_move();
            legal
        })
    }

    fn pseudo_moves(&self, out: &mut Vec<Move>) {
        for from in 0..64u8 {
            let Some(piece) = self.piece_at(from) else {
                continue;
            };
            if piece.color != self.side_to_move {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => self.pawn_moves(from, piece.color, out),
                PieceKind::Knight => self.step_moves(from, piece.color, &KNIGHT_STEPS, out),
                PieceKind::Bishop => self.ray_moves(from, piece.color, &DIAGONAL_DIRS, out),
                PieceKind::Rook => self.ray_moves(from, piece.color, &ORTHOGONAL_DIRS, out),
                PieceKind::Queen => {
                    self.ray_moves(from, piece.color, &DIAGONAL_DIRS, out);
                    self.ray_moves(from, piece.color, &ORTHOGONAL_DIRS, out);
                }
                PieceKind::King => {
                    self.step_moves(from, piece.color, &KING_STEPS, out);
                    self.castle_moves(from, piece.color, out);
                }
            }
        }
    }

    fn pawn_moves(&self, from: Square, color: Color, out: &mut Vec<Move>) {
        let file = file_of(from);
        let rank = rank_of(from);
        let (step, start_rank, promotion_rank): (i8, i8, i8) = match color {
            Color::White => (1, 1, 7),
            Color::Black => (-1, 6, 0),
        };

        if let Some(to) = square_at(file, rank + step)
            && self.piece_at(to).is_none()
        {
            push_pawn_move(from, to, promotion_rank, out);
            if rank == start_rank
                && let Some(two) = square_at(file, rank + 2 * step)
                && self.piece_at(two).is_none()
            {
                out.push(Move::new(from, two));
            }
        }

        for df in [-1, 1] {
            let Some(to) = square_at(file + df, rank + step) else {
                continue;
            };
            match self.piece_at(to) {
                Some(target) if target.color != color => {
                    push_pawn_move(from, to, promotion_rank, out);
                }
                None if self.en_passant == Some(to) => {
                    let mut mv = Move::new(from, to);
                    mv.en_passant = true;
                    out.push(mv);
                }
                _ => {}
            }
        }
    }

    fn step_moves(&self, from: Square, color: Color, steps: &[(i8, i8)], out: &mut Vec<Move>) {
        let file = file_of(from);
        let rank = rank_of(from);
        for &(df, dr) in steps {
            let Some(to) = square_at(file + df, rank + dr) else {
                continue;
            };
            match self.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(target) if target.color != color => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }

    fn ray_moves(&self, from: Square, color: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
        for &(df, dr) in dirs {
            let mut file = file_of(from) + df;
            let mut rank = rank_of(from) + dr;
            while let Some(to) = square_at(file, rank) {
                match self.piece_at(to) {
                    None => out.push(Move::new(from, to)),
                    Some(target) => {
                        if target.color != color {
                            out.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                file += df;
                rank += dr;
            }
        }
    }

    fn castle_moves(&self, from: Square, color: Color, out: &mut Vec<Move>) {
        for rule in &CASTLE_RULES {
            if rule.side != color || rule.king_from != from || !self.castle_right(rule) {
                continue;
            }
            if rule.clear.iter().any(|&sq| self.piece_at(sq).is_some()) {
                continue;
            }
            // No castling out of or through check.
            if self.in_check(color) {
                continue;
            }
            let enemy = color.opponent();
            if rule.safe.iter().any(|&sq| self.is_square_attacked(sq, enemy)) {
                continue;
            }
            let mut mv = Move::new(from, rule.king_to);
            mv.castle = true;
            out.push(mv);
        }
    }

    fn castle_right(&self, rule: &CastleRule) -> bool {
        match (rule.side, rule.kingside) {
            (Color::White, true) => self.castling.white_kingside,
            (Color::White, false) => self.castling.white_queenside,
            (Color::Black, true) => self.castling.black_kingside,
            (Color::Black, false) => self.castling.black_queenside,
        }
    }
}

fn push_pawn_move(from: Square, to: Square, promotion_rank: i8, out: &mut Vec<Move>) {
    if rank_of(to) == promotion_rank {
        for kind in PROMOTION_KINDS {
            let mut mv = Move::new(from, to);
            mv.promotion = Some(kind);
            out.push(mv);
        }
    } else {
        out.push(Move::new(from, to));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
