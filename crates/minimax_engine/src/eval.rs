//! Material-based position evaluation.

use crate::game::{GameTree, Outcome, PieceType, Side};

/// Material weights per piece type. Bishops weigh 4 here, one more than
/// knights; these exact values define the heuristic.
const MATERIAL_WEIGHTS: [(PieceType, i32); 5] = [
    (PieceType::Pawn, 1),
    (PieceType::Knight, 3),
    (PieceType::Bishop, 4),
    (PieceType::Rook, 5),
    (PieceType::Queen, 9),
];

/// Divisor that brings the material sum onto the terminal-score scale.
const HEURISTIC_SCALE: f64 = 100.0;

/// Scores a position, White-positive.
///
/// Terminal positions score exactly `1.0` (White has mated), `-1.0`
/// (Black has mated), or `0.0` (any draw). Ongoing positions score the
/// weighted material balance divided by 100, so every heuristic score is
/// far smaller in magnitude than a decided game.
pub fn evaluate<G: GameTree>(game: &mut G) -> f64 {
    match game.outcome() {
        Outcome::WhiteWins => 1.0,
        Outcome::BlackWins => -1.0,
        Outcome::Draw => 0.0,
        Outcome::Ongoing => material_balance(game),
    }
}

fn material_balance<G: GameTree>(game: &G) -> f64 {
    let mut balance = 0;
    for (piece, weight) in MATERIAL_WEIGHTS {
        let white = game.piece_count(piece, Side::White) as i32;
        let black = game.piece_count(piece, Side::Black) as i32;
        balance += weight * (white - black);
    }
    f64::from(balance) / HEURISTIC_SCALE
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
