//! Depth-limited minimax search, with and without alpha-beta pruning.
//!
//! Both searchers score from a FIXED White-positive perspective: the root
//! is always the maximizing node, no matter which side is to move. A
//! caller asking for Black's best move must negate externally. This
//! mirrors the evaluator's convention and is deliberate; it is not
//! player-relative (negamax) scoring.

use crate::eval::evaluate;
use crate::game::{AppliedMove, GameTree, Outcome};

/// Search depth in plies used when the caller has no opinion.
pub const DEFAULT_DEPTH_LIMIT: u8 = 2;

/// Result of a search: the backed-up score, the chosen move, and the
/// number of nodes visited (for work accounting).
///
/// `best_move` is `None` only when the root itself was a cutoff node —
/// terminal, or searched with a zero depth limit.
#[derive(Clone, Copy, Debug)]
pub struct SearchResult<M> {
    pub score: f64,
    pub best_move: Option<M>,
    pub nodes: u64,
}

/// True where the recursion stops: terminal positions and nodes at the
/// depth limit. Depth counts plies from the search root, starting at 0.
pub fn is_cutoff<G: GameTree>(game: &mut G, depth: u8, depth_limit: u8) -> bool {
    game.outcome() != Outcome::Ongoing || depth == depth_limit
}

/// Full-width minimax to `depth_limit` plies.
pub fn minimax<G: GameTree>(game: &mut G, depth_limit: u8) -> SearchResult<G::Move> {
    let mut nodes = 0;
    let (score, best_move) = max_node(game, 0, depth_limit, &mut nodes);
    SearchResult {
        score,
        best_move,
        nodes,
    }
}

/// Minimax with alpha-beta pruning. Returns the same score as
/// [`minimax`] for any position and depth; the chosen move can differ
/// only among moves of equal score, and strictly fewer nodes are visited
/// whenever any subtree proves irrelevant.
pub fn alpha_beta<G: GameTree>(game: &mut G, depth_limit: u8) -> SearchResult<G::Move> {
    let mut nodes = 0;
    let (score, best_move) = max_node_ab(
        game,
        0,
        depth_limit,
        f64::NEG_INFINITY,
        f64::INFINITY,
        &mut nodes,
    );
    SearchResult {
        score,
        best_move,
        nodes,
    }
}

fn max_node<G: GameTree>(
    game: &mut G,
    depth: u8,
    depth_limit: u8,
    nodes: &mut u64,
) -> (f64, Option<G::Move>) {
    *nodes += 1;
    if is_cutoff(game, depth, depth_limit) {
        return (evaluate(game), None);
    }

    let moves = game.legal_moves();
    debug_assert!(
        !moves.is_empty(),
        "rules engine produced no moves for a non-terminal position"
    );

    let mut best = f64::NEG_INFINITY;
    let mut best_move = None;
    for mv in moves {
        let (value, _) = {
            let mut applied = AppliedMove::new(game, mv);
            min_node(applied.game(), depth + 1, depth_limit, nodes)
        };
        // Strictly greater: the first of equally good moves stays.
        if value > best {
            best = value;
            best_move = Some(mv);
        }
    }
    (best, best_move)
}

fn min_node<G: GameTree>(
    game: &mut G,
    depth: u8,
    depth_limit: u8,
    nodes: &mut u64,
) -> (f64, Option<G::Move>) {
    *nodes += 1;
    if is_cutoff(game, depth, depth_limit) {
        return (evaluate(game), None);
    }

    let moves = game.legal_moves();
    debug_assert!(
        !moves.is_empty(),
        "rules engine produced no moves for a non-terminal position"
    );

    let mut best = f64::INFINITY;
    let mut best_move = None;
    for mv in moves {
        let (value, _) = {
            let mut applied = AppliedMove::new(game, mv);
            max_node(applied.game(), depth + 1, depth_limit, nodes)
        };
        if value < best {
            best = value;
            best_move = Some(mv);
        }
    }
    (best, best_move)
}

fn max_node_ab<G: GameTree>(
    game: &mut G,
    depth: u8,
    depth_limit: u8,
    mut alpha: f64,
    beta: f64,
    nodes: &mut u64,
) -> (f64, Option<G::Move>) {
    *nodes += 1;
    if is_cutoff(game, depth, depth_limit) {
        return (evaluate(game), None);
    }

    let moves = game.legal_moves();
    debug_assert!(
        !moves.is_empty(),
        "rules engine produced no moves for a non-terminal position"
    );

    let mut best = f64::NEG_INFINITY;
    let mut best_move = None;
    for mv in moves {
        let (value, _) = {
            let mut applied = AppliedMove::new(game, mv);
            min_node_ab(applied.game(), depth + 1, depth_limit, alpha, beta, nodes)
        };
        if value > best {
            best = value;
            best_move = Some(mv);
            alpha = alpha.max(best);
        }
        // The move is already undone here; the cutoff tests the running
        // best value, not the child value just returned.
        if best >= beta {
            return (best, best_move);
        }
    }
    (best, best_move)
}

fn min_node_ab<G: GameTree>(
    game: &mut G,
    depth: u8,
    depth_limit: u8,
    alpha: f64,
    mut beta: f64,
    nodes: &mut u64,
) -> (f64, Option<G::Move>) {
    *nodes += 1;
    if is_cutoff(game, depth, depth_limit) {
        return (evaluate(game), None);
    }

    let moves = game.legal_moves();
    debug_assert!(
        !moves.is_empty(),
        "rules engine produced no moves for a non-terminal position"
    );

    let mut best = f64::INFINITY;
    let mut best_move = None;
    for mv in moves {
        let (value, _) = {
            let mut applied = AppliedMove::new(game, mv);
            max_node_ab(applied.game(), depth + 1, depth_limit, alpha, beta, nodes)
        };
        if value < best {
            best = value;
            best_move = Some(mv);
            beta = beta.min(best);
        }
        if best <= alpha {
            return (best, best_move);
        }
    }
    (best, best_move)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
