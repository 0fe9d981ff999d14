//! Adversarial game-tree search.
//!
//! Depth-limited minimax and alpha-beta searchers over any two-player
//! zero-sum perfect-information game implementing [`GameTree`], plus a
//! material evaluator and the [`GameTree`] implementation for
//! `chess_rules::Board`.
//!
//! Scoring is FIXED White-positive everywhere: the root of a search is
//! always the maximizing side, even when Black is to move. Callers who
//! want Black-relative values negate the score themselves.

mod chess;
mod eval;
mod game;
mod search;

pub use eval::evaluate;
pub use game::{AppliedMove, GameTree, Outcome, PieceType, Side};
pub use search::{DEFAULT_DEPTH_LIMIT, SearchResult, alpha_beta, is_cutoff, minimax};
