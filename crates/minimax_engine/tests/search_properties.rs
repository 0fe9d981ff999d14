//! Search properties exercised on real chess positions.

use chess_rules::{Board, Move};
use minimax_engine::{
    DEFAULT_DEPTH_LIMIT, GameTree, Outcome, PieceType, Side, alpha_beta, evaluate, minimax,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Decorator counting every capability call the searchers make.
struct Instrumented {
    board: Board,
    applied: u64,
    undone: u64,
}

impl Instrumented {
    fn new(board: Board) -> Self {
        Self {
            board,
            applied: 0,
            undone: 0,
        }
    }
}

impl GameTree for Instrumented {
    type Move = Move;

    fn legal_moves(&mut self) -> Vec<Move> {
        self.board.legal_moves()
    }

    fn apply_move(&mut self, mv: Move) {
        self.applied += 1;
        GameTree::apply_move(&mut self.board, mv);
    }

    fn undo_move(&mut self) {
        self.undone += 1;
        GameTree::undo_move(&mut self.board);
    }

    fn outcome(&mut self) -> Outcome {
        GameTree::outcome(&mut self.board)
    }

    fn piece_count(&self, piece: PieceType, owner: Side) -> u32 {
        GameTree::piece_count(&self.board, piece, owner)
    }
}

/// The start position plus snapshots of seeded random playouts: a small
/// corpus of legal, non-trivial positions.
fn position_corpus() -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut corpus = vec![Board::startpos()];
    for _ in 0..3 {
        let mut board = Board::startpos();
        for ply in 0..24 {
            if board.status().is_over() {
                break;
            }
            let moves = board.legal_moves();
            let mv = *moves.choose(&mut rng).expect("ongoing position has moves");
            board.make_move(mv);
            if ply % 8 == 7 {
                corpus.push(board.clone());
            }
        }
    }
    corpus
}

#[test]
fn alpha_beta_matches_minimax() {
    for (index, board) in position_corpus().iter().enumerate() {
        for depth in 0..=2 {
            let plain = minimax(&mut board.clone(), depth);
            let pruned = alpha_beta(&mut board.clone(), depth);
            assert_eq!(
                plain.score, pruned.score,
                "scores diverged at position {index}, depth {depth}"
            );
            assert!(plain.score.is_finite());
        }
    }
}

#[test]
fn alpha_beta_matches_minimax_at_depth_three() {
    for (index, board) in position_corpus().iter().take(2).enumerate() {
        let plain = minimax(&mut board.clone(), 3);
        let pruned = alpha_beta(&mut board.clone(), 3);
        assert_eq!(
            plain.score, pruned.score,
            "scores diverged at position {index}, depth 3"
        );
    }
}

#[test]
fn searches_balance_their_calls_and_restore_the_position() {
    for (index, board) in position_corpus().iter().enumerate() {
        for depth in 0..=2 {
            for pruned in [false, true] {
                let mut game = Instrumented::new(board.clone());
                let result = if pruned {
                    alpha_beta(&mut game, depth)
                } else {
                    minimax(&mut game, depth)
                };
                assert_eq!(
                    game.applied, game.undone,
                    "unbalanced make/unmake at position {index}, depth {depth}"
                );
                assert_eq!(
                    &game.board, board,
                    "position {index} not restored after depth-{depth} search"
                );
                if depth == 0 {
                    assert_eq!(game.applied, 0);
                    assert!(result.best_move.is_none());
                }
            }
        }
    }
}

#[test]
fn depth_zero_returns_the_static_evaluation() {
    let mut board = Board::startpos();
    let static_score = evaluate(&mut board);
    let plain = minimax(&mut board, 0);
    let pruned = alpha_beta(&mut board, 0);
    assert_eq!(plain.score, static_score);
    assert_eq!(pruned.score, static_score);
    assert!(plain.best_move.is_none());
    assert!(pruned.best_move.is_none());
    assert_eq!(plain.nodes, 1);
    assert_eq!(pruned.nodes, 1);
}

#[test]
fn the_opening_position_searches_cleanly_at_the_default_depth() {
    let mut board = Board::startpos();
    let plain = minimax(&mut board, DEFAULT_DEPTH_LIMIT);
    let pruned = alpha_beta(&mut board, DEFAULT_DEPTH_LIMIT);
    assert!(plain.score.is_finite());
    assert_eq!(plain.score, pruned.score);
    assert!(plain.best_move.is_some());
    assert!(pruned.best_move.is_some());
}

#[test]
fn first_generated_move_wins_ties() {
    // Every first move from the start position leaves material level, so
    // all twenty replies score 0.0 at depth 1 and the first generated
    // move (Nb1-c3) must be kept.
    let mut board = Board::startpos();
    let result = minimax(&mut board, 1);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.best_move, Some(Move::new(1, 18)));
}

#[test]
fn pruning_visits_fewer_nodes_for_the_same_score() {
    let positions = [
        Board::startpos(),
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"),
    ];
    for (index, board) in positions.iter().enumerate() {
        let plain = minimax(&mut board.clone(), 2);
        let pruned = alpha_beta(&mut board.clone(), 2);
        assert_eq!(plain.score, pruned.score, "position {index}");
        assert!(
            pruned.nodes < plain.nodes,
            "expected pruning to cut work at position {index}: {} vs {}",
            pruned.nodes,
            plain.nodes
        );
    }
}

#[test]
fn finds_the_mate_in_one() {
    // Ra8#: the rook delivers a back-rank mate while the white king holds
    // the escape squares.
    let mut board = Board::from_fen("6k1/8/6K1/8/8/8/8/R7 w - - 0 1");
    let plain = minimax(&mut board, 2);
    let pruned = alpha_beta(&mut board, 2);
    assert_eq!(plain.score, 1.0);
    assert_eq!(pruned.score, 1.0);
    assert_eq!(plain.best_move, Some(Move::new(0, 56)));
    assert_eq!(pruned.best_move, Some(Move::new(0, 56)));
}

#[test]
fn the_root_is_always_the_maximizer() {
    // Black to move with Ra1# available. Under fixed White-positive
    // scoring the root still maximizes, so the search steers AWAY from
    // Black's mate; Black-relative callers negate scores externally.
    let mut board = Board::from_fen("r7/8/8/8/8/6k1/8/6K1 b - - 0 1");
    let result = minimax(&mut board, 2);
    assert!(result.score > -1.0);
    assert_ne!(result.best_move, Some(Move::new(56, 0)));

    let pruned = alpha_beta(&mut board, 2);
    assert_eq!(pruned.score, result.score);
}
