use super::*;

#[test]
fn outcome_maps_game_status() {
    let mut board = Board::startpos();
    assert_eq!(GameTree::outcome(&mut board), Outcome::Ongoing);

    let mut board = Board::from_fen(
        "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
    );
    assert_eq!(GameTree::outcome(&mut board), Outcome::WhiteWins);

    let mut board = Board::from_fen(
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
    );
    assert_eq!(GameTree::outcome(&mut board), Outcome::BlackWins);

    // Stalemate and material draws both collapse to Draw.
    let mut board = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert_eq!(GameTree::outcome(&mut board), Outcome::Draw);
    let mut board = Board::from_fen("8/8/8/4k3/8/4KN2/8/8 w - - 0 1");
    assert_eq!(GameTree::outcome(&mut board), Outcome::Draw);
}

#[test]
fn piece_counts_come_through_the_adapter() {
    let board = Board::startpos();
    assert_eq!(GameTree::piece_count(&board, PieceType::Pawn, Side::White), 8);
    assert_eq!(GameTree::piece_count(&board, PieceType::Queen, Side::Black), 1);
    assert_eq!(GameTree::piece_count(&board, PieceType::Rook, Side::White), 2);
}

#[test]
fn apply_and_undo_round_trip_through_the_trait() {
    let mut board = Board::startpos();
    let pristine = board.clone();
    let moves = GameTree::legal_moves(&mut board);
    assert_eq!(moves.len(), 20);
    GameTree::apply_move(&mut board, moves[0]);
    assert_ne!(board, pristine);
    GameTree::undo_move(&mut board);
    assert_eq!(board, pristine);
}
