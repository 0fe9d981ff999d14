use crate::types::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };
}

/// Everything needed to reverse one move, kept on the board's own history
/// stack so callers undo in strict LIFO order without holding tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct HistoryEntry {
    pub(crate) mv: Move,
    pub(crate) captured: Option<Piece>,
    /// Differs from `mv.to` for en-passant captures.
    pub(crate) captured_square: Option<Square>,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) rook_move: Option<(Square, Square)>,
    /// Position hash after the move, for repetition counting.
    pub(crate) hash_after: u64,
}

/// A chess position plus the move history that produced it.
///
/// Moves are played with [`Board::make_move`] and reversed with
/// [`Board::unmake_move`]; the board mutates in place and is never copied
/// by either call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<HistoryEntry>,
    /// Hash of the position the board was constructed with; the repetition
    /// count includes it alongside the per-move hashes in `history`.
    pub(crate) initial_hash: u64,
}

impl Board {
    pub fn startpos() -> Self {
        Self::from_fen(START_FEN)
    }

    /// Parses a FEN string. The halfmove clock and fullmove number fields
    /// may be omitted. Panics on malformed input; FEN here is a test and
    /// setup convenience, not an untrusted input path.
    pub fn from_fen(fen: &str) -> Self {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        assert!(fields.len() >= 4, "invalid FEN: expected at least 4 fields");

        let mut squares = [None; 64];
        let ranks: Vec<&str> = fields[0].split('/').collect();
        assert!(ranks.len() == 8, "invalid FEN: expected 8 ranks");
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row as i8; // FEN lists rank 8 first
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    file += skip as i8;
                    continue;
                }
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let kind = match ch.to_ascii_lowercase() {
                    'p' => PieceKind::Pawn,
                    'n' => PieceKind::Knight,
                    'b' => PieceKind::Bishop,
                    'r' => PieceKind::Rook,
                    'q' => PieceKind::Queen,
                    'k' => PieceKind::King,
                    _ => panic!("invalid FEN: unknown piece '{ch}'"),
                };
                let sq = square_at(file, rank).expect("invalid FEN: rank overflow");
                squares[sq as usize] = Some(Piece { color, kind });
                file += 1;
            }
            assert!(file == 8, "invalid FEN: rank '{rank_str}' does not cover 8 files");
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => panic!("invalid FEN: side to move '{other}'"),
        };

        let mut castling = CastlingRights::NONE;
        if fields[2] != "-" {
            for ch in fields[2].chars() {
                match ch {
                    'K' => castling.white_kingside = true,
                    'Q' => castling.white_queenside = true,
                    'k' => castling.black_kingside = true,
                    'q' => castling.black_queenside = true,
                    _ => panic!("invalid FEN: castling flag '{ch}'"),
                }
            }
        }

        let en_passant = if fields[3] == "-" {
            None
        } else {
            Some(parse_square(fields[3]).expect("invalid FEN: bad en-passant square"))
        };

        let halfmove_clock = fields
            .get(4)
            .map(|f| f.parse().expect("invalid FEN: bad halfmove clock"))
            .unwrap_or(0);
        let fullmove_number = fields
            .get(5)
            .map(|f| f.parse().expect("invalid FEN: bad fullmove number"))
            .unwrap_or(1);

        let mut board = Board {
            squares,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
            initial_hash: 0,
        };
        board.initial_hash = board.position_hash();
        board
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq as usize]
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    fn put(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq as usize] = piece;
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece {
            color,
            kind: PieceKind::King,
        };
        (0..64u8).find(|&sq| self.piece_at(sq) == Some(king))
    }

    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(sq) => self.is_square_attacked(sq, color.opponent()),
            None => false,
        }
    }

    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        let file = file_of(target);
        let rank = rank_of(target);

        // An attacking pawn sits one rank closer to its own side.
        let pawn_rank = match by {
            Color::White => rank - 1,
            Color::Black => rank + 1,
        };
        for df in [-1, 1] {
            if let Some(sq) = square_at(file + df, pawn_rank)
                && self.holds(sq, by, PieceKind::Pawn)
            {
                return true;
            }
        }

        for (df, dr) in KNIGHT_STEPS {
            if let Some(sq) = square_at(file + df, rank + dr)
                && self.holds(sq, by, PieceKind::Knight)
            {
                return true;
            }
        }

        for (df, dr) in KING_STEPS {
            if let Some(sq) = square_at(file + df, rank + dr)
                && self.holds(sq, by, PieceKind::King)
            {
                return true;
            }
        }

        for (df, dr) in DIAGONAL_DIRS {
            if self.ray_finds(target, df, dr, by, PieceKind::Bishop) {
                return true;
            }
        }
        for (df, dr) in ORTHOGONAL_DIRS {
            if self.ray_finds(target, df, dr, by, PieceKind::Rook) {
                return true;
            }
        }

        false
    }

    fn holds(&self, sq: Square, color: Color, kind: PieceKind) -> bool {
        self.piece_at(sq) == Some(Piece { color, kind })
    }

    /// Scans outward from `from` and reports whether the first occupied
    /// square holds an enemy `slider` or queen.
    fn ray_finds(&self, from: Square, df: i8, dr: i8, by: Color, slider: PieceKind) -> bool {
        let mut file = file_of(from) + df;
        let mut rank = rank_of(from) + dr;
        while let Some(sq) = square_at(file, rank) {
            if let Some(piece) = self.piece_at(sq) {
                return piece.color == by && (piece.kind == slider || piece.kind == PieceKind::Queen);
            }
            file += df;
            rank += dr;
        }
        false
    }

    /// Plays `mv` in place. Only moves produced by [`Board::legal_moves`]
    /// (or at least pseudo-legal ones) are meaningful here.
    pub fn make_move(&mut self, mv: Move) {
        let moved = self.piece_at(mv.from).expect("make_move: empty from-square");
        let prior_castling = self.castling;
        let prior_en_passant = self.en_passant;
        let prior_halfmove = self.halfmove_clock;
        let prior_fullmove = self.fullmove_number;

        let mut captured = self.piece_at(mv.to);
        let mut captured_square = captured.map(|_| mv.to);
        if mv.en_passant {
            // The captured pawn is behind the destination square.
            let sq = match moved.color {
                Color::White => mv.to - 8,
                Color::Black => mv.to + 8,
            };
            captured = self.piece_at(sq);
            captured_square = Some(sq);
            self.put(sq, None);
        }

        self.put(mv.from, None);
        let placed = match mv.promotion {
            Some(kind) => Piece {
                color: moved.color,
                kind,
            },
            None => moved,
        };
        self.put(mv.to, Some(placed));

        let mut rook_move = None;
        if mv.castle {
            let (rook_from, rook_to) = match mv.to {
                6 => (7, 5),    // e1-g1, rook h1-f1
                2 => (0, 3),    // e1-c1, rook a1-d1
                62 => (63, 61), // e8-g8, rook h8-f8
                58 => (56, 59), // e8-c8, rook a8-d8
                other => panic!("make_move: castle to non-castling square {other}"),
            };
            let rook = self.piece_at(rook_from).expect("make_move: castle without rook");
            self.put(rook_from, None);
            self.put(rook_to, Some(rook));
            rook_move = Some((rook_from, rook_to));
        }

        // A king or rook leaving its home square forfeits the right; so
        // does a capture landing on a rook's home square.
        self.strip_castling_rights(mv.from);
        self.strip_castling_rights(mv.to);

        self.en_passant = None;
        if moved.kind == PieceKind::Pawn && (rank_of(mv.from) - rank_of(mv.to)).abs() == 2 {
            self.en_passant = Some((mv.from + mv.to) / 2);
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.opponent();

        let hash_after = self.position_hash();
        self.history.push(HistoryEntry {
            mv,
            captured,
            captured_square,
            castling: prior_castling,
            en_passant: prior_en_passant,
            halfmove_clock: prior_halfmove,
            fullmove_number: prior_fullmove,
            rook_move,
            hash_after,
        });
    }

    /// Reverses the most recent [`Board::make_move`]. Panics if there is
    /// nothing left to undo.
    pub fn unmake_move(&mut self) {
        let entry = self.history.pop().expect("unmake_move: no move to undo");
        let mv = entry.mv;

        self.side_to_move = self.side_to_move.opponent();
        self.castling = entry.castling;
        self.en_passant = entry.en_passant;
        self.halfmove_clock = entry.halfmove_clock;
        self.fullmove_number = entry.fullmove_number;

        if let Some((rook_from, rook_to)) = entry.rook_move {
            let rook = self.piece_at(rook_to).expect("unmake_move: missing castled rook");
            self.put(rook_to, None);
            self.put(rook_from, Some(rook));
        }

        let mover = self.piece_at(mv.to).expect("unmake_move: vacated destination");
        let restored = match mv.promotion {
            Some(_) => Piece {
                color: mover.color,
                kind: PieceKind::Pawn,
            },
            None => mover,
        };
        self.put(mv.to, None);
        self.put(mv.from, Some(restored));

        if let Some(sq) = entry.captured_square {
            self.put(sq, entry.captured);
        }
    }

    fn strip_castling_rights(&mut self, sq: Square) {
        match sq {
            0 => self.castling.white_queenside = false,
            7 => self.castling.white_kingside = false,
            4 => {
                self.castling.white_kingside = false;
                self.castling.white_queenside = false;
            }
            56 => self.castling.black_queenside = false,
            63 => self.castling.black_kingside = false,
            60 => {
                self.castling.black_kingside = false;
                self.castling.black_queenside = false;
            }
            _ => {}
        }
    }

    /// FNV-style hash of the position: piece placement, side to move,
    /// castling rights, and en-passant square. The move clocks are left
    /// out so repeated positions collide on purpose.
    pub fn position_hash(&self) -> u64 {
        fn mix(hash: u64, value: u64) -> u64 {
            (hash ^ value).wrapping_mul(0x0000_0100_0000_01b3)
        }

        let mut hash = 0xcbf2_9ce4_8422_2325;
        for (idx, slot) in self.squares.iter().enumerate() {
            if let Some(piece) = slot {
                let code = ((idx as u64) << 4) | ((piece.kind as u64) << 1) | piece.color as u64;
                hash = mix(hash, 0x1000 | code);
            }
        }
        hash = mix(hash, 1 + self.side_to_move as u64);
        let rights = (self.castling.white_kingside as u64)
            | (self.castling.white_queenside as u64) << 1
            | (self.castling.black_kingside as u64) << 2
            | (self.castling.black_queenside as u64) << 3;
        hash = mix(hash, 0x2000 | rights);
        hash = mix(hash, self.en_passant.map_or(0x3000, |sq| 0x4000 | sq as u64));
        hash
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
