//! Crate root module declarations for the Plum Board rules core.
//!
//! Exposes the board model, per-piece movement patterns, legal move
//! generation, status resolution, the minimax AI, and the session helpers
//! that sequence them, so binaries, tests and hosts can import stable paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
    pub mod position_history;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod ray_casting;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_mode;
    pub mod game_session;
    pub mod match_outcome;
    pub mod remote_snapshot;
}

pub mod utils {
    pub mod algebraic;
    pub mod auto_play;
    pub mod fen_parser;
    pub mod render_game_state;
}
