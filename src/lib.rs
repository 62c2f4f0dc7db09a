//! Crate root module declarations for the Quince Chess engine.
//!
//! A mailbox chess core: board model, attack detection, strict move
//! legality with castling and promotion, brute-force move generation, a
//! four-part static evaluator and a depth-limited alpha-beta search.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_move_validator;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliding;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod difficulty;
    pub mod minimax;
}

pub mod tables {
    pub mod piece_square_tables;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_text;
    pub mod render_game_state;
}
