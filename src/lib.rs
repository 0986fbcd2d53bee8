//! Crate root module declarations for the Damson Chess engine project.
//!
//! This file exposes all top-level subsystems (rules adapter, scoring,
//! search, engines, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod rules;
pub mod scoring;

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod render_board;
}
