pub mod board;
pub mod coordinate;
pub mod definitions;
pub mod engine;
pub mod game;
pub mod utils;
