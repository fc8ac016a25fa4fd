pub mod compute;
pub mod config;
pub mod constants;
pub mod enemies;
pub mod entities;
pub mod geometry;
pub mod highscores;
pub mod input;
pub mod snapshot;
pub mod spawner;
