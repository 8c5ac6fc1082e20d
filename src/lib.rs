pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod ui;
pub mod world;

pub use error::Error;
