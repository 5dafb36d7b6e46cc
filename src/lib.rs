pub mod config;
pub mod engine;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod map;
pub mod movement;
pub mod renderer;
pub mod scene;
pub mod window;
