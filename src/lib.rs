pub mod analysis;
pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod render;
pub mod repair;
pub mod stamp;
pub mod walker;
