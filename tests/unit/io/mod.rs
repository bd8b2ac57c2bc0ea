pub mod cli;
pub mod error;
pub mod image;
pub mod progress;
