// src/lib.rs

pub mod api;
pub mod config;
pub mod llm;
pub mod parse;
pub mod prompt;
pub mod seed;
pub mod state;

// Export commonly used items
pub use state::AppState;
