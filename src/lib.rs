// Export all necessary modules
pub mod cli;
pub mod config;
pub mod error;
pub mod settings;
pub mod utils;
