pub mod config;
pub mod directory;
pub mod errors;
pub mod handlers;
pub mod listing;
pub mod models;
pub mod state;
pub mod storage;
pub mod utils;
