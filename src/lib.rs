pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod exchange;
pub mod generator;
pub mod store;
pub mod vault;
