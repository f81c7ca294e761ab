//! Configuration loading for CredVault.

pub mod settings;

pub use settings::Settings;
