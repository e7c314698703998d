//! different utility modules used throughout the project
/// logging setup and saving rules into files
pub mod logger;
