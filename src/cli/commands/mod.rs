pub mod config;
pub mod edit;
pub mod log;
pub mod stats;
