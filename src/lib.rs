pub mod config;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod roster;
pub mod scoring;
pub mod teams;
