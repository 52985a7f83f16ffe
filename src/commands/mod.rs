//! Subcommand handlers for the srp binary

pub mod config;
pub mod frames;
pub mod info;
pub mod play;
pub mod pose;
