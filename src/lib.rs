pub mod client;
pub use client::*;

pub mod cli;

pub mod commands;
pub use commands::*;

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod logging;

pub mod models;
pub use models::*;
