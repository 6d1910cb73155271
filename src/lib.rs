// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod calendar;
pub mod change;
pub mod error;
pub mod file;
pub mod model;
pub mod report;
pub mod resolve;
pub mod runner;
pub mod store;

pub use error::{Error, Result};
