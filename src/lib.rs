//! Naflix Library
//!
//! A movie and TV catalog viewer: fetches categorized lists and single-title
//! details from TMDB and exposes them as loading/ready view-state.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;

pub use error::{Error, Result};
