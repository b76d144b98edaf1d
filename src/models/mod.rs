//! Data models.

pub mod catalog;
pub mod config;
pub mod detail;
pub mod route;
