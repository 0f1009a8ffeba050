//! GitHub repository star leaderboard
//!
//! - repository list parsing in `input/`
//! - typed GitHub REST client in `github/`
//! - two-pass fetch in `aggregate/`, markdown output in `render/`
//! - `pipeline::run` ties them together for the binary

pub mod aggregate;
pub mod config;
pub mod github;
pub mod input;
pub mod pipeline;
pub mod render;
