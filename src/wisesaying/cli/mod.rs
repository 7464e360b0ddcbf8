//! # CLI Layer
//!
//! This module is **one possible UI client** for wisesaying: a line-oriented REPL.
//!
//! It is the only place in the codebase that:
//! - Reads stdin and writes stdout
//! - Handles startup flags and environment variables
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup.rs`: clap definition of the startup flags
//! - `request.rs`: parsing of `action?key=value&...` lines
//! - `commands.rs`: context setup and the session loop
//! - `render.rs`: list tables and message printing

mod commands;
mod render;
mod request;
mod setup;

pub use commands::run;
