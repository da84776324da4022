//! Pokedex CLI Library
//!
//! Exposes the response cache, API client, commands and REPL so the binary and
//! integration tests share one implementation.

pub mod app;
pub mod cache;
pub mod cli;
pub mod commands;
pub mod data;
pub mod pokedex;
pub mod repl;
