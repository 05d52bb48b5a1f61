//! # Connect Four
//!
//! A two-player drop-piece game for the terminal. Players take turns dropping
//! pieces into columns; the first to line up four in a row, column or
//! diagonal wins.
//!
//! ## Modules
//!
//! - [`game`] — Board engine: column storage, win detection, rendering
//! - [`ui`] — Console front end: input prompts, menu, game session
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
