//! # Connect Four
//!
//! Game-state engine for Connect Four on a 6x7 board: gravity drops, turn
//! sequencing, and win/draw detection. Rendering and input mapping live with
//! the caller, which feeds columns (or cells) in and reads [`game::Status`]
//! and board cells back out.
//!
//! ## Modules
//!
//! - [`game`] — Board, player, and the game engine state machine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
