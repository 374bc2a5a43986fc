//! Noughts CLI library - terminal front end for the noughts engine.
//!
//! Translates typed `row column` commands into engine moves and engine
//! notifications into console lines (text or JSON).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod input;
mod session;

// Crate-level exports - CLI
pub use cli::{Cli, OutputFormat};

// Crate-level exports - Console rendering
pub use console::ConsoleObserver;

// Crate-level exports - Input parsing
pub use input::{Command, ParseCommandError, parse_line};

// Crate-level exports - Session loop
pub use session::{SessionOptions, SessionSummary, run_session};
