//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes defining commands, parsing arguments, handling user interaction
//! (prompts, spinners), and rendering fetched data in the terminal.

mod commands;

pub use commands::*;
