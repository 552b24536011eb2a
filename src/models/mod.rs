//! Defines the data structures and models used throughout the application.
//!
//! Each upstream API gets its own module with typed response structs; clients
//! decode into these rather than passing untyped JSON through to the CLI.

mod news;
mod posts;
mod weather;

pub use news::*;
pub use posts::*;
pub use weather::*;
