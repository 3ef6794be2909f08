//! Sketchpad shell library target.
//!
//! The command language, the session that applies it to a canvas, and the
//! read-execute loop. The binary entry point is in `main.rs`.

pub mod config;
pub mod parser;
pub mod repl;
pub mod session;
pub mod util;

pub use config::{Cli, ShellConfig};
pub use parser::{Command, CommandParser, ParseError};
pub use repl::Summary;
pub use session::{Outcome, Session, ShellError};
