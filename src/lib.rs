//! # TECO
//!
//! A command-language interpreter in the TECO tradition: single character
//! commands, Q-registers, macros, loops and conditionals.
//!
//! Install with `cargo install teco-lang` and run `teco`. The prompt is an
//! asterisk. A command string runs when it ends with two ESC characters,
//! typed as `$$`.
//! ```text
//! *1+2=$$
//! 3
//! *█
//! ```
//!
//! Name one or more files on the command line to run them as indirect
//! command files instead.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/commands.rs"]
#[allow(non_snake_case)]
pub mod __Commands;

pub mod lang;
pub mod mach;
pub mod term;
