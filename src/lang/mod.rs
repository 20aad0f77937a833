/*!
# Rust Language Module

This Rust module holds the surface of the TECO command language:
the command record built while scanning, the command buffer with its
text-argument delimiters, register names, and errors.

*/

pub type Int = i64;
pub type LineNumber = Option<usize>;

/// The default text-argument delimiter.
pub const ESC: u8 = 0x1b;

#[macro_use]
mod error;
mod buffer;
mod cmd;
mod ident;

pub use buffer::is_whitespace;
pub use buffer::CmdBuf;
pub use cmd::Cmd;
pub use error::printable;
pub use error::Error;
pub use error::ErrorCode;
pub use ident::RegName;
pub use ident::REGISTERS;
