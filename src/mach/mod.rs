/*!
## Rust Machine Module

This Rust module is the TECO interpreter: the expression stack, the
register store, the edit buffer, the command tables, and the scan and
execute loop that ties them together.

*/

mod config;
mod dispatch;
mod edit;
mod exec;
mod expr;
mod flow;
mod invoke;
mod io;
mod machine;
mod op;
mod operation;
mod register;
mod runtime;
mod scan;
mod stack;
mod tag;

pub use config::*;
pub use edit::EditBuffer;
pub use expr::{Arith, Expr};
pub use io::{Disk, Files, MemFiles, Terminal, TypeAhead};
pub use machine::Machine;
pub use op::{Operator, Precedence};
pub use operation::Operation;
pub use register::{Register, Registers};
pub use runtime::Event;
pub use runtime::Runtime;
pub use scan::VERSION;
pub use stack::Stack;

#[cfg(test)]
mod tests;
