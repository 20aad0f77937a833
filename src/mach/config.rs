use super::op::Precedence;
use crate::lang::Int;

/// ## Interpreter configuration
///
/// The flag registers `E1`, `E2`, `EH` and `ET` plus the numeric radix
/// and trace switch. Owned by one interpreter; commands read and write
/// it through the flag commands.

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub e1: Int,
    pub e2: Int,
    pub eh: Int,
    pub et: Int,
    pub radix: Int,
    pub trace: bool,
    pub limits: Limits,
}

/// Extended operators inside parentheses.
pub const E1_XOPER: Int = 1;
/// C-like operator precedence.
pub const E1_CLIKE: Int = 2;
/// `!!` comments run to end of line.
pub const E1_COMMENTS: Int = 4;
/// Paired bracket delimiters after `@`.
pub const E1_BRACES: Int = 8;

pub const E2_ZERO: Int = 1;
pub const E2_ARGS: Int = 2;
pub const E2_NESTING: Int = 4;

pub const EH_TERSE: Int = 1;
pub const EH_ECHO: Int = 4;

pub const ET_NOECHO: Int = 8;
pub const ET_ABORT: Int = 128;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub expr: usize,
    pub loops: usize,
    pub ifs: usize,
    pub macros: usize,
}

impl Default for Limits {
    fn default() -> Limits {
        Limits {
            expr: 64,
            loops: 32,
            ifs: 32,
            macros: 64,
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            e1: E1_XOPER | E1_COMMENTS | E1_BRACES,
            e2: 0,
            eh: 2,
            et: 0,
            radix: 10,
            trace: false,
            limits: Limits::default(),
        }
    }
}

impl Config {
    pub fn xoper(&self) -> bool {
        self.e1 & E1_XOPER != 0
    }
    pub fn precedence(&self) -> Precedence {
        if self.e1 & E1_CLIKE != 0 {
            Precedence::CLike
        } else {
            Precedence::Flat
        }
    }
    pub fn comments(&self) -> bool {
        self.e1 & E1_COMMENTS != 0
    }
    pub fn braces(&self) -> bool {
        self.e1 & E1_BRACES != 0
    }
    pub fn div_error(&self) -> bool {
        self.e2 & E2_ZERO != 0
    }
    pub fn strict_args(&self) -> bool {
        self.e2 & E2_ARGS != 0
    }
    pub fn strict_nesting(&self) -> bool {
        self.e2 & E2_NESTING != 0
    }
    pub fn echo(&self) -> bool {
        self.et & ET_NOECHO == 0
    }
    pub fn abort_on_error(&self) -> bool {
        self.et & ET_ABORT != 0
    }
}
