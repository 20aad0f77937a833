use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Number of ordinary registers in a table: `0-9` then `A-Z`.
pub const REGISTERS: usize = 36;

const SEARCH: usize = REGISTERS;
const FILENAME: usize = REGISTERS + 1;

/// ## Canonical Q-register name
///
/// Register names are a single digit or letter, case-insensitive,
/// optionally local. `_` and `*` name two write-only accumulators.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegName {
    index: usize,
    local: bool,
}

impl RegName {
    pub fn new(ch: u8, local: bool) -> Result<RegName> {
        let index = match ch {
            b'0'..=b'9' => (ch - b'0') as usize,
            b'A'..=b'Z' => (ch - b'A') as usize + 10,
            b'a'..=b'z' => (ch - b'a') as usize + 10,
            _ => return Err(error!(IllegalRegister @ ch)),
        };
        Ok(RegName { index, local })
    }

    /// Like `new` but also accepts the accumulators, for the commands
    /// that write them.
    pub fn accumulator(ch: u8, local: bool) -> Result<RegName> {
        match ch {
            b'_' if !local => Ok(RegName {
                index: SEARCH,
                local,
            }),
            b'*' if !local => Ok(RegName {
                index: FILENAME,
                local,
            }),
            _ => RegName::new(ch, local),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_local(&self) -> bool {
        self.local
    }

    pub fn is_special(&self) -> bool {
        self.index >= REGISTERS
    }

    pub fn to_char(&self) -> char {
        match self.index {
            0..=9 => (b'0' + self.index as u8) as char,
            SEARCH => '_',
            FILENAME => '*',
            _ => (b'A' + (self.index - 10) as u8) as char,
        }
    }
}

impl std::fmt::Display for RegName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.local {
            write!(f, ".{}", self.to_char())
        } else {
            write!(f, "{}", self.to_char())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(RegName::new(b'a', false), RegName::new(b'A', false));
        assert_eq!(RegName::new(b'z', true).unwrap().index(), 35);
        assert_eq!(RegName::new(b'7', true).unwrap().to_string(), ".7");
    }

    #[test]
    fn test_accumulators_are_write_only() {
        assert!(RegName::new(b'_', false).is_err());
        assert!(RegName::new(b'*', false).is_err());
        assert!(RegName::accumulator(b'_', false).unwrap().is_special());
        assert!(RegName::accumulator(b'*', true).is_err());
    }
}
