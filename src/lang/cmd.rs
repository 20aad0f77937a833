use super::{Int, RegName, ESC};

/// ## Command record
///
/// Built while one command is scanned and handed to its exec function.
/// Operand-only scans (digits, `Q`, `.`) leave it untouched apart from
/// clearing modifiers they consumed.

#[derive(Debug, Clone, PartialEq)]
pub struct Cmd {
    pub c1: u8,
    pub c2: u8,
    pub c3: u8,
    pub m: Option<Int>,
    pub n: Option<Int>,
    pub colon: bool,
    pub dcolon: bool,
    pub atsign: bool,
    pub delim: u8,
    pub text1: Vec<u8>,
    pub text2: Vec<u8>,
    pub reg: Option<RegName>,
    /// The m/n pair survives into the next command.
    pub keep: bool,
}

impl Default for Cmd {
    fn default() -> Cmd {
        Cmd {
            c1: 0,
            c2: 0,
            c3: 0,
            m: None,
            n: None,
            colon: false,
            dcolon: false,
            atsign: false,
            delim: ESC,
            text1: vec![],
            text2: vec![],
            reg: None,
            keep: false,
        }
    }
}

impl Cmd {
    /// Record handed back to the caller: n becomes the next command's
    /// argument, m is dropped.
    pub fn returns(&mut self, value: Int) {
        self.m = None;
        self.n = Some(value);
        self.keep = true;
    }

    /// Colon-modified commands report success as -1 and failure as 0.
    pub fn returns_status(&mut self, success: bool) {
        self.returns(if success { -1 } else { 0 });
    }

    pub fn name(&self) -> String {
        let mut s = super::printable(self.c1);
        for &c in [self.c2, self.c3].iter() {
            if c != 0 {
                s.push_str(&super::printable(c));
            }
        }
        s
    }
}

impl std::fmt::Display for Cmd {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(m) = self.m {
            write!(f, "{},", m)?;
        }
        if let Some(n) = self.n {
            write!(f, "{}", n)?;
        }
        if self.dcolon {
            write!(f, "::")?;
        } else if self.colon {
            write!(f, ":")?;
        }
        if self.atsign {
            write!(f, "@")?;
        }
        write!(f, "{}", self.name())?;
        if let Some(reg) = self.reg {
            write!(f, "{}", reg)?;
        }
        if !self.text1.is_empty() {
            write!(f, "{}", String::from_utf8_lossy(&self.text1))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mut cmd = Cmd::default();
        cmd.c1 = b'F';
        cmd.c2 = b'>';
        cmd.colon = true;
        cmd.n = Some(3);
        assert_eq!(cmd.to_string(), "3:F>");
    }

    #[test]
    fn test_returns() {
        let mut cmd = Cmd::default();
        cmd.m = Some(1);
        cmd.returns_status(false);
        assert_eq!((cmd.m, cmd.n, cmd.keep), (None, Some(0), true));
    }
}
