use super::{Cmd, Error, ESC};
use crate::error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Command buffer
///
/// The bytes being executed: a top-level command string, a register's
/// text run as a macro, or an indirect file. The read position doubles
/// as the register's read cursor while a macro runs.

#[derive(Debug, Clone)]
pub struct CmdBuf {
    text: Rc<[u8]>,
    pos: usize,
    line: usize,
}

impl Default for CmdBuf {
    fn default() -> CmdBuf {
        CmdBuf::new(Vec::<u8>::new())
    }
}

impl From<&str> for CmdBuf {
    fn from(s: &str) -> CmdBuf {
        CmdBuf::new(s.as_bytes())
    }
}

impl CmdBuf {
    pub fn new<T: Into<Rc<[u8]>>>(text: T) -> CmdBuf {
        CmdBuf {
            text: text.into(),
            pos: 0,
            line: 1,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.text.get(self.pos).copied()
    }

    pub fn fetch(&mut self) -> Option<u8> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == b'\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Next byte of a command that cannot end here.
    pub fn require(&mut self) -> Result<u8> {
        match self.fetch() {
            Some(ch) => Ok(ch),
            None => Err(error!(Unterminated)),
        }
    }

    /// Consumes the next byte if it is `ch`.
    pub fn next_is(&mut self, ch: u8) -> bool {
        if self.peek() == Some(ch) {
            self.fetch();
            true
        } else {
            false
        }
    }

    /// Moves to a position saved together with its line.
    pub fn jump(&mut self, pos: usize, line: usize) {
        self.pos = pos.min(self.text.len());
        self.line = line;
    }

    /// Moves to a position whose line is not known.
    pub fn set_pos(&mut self, pos: usize) {
        let pos = pos.min(self.text.len());
        let line = 1 + self.text[..pos].iter().filter(|&&c| c == b'\n').count();
        self.jump(pos, line);
    }

    pub fn to_end(&mut self) {
        self.set_pos(self.text.len());
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !is_whitespace(ch) {
                break;
            }
            self.fetch();
        }
    }

    /// Skips the remainder of the current line, leaving the line feed.
    pub fn skip_line(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == b'\n' {
                break;
            }
            self.fetch();
        }
    }

    /// Scans one or two text arguments into `cmd`. `delim` is the
    /// command's default delimiter; an at-sign modifier replaces it with
    /// the next non-blank character, and with `braces` an opening bracket
    /// is closed by its partner.
    pub fn scan_texts(&mut self, cmd: &mut Cmd, delim: u8, count: usize, braces: bool) -> Result<()> {
        let mut open = delim;
        let mut close = delim;
        if cmd.atsign {
            self.skip_whitespace();
            open = self.require()?;
            if open != ESC && !(b' '..0x7f).contains(&open) {
                return Err(error!(IllegalDelimiter @ open));
            }
            close = if braces { closing(open) } else { open };
        }
        cmd.delim = open;
        cmd.text1 = self.scan_until(close)?;
        if count > 1 {
            if open != close {
                self.skip_whitespace();
                let again = self.require()?;
                if again != open {
                    return Err(error!(IllegalDelimiter @ again));
                }
            }
            cmd.text2 = self.scan_until(close)?;
        }
        Ok(())
    }

    fn scan_until(&mut self, delim: u8) -> Result<Vec<u8>> {
        let start = self.pos;
        loop {
            match self.fetch() {
                Some(ch) if ch == delim => return Ok(self.text[start..self.pos - 1].to_vec()),
                Some(_) => continue,
                None => return Err(error!(Unterminated)),
            }
        }
    }
}

pub fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\r' | b'\n' | 0x0c)
}

fn closing(ch: u8) -> u8 {
    match ch {
        b'(' => b')',
        b'<' => b'>',
        b'[' => b']',
        b'{' => b'}',
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn texts(s: &str, atsign: bool, count: usize, braces: bool) -> Result<(Vec<u8>, Vec<u8>)> {
        let mut buf = CmdBuf::from(s);
        let mut cmd = Cmd::default();
        cmd.atsign = atsign;
        buf.scan_texts(&mut cmd, ESC, count, braces)?;
        Ok((cmd.text1, cmd.text2))
    }

    #[test]
    fn test_escape_delimited() {
        let (t1, t2) = texts("abc\x1bdef\x1b", false, 2, false).unwrap();
        assert_eq!((&t1[..], &t2[..]), (&b"abc"[..], &b"def"[..]));
    }

    #[test]
    fn test_at_sign_delimiter() {
        let (t1, t2) = texts("  /a b/c/", true, 2, false).unwrap();
        assert_eq!((&t1[..], &t2[..]), (&b"a b"[..], &b"c"[..]));
    }

    #[test]
    fn test_paired_braces() {
        let (t1, t2) = texts("{one} {two}", true, 2, true).unwrap();
        assert_eq!((&t1[..], &t2[..]), (&b"one"[..], &b"two"[..]));
        let err = texts("{one}(two)", true, 2, true).unwrap_err();
        assert_eq!(err.code(), ErrorCode::IllegalDelimiter);
        let (t1, _) = texts("{one}{", true, 1, false).unwrap();
        assert_eq!(&t1[..], &b"one}"[..]);
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(
            texts("abc", false, 1, false).unwrap_err().code(),
            ErrorCode::Unterminated
        );
        assert_eq!(
            texts("\x07abc\x07", true, 1, false).unwrap_err().code(),
            ErrorCode::IllegalDelimiter
        );
    }

    #[test]
    fn test_lines() {
        let mut buf = CmdBuf::from("a\nb\nc");
        while buf.fetch().is_some() {}
        assert_eq!(buf.line(), 3);
        buf.set_pos(2);
        assert_eq!((buf.pos(), buf.line()), (2, 2));
    }
}
