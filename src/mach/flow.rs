use super::dispatch::Reject::*;
use super::dispatch::Scan;
use super::machine::{Cond, Loop};
use super::Machine;
use crate::error;
use crate::lang::{Cmd, Error, ErrorCode, Int};

type Result<T> = std::result::Result<T, Error>;

impl Machine {
    /// Scans forward without executing until one of `stops` is found at
    /// the current nesting level, returning it. The stop command itself
    /// is consumed. Running off the end of the buffer is `missing`.
    pub(super) fn skip_to(&mut self, stops: &[u8], missing: ErrorCode) -> Result<u8> {
        let skipping = self.skipping;
        self.skipping = true;
        self.expr.push_context();
        let result = self.skip_loop(stops, missing);
        self.expr.pop_context();
        self.skipping = skipping;
        result
    }

    fn skip_loop(&mut self, stops: &[u8], missing: ErrorCode) -> Result<u8> {
        let mut loops = 0;
        let mut ifs = 0;
        let mut cmd = Cmd::default();
        loop {
            match self.scan_cmd(&mut cmd)? {
                Scan::End => return Err(Error::new(missing)),
                Scan::Operand => continue,
                Scan::Command(_) => {}
            }
            let c1 = cmd.c1;
            cmd = Cmd::default();
            self.expr.clear();
            let level = match c1 {
                b'<' => {
                    loops += 1;
                    false
                }
                b'"' => {
                    ifs += 1;
                    false
                }
                b'>' if loops > 0 => {
                    loops -= 1;
                    false
                }
                b'\'' if ifs > 0 => {
                    ifs -= 1;
                    false
                }
                b'|' => ifs == 0,
                b'>' | b'\'' => true,
                _ => false,
            };
            if level && stops.contains(&c1) {
                return Ok(c1);
            }
        }
    }

    // *** Loops

    pub(super) fn exec_loop_start(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M])?;
        if let Some(n) = cmd.n {
            if n <= 0 {
                self.skip_to(b">", ErrorCode::MissingRightAngle)?;
                return Ok(());
            }
        }
        let lp = Loop {
            count: cmd.n.unwrap_or(0),
            start: self.buf.pos(),
            line: self.buf.line(),
            if_depth: self.ifs.len(),
        };
        self.loops.push(lp)
    }

    pub(super) fn exec_loop_end(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M, N])?;
        self.loop_end()
    }

    fn loop_end(&mut self) -> Result<()> {
        let strict = self.config.strict_nesting();
        let if_depth = self.ifs.len();
        let lp = match self.loops.last_mut() {
            Some(lp) => lp,
            None => return Err(error!(NotInLoop)),
        };
        if strict && lp.if_depth != if_depth {
            return Err(error!(BadNesting));
        }
        if lp.count == 1 {
            self.loops.pop();
            return Ok(());
        }
        if lp.count > 1 {
            lp.count -= 1;
        }
        let (start, line) = (lp.start, lp.line);
        self.buf.jump(start, line);
        Ok(())
    }

    /// Leaves the loop past its `>`, dropping conditionals opened in it.
    fn exit_loop(&mut self) -> Result<()> {
        self.skip_to(b">", ErrorCode::MissingRightAngle)?;
        if let Some(lp) = self.loops.pop() {
            self.ifs.truncate(lp.if_depth);
        }
        Ok(())
    }

    /// `n;` leaves the loop when n is not negative, `n:;` when it is.
    pub(super) fn exec_semi(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon, AtSign, M])?;
        if self.loops.is_empty() {
            return Err(error!(SemiNotInLoop));
        }
        let n = cmd.n.ok_or_else(|| error!(NoArgSemi))?;
        let exit = if cmd.colon { n < 0 } else { n >= 0 };
        if exit {
            self.exit_loop()?;
        }
        Ok(())
    }

    pub(super) fn exec_restart(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M, N])?;
        match self.loops.last() {
            Some(lp) => {
                let (start, line, if_depth) = (lp.start, lp.line, lp.if_depth);
                self.ifs.truncate(if_depth);
                self.buf.jump(start, line);
            }
            None => {
                self.ifs.clear();
                self.buf.jump(0, 1);
            }
        }
        Ok(())
    }

    pub(super) fn exec_next(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M, N])?;
        if self.loops.is_empty() {
            self.ifs.clear();
            self.buf.to_end();
            return Ok(());
        }
        if let Some(lp) = self.loops.last() {
            let if_depth = lp.if_depth;
            self.skip_to(b">", ErrorCode::MissingRightAngle)?;
            self.ifs.truncate(if_depth);
        }
        self.loop_end()
    }

    // *** Conditionals

    pub(super) fn exec_if(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M])?;
        let n = cmd.n.ok_or_else(|| error!(NoArgQuote))?;
        let pass = condition(cmd.c2, n)?;
        let cond = Cond {
            loop_depth: self.loops.len(),
            start: self.cmd_start,
            else_pos: None,
        };
        self.ifs.push(cond)?;
        if !pass {
            self.skip_branch()?;
        }
        Ok(())
    }

    /// Moves to the else clause of the current conditional, or past its
    /// end when there is none.
    fn skip_branch(&mut self) -> Result<()> {
        if self.skip_to(b"|'", ErrorCode::MissingApostrophe)? == b'|' {
            let pos = self.buf.pos();
            if let Some(cond) = self.ifs.last_mut() {
                cond.else_pos = Some(pos);
            }
        } else {
            self.ifs.pop();
        }
        Ok(())
    }

    fn check_cond_nesting(&self) -> Result<()> {
        let cond = self.ifs.last().ok_or_else(|| error!(MissingQuote))?;
        if self.config.strict_nesting() && cond.loop_depth != self.loops.len() {
            return Err(error!(BadNesting));
        }
        Ok(())
    }

    pub(super) fn exec_end_if(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, NO_MODIFIERS)?;
        self.check_cond_nesting()?;
        self.ifs.pop();
        Ok(())
    }

    /// `|` reached by running the true branch skips the false one.
    pub(super) fn exec_else(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M, N])?;
        self.check_cond_nesting()?;
        self.skip_to(b"'", ErrorCode::MissingApostrophe)?;
        self.ifs.pop();
        Ok(())
    }

    pub(super) fn exec_flow_end_if(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M, N])?;
        let loop_depth = match self.ifs.last() {
            Some(cond) => cond.loop_depth,
            None => return Err(error!(MissingQuote)),
        };
        self.loops.truncate(loop_depth);
        self.skip_to(b"'", ErrorCode::MissingApostrophe)?;
        self.ifs.pop();
        Ok(())
    }

    pub(super) fn exec_flow_else(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M, N])?;
        let (in_else, loop_depth) = match self.ifs.last() {
            Some(cond) => (cond.else_pos.is_some(), cond.loop_depth),
            None => return Err(error!(MissingQuote)),
        };
        self.loops.truncate(loop_depth);
        if in_else {
            self.skip_to(b"'", ErrorCode::MissingApostrophe)?;
            self.ifs.pop();
            return Ok(());
        }
        self.skip_branch()
    }
}

const NO_MODIFIERS: &[super::dispatch::Reject] = &[Colon, DColon, AtSign];

/// Evaluates the test letter of `n"x`.
fn condition(code: u8, n: Int) -> Result<bool> {
    let ch = if (0..=255).contains(&n) {
        Some(n as u8)
    } else {
        None
    };
    let is = |f: fn(&u8) -> bool| ch.map_or(false, |c| f(&c));
    Ok(match code {
        b'A' => is(u8::is_ascii_alphabetic),
        b'C' => ch.map_or(false, |c| c.is_ascii_alphanumeric() || b"._$".contains(&c)),
        b'D' => is(u8::is_ascii_digit),
        b'E' | b'F' | b'U' | b'=' => n == 0,
        b'G' | b'>' => n > 0,
        b'L' | b'S' | b'T' | b'<' => n < 0,
        b'N' => n != 0,
        b'R' => is(u8::is_ascii_alphanumeric),
        b'V' => is(u8::is_ascii_lowercase),
        b'W' => is(u8::is_ascii_uppercase),
        _ => return Err(error!(IllegalQuote @ code)),
    })
}
