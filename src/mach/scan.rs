use super::dispatch::{self, Reject, Scan};
use super::op::Operator;
use super::Machine;
use crate::error;
use crate::lang::{printable, Cmd, Error, Int, RegName, ESC};
use chrono::{Datelike, Local, Timelike};

type Result<T> = std::result::Result<T, Error>;

/// Value of `EO`.
pub const VERSION: Int = 200;

impl Machine {
    /// Reads one command or expression piece from the active buffer.
    pub(super) fn scan_cmd(&mut self, cmd: &mut Cmd) -> Result<Scan> {
        self.buf.skip_whitespace();
        self.cmd_start = self.buf.pos();
        let mut ch = match self.buf.fetch() {
            Some(ch) => ch,
            None => return Ok(Scan::End),
        };
        if ch == b'^' {
            let next = self.buf.require()?.to_ascii_uppercase();
            if !(b'@'..=b'_').contains(&next) {
                return Err(error!(IllegalCaret @ next));
            }
            ch = next & 0x1f;
        }
        if ch == 0x1e {
            let value = self.buf.require()?;
            self.push_operand(Int::from(value))?;
            self.trace_scan();
            return Ok(Scan::Operand);
        }
        let ch = ch.to_ascii_uppercase();
        cmd.c1 = ch;
        let entry = match ch {
            b'E' | b'F' => {
                let c2 = self.buf.require()?.to_ascii_uppercase();
                cmd.c2 = c2;
                if ch == b'E' {
                    dispatch::secondary_e(c2).ok_or_else(|| error!(IllegalEChar @ c2))?
                } else {
                    dispatch::secondary_f(c2).ok_or_else(|| error!(IllegalFChar @ c2))?
                }
            }
            _ => dispatch::primary(ch).ok_or_else(|| error!(IllegalCommand @ ch))?,
        };
        let complete = (entry.scan)(self, cmd)?;
        self.trace_scan();
        if complete {
            Ok(Scan::Command(entry))
        } else {
            Ok(Scan::Operand)
        }
    }

    fn trace_scan(&mut self) {
        if self.config.trace && !self.skipping {
            let text = &self.buf.as_bytes()[self.cmd_start..self.buf.pos()];
            let echo: String = text.iter().map(|&c| printable(c)).collect();
            self.print(echo.as_bytes());
        }
    }

    /// Resolves the expression into the command's n argument.
    pub(super) fn scan_args(&mut self, cmd: &mut Cmd) -> Result<()> {
        if self.skipping {
            self.expr.clear();
            cmd.n = None;
            return Ok(());
        }
        cmd.n = self.pop_n()?;
        Ok(())
    }

    /// Refuses argument shapes the command does not take, when strict
    /// argument checking is on.
    pub(super) fn confirm(&self, cmd: &Cmd, rejects: &[Reject]) -> Result<()> {
        if !self.config.strict_args() || self.skipping {
            return Ok(());
        }
        for reject in rejects {
            let hit = match reject {
                Reject::Colon => cmd.colon && !cmd.dcolon,
                Reject::DColon => cmd.dcolon,
                Reject::AtSign => cmd.atsign,
                Reject::M => cmd.m.is_some(),
                Reject::N => cmd.n.is_some(),
                Reject::NegM => cmd.m.map_or(false, |m| m < 0),
                Reject::NegN => cmd.n.map_or(false, |n| n < 0),
                Reject::MWithoutN => cmd.m.is_some() && cmd.n.is_none(),
            };
            if hit {
                return Err(match reject {
                    Reject::Colon | Reject::DColon | Reject::AtSign => {
                        error!(IllegalModifier; cmd.name())
                    }
                    _ => error!(BadArguments; cmd.to_string()),
                });
            }
        }
        Ok(())
    }

    fn scan_reg(&mut self, cmd: &mut Cmd, accumulator: bool) -> Result<()> {
        let mut ch = self.buf.require()?;
        let local = ch == b'.';
        if local {
            ch = self.buf.require()?;
        }
        cmd.reg = Some(if accumulator {
            RegName::accumulator(ch, local)?
        } else {
            RegName::new(ch, local)?
        });
        Ok(())
    }

    fn scan_text(&mut self, cmd: &mut Cmd, delim: u8, count: usize) -> Result<()> {
        let braces = self.config.braces();
        self.buf.scan_texts(cmd, delim, count, braces)
    }

    fn in_xparens(&self) -> bool {
        self.config.xoper() && self.expr.nesting() > 0
    }

    /// Takes the n of a command that is an operand without one.
    fn pending_n(&mut self) -> Result<Option<Int>> {
        if self.skipping {
            self.expr.clear();
            return Ok(None);
        }
        self.pop_pending()
    }

    // *** Commands with no special syntax

    pub(super) fn scan_command(&mut self, cmd: &mut Cmd) -> Result<bool> {
        self.scan_args(cmd)?;
        Ok(true)
    }

    pub(super) fn scan_reg_cmd(&mut self, cmd: &mut Cmd) -> Result<bool> {
        self.scan_reg(cmd, false)?;
        self.scan_args(cmd)?;
        Ok(true)
    }

    pub(super) fn scan_acc_cmd(&mut self, cmd: &mut Cmd) -> Result<bool> {
        self.scan_reg(cmd, true)?;
        self.scan_args(cmd)?;
        Ok(true)
    }

    pub(super) fn scan_text_cmd(&mut self, cmd: &mut Cmd) -> Result<bool> {
        self.scan_text(cmd, ESC, 1)?;
        self.scan_args(cmd)?;
        Ok(true)
    }

    pub(super) fn scan_two_texts(&mut self, cmd: &mut Cmd) -> Result<bool> {
        self.scan_text(cmd, ESC, 2)?;
        self.scan_args(cmd)?;
        Ok(true)
    }

    pub(super) fn scan_reg_text(&mut self, cmd: &mut Cmd) -> Result<bool> {
        self.scan_reg(cmd, false)?;
        self.scan_text(cmd, ESC, 1)?;
        self.scan_args(cmd)?;
        Ok(true)
    }

    pub(super) fn scan_ctrl_a(&mut self, cmd: &mut Cmd) -> Result<bool> {
        self.scan_text(cmd, 0x01, 1)?;
        self.scan_args(cmd)?;
        Ok(true)
    }

    pub(super) fn scan_ctrl_u(&mut self, cmd: &mut Cmd) -> Result<bool> {
        self.scan_reg(cmd, true)?;
        self.scan_text(cmd, ESC, 1)?;
        self.scan_args(cmd)?;
        Ok(true)
    }

    pub(super) fn scan_quote(&mut self, cmd: &mut Cmd) -> Result<bool> {
        self.scan_args(cmd)?;
        cmd.c2 = self.buf.require()?.to_ascii_uppercase();
        Ok(true)
    }

    pub(super) fn scan_escape(&mut self, cmd: &mut Cmd) -> Result<bool> {
        self.expr.clear();
        cmd.m = None;
        cmd.n = None;
        Ok(true)
    }

    // *** Expression pieces

    pub(super) fn scan_digits(&mut self, cmd: &mut Cmd) -> Result<bool> {
        let radix = self.config.radix;
        let mut value: Int = 0;
        let mut digit = Some(cmd.c1);
        while let Some(ch) = digit {
            // Skipped literals are consumed, never evaluated.
            if !self.skipping {
                let d = Int::from(ch - b'0');
                if d >= radix {
                    return Err(error!(IllegalNumber @ ch));
                }
                value = value
                    .checked_mul(radix)
                    .and_then(|v| v.checked_add(d))
                    .ok_or_else(|| error!(Overflow))?;
            }
            digit = match self.buf.peek() {
                Some(next) if next.is_ascii_digit() => self.buf.fetch(),
                _ => None,
            };
        }
        self.push_operand(value)?;
        Ok(false)
    }

    pub(super) fn scan_operator(&mut self, cmd: &mut Cmd) -> Result<bool> {
        let binary = self.expr.has_operand();
        let op = match cmd.c1 {
            b'+' if binary => Operator::Add,
            b'+' => Operator::Plus,
            b'-' if binary => Operator::Sub,
            b'-' => Operator::Neg,
            b'*' => Operator::Mul,
            b'&' => Operator::And,
            _ => Operator::Or,
        };
        self.push_operator(op)?;
        Ok(false)
    }

    pub(super) fn scan_divide(&mut self, _cmd: &mut Cmd) -> Result<bool> {
        let op = if self.in_xparens() && self.buf.next_is(b'/') {
            Operator::Rem
        } else {
            Operator::Div
        };
        self.push_operator(op)?;
        Ok(false)
    }

    pub(super) fn scan_complement(&mut self, _cmd: &mut Cmd) -> Result<bool> {
        self.push_operator(Operator::Complement)?;
        Ok(false)
    }

    pub(super) fn scan_tilde(&mut self, _cmd: &mut Cmd) -> Result<bool> {
        if !self.in_xparens() {
            return Err(error!(IllegalCommand @ b'~'));
        }
        self.push_operator(Operator::Xor)?;
        Ok(false)
    }

    pub(super) fn scan_open(&mut self, _cmd: &mut Cmd) -> Result<bool> {
        self.expr.open_paren()?;
        Ok(false)
    }

    pub(super) fn scan_close(&mut self, _cmd: &mut Cmd) -> Result<bool> {
        let arith = self.arith();
        self.expr.close_paren(arith)?;
        Ok(false)
    }

    pub(super) fn scan_lt(&mut self, cmd: &mut Cmd) -> Result<bool> {
        if self.in_xparens() {
            let op = if self.buf.next_is(b'=') {
                Operator::Le
            } else if self.buf.next_is(b'<') {
                Operator::Shl
            } else if self.buf.next_is(b'>') {
                Operator::Ne
            } else {
                Operator::Lt
            };
            self.push_operator(op)?;
            return Ok(false);
        }
        self.scan_command(cmd)
    }

    pub(super) fn scan_gt(&mut self, cmd: &mut Cmd) -> Result<bool> {
        if self.in_xparens() {
            let op = if self.buf.next_is(b'=') {
                Operator::Ge
            } else if self.buf.next_is(b'>') {
                Operator::Shr
            } else {
                Operator::Gt
            };
            self.push_operator(op)?;
            return Ok(false);
        }
        self.scan_command(cmd)
    }

    pub(super) fn scan_equals(&mut self, cmd: &mut Cmd) -> Result<bool> {
        if self.in_xparens() && self.buf.next_is(b'=') {
            self.push_operator(Operator::Eq)?;
            return Ok(false);
        }
        if self.buf.next_is(b'=') {
            cmd.c2 = b'=';
            if self.buf.next_is(b'=') {
                cmd.c3 = b'=';
            }
        }
        self.scan_command(cmd)
    }

    pub(super) fn scan_bang(&mut self, cmd: &mut Cmd) -> Result<bool> {
        if self.in_xparens() {
            let op = if self.buf.next_is(b'=') {
                Operator::Ne
            } else {
                Operator::Not
            };
            self.push_operator(op)?;
            return Ok(false);
        }
        self.scan_tag(cmd)
    }

    pub(super) fn scan_comma(&mut self, cmd: &mut Cmd) -> Result<bool> {
        if self.skipping {
            self.expr.clear();
            return Ok(false);
        }
        let m = self.pop_n()?.ok_or_else(|| error!(NoArgComma))?;
        if cmd.m.is_some() {
            return Err(error!(BadArguments; format!("{},{},", cmd.m.unwrap_or(0), m)));
        }
        cmd.m = Some(m);
        Ok(false)
    }

    pub(super) fn scan_colon(&mut self, cmd: &mut Cmd) -> Result<bool> {
        if self.buf.next_is(b':') {
            cmd.dcolon = true;
        }
        cmd.colon = true;
        Ok(false)
    }

    pub(super) fn scan_atsign(&mut self, cmd: &mut Cmd) -> Result<bool> {
        cmd.atsign = true;
        Ok(false)
    }

    // *** Operands

    pub(super) fn scan_dot(&mut self, _cmd: &mut Cmd) -> Result<bool> {
        let dot = self.edit.dot() as Int;
        self.push_operand(dot)?;
        Ok(false)
    }

    pub(super) fn scan_b(&mut self, _cmd: &mut Cmd) -> Result<bool> {
        self.push_operand(0)?;
        Ok(false)
    }

    pub(super) fn scan_z(&mut self, _cmd: &mut Cmd) -> Result<bool> {
        let z = self.edit.len() as Int;
        self.push_operand(z)?;
        Ok(false)
    }

    pub(super) fn scan_h(&mut self, cmd: &mut Cmd) -> Result<bool> {
        self.expr.clear();
        cmd.m = Some(0);
        let z = self.edit.len() as Int;
        self.push_operand(z)?;
        Ok(false)
    }

    pub(super) fn scan_q(&mut self, cmd: &mut Cmd) -> Result<bool> {
        self.scan_reg(cmd, false)?;
        let n = self.pending_n()?;
        let value = match cmd.reg {
            Some(reg) if cmd.colon => self.regs.text(reg).len() as Int,
            Some(reg) => match n {
                Some(n) => char_at(self.regs.text(reg), n),
                None => self.regs.value(reg),
            },
            None => 0,
        };
        cmd.colon = false;
        cmd.dcolon = false;
        cmd.reg = None;
        self.push_operand(value)?;
        Ok(false)
    }

    /// `nA` is the character at dot plus n. Without n, `A` is the
    /// append-from-input command.
    pub(super) fn scan_a(&mut self, cmd: &mut Cmd) -> Result<bool> {
        if self.expr.has_operand() {
            let n = self.pending_n()?.unwrap_or(0);
            let value = self.edit.read(n).map_or(-1, Int::from);
            self.push_operand(value)?;
            return Ok(false);
        }
        self.scan_command(cmd)
    }

    pub(super) fn scan_lines(&mut self, _cmd: &mut Cmd) -> Result<bool> {
        let n = self.pending_n()?.unwrap_or(1);
        let count = self.edit.lines(n);
        self.push_operand(count)?;
        Ok(false)
    }

    pub(super) fn scan_date(&mut self, _cmd: &mut Cmd) -> Result<bool> {
        let now = Local::now();
        let year = Int::from(now.year()) - 1900;
        let date = (year * 16 + Int::from(now.month())) * 32 + Int::from(now.day());
        self.push_operand(date)?;
        Ok(false)
    }

    pub(super) fn scan_time(&mut self, _cmd: &mut Cmd) -> Result<bool> {
        let now = Local::now();
        let seconds = Int::from(now.num_seconds_from_midnight());
        self.push_operand(seconds / 2)?;
        Ok(false)
    }

    pub(super) fn scan_total(&mut self, _cmd: &mut Cmd) -> Result<bool> {
        let total = self.regs.total_text() as Int;
        self.push_operand(total)?;
        Ok(false)
    }

    pub(super) fn scan_version(&mut self, _cmd: &mut Cmd) -> Result<bool> {
        self.push_operand(VERSION)?;
        Ok(false)
    }

    // *** Operands that become commands when given arguments

    pub(super) fn scan_radix(&mut self, cmd: &mut Cmd) -> Result<bool> {
        if self.expr.has_operand() {
            return self.scan_command(cmd);
        }
        let radix = self.config.radix;
        self.push_operand(radix)?;
        Ok(false)
    }

    pub(super) fn scan_flag(&mut self, cmd: &mut Cmd) -> Result<bool> {
        if self.expr.has_operand() || cmd.m.is_some() {
            return self.scan_command(cmd);
        }
        let value = *self.flag_mut(cmd.c2);
        self.push_operand(value)?;
        Ok(false)
    }

    /// `^T` reads a character; `n^T` types one.
    pub(super) fn scan_ctrl_t(&mut self, cmd: &mut Cmd) -> Result<bool> {
        if self.expr.has_operand() {
            return self.scan_command(cmd);
        }
        let value = if self.skipping {
            0
        } else {
            match self.term.read_char(!cmd.colon) {
                Some(ch) => {
                    if self.config.echo() {
                        self.print(&[ch]);
                    }
                    Int::from(ch)
                }
                None => -1,
            }
        };
        cmd.colon = false;
        self.push_operand(value)?;
        Ok(false)
    }

    /// `\` reads the number at dot and moves past it; `n\` inserts n.
    pub(super) fn scan_backslash(&mut self, cmd: &mut Cmd) -> Result<bool> {
        if self.expr.has_operand() {
            return self.scan_command(cmd);
        }
        let value = if self.skipping {
            0
        } else {
            self.read_number()
        };
        self.push_operand(value)?;
        Ok(false)
    }

    fn read_number(&mut self) -> Int {
        let radix = self.config.radix;
        let mut pos = self.edit.dot();
        let negative = match self.edit.at(pos) {
            Some(b'-') => {
                pos += 1;
                true
            }
            Some(b'+') => {
                pos += 1;
                false
            }
            _ => false,
        };
        let mut value: Int = 0;
        let mut digits = 0;
        while let Some(ch) = self.edit.at(pos) {
            let d = match (ch as char).to_digit(radix as u32) {
                Some(d) => Int::from(d),
                None => break,
            };
            value = match value.checked_mul(radix).and_then(|v| v.checked_add(d)) {
                Some(v) => v,
                None => break,
            };
            digits += 1;
            pos += 1;
        }
        if digits == 0 {
            return 0;
        }
        self.edit.set_dot(pos);
        if negative {
            -value
        } else {
            value
        }
    }

    pub(super) fn flag_mut(&mut self, c2: u8) -> &mut Int {
        match c2 {
            b'1' => &mut self.config.e1,
            b'2' => &mut self.config.e2,
            b'H' => &mut self.config.eh,
            _ => &mut self.config.et,
        }
    }
}

/// Character n of a register's text, or -1 outside it.
fn char_at(text: &[u8], n: Int) -> Int {
    if n < 0 {
        return -1;
    }
    text.get(n as usize).map_or(-1, |&c| Int::from(c))
}
